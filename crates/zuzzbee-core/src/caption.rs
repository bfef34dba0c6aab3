//! Caption Suggestions
//!
//! Request/response contract for the external caption service plus a
//! deterministic mock. One request, one response, no retry.

use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::extract_emojis;
use crate::notice::Notice;
use crate::upload::parse_data_uri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    pub photo_data_uri: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionSuggestion {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub emojis: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    #[error("an image and a category are required")]
    MissingInput,
    #[error("image is not an embeddable data URI")]
    InvalidImage,
    #[error("caption service failed: {0}")]
    Service(String),
}

impl CaptionError {
    pub fn notice(&self) -> Notice {
        match self {
            CaptionError::MissingInput => Notice::destructive("Missing Information").with_description(
                "Please upload an image and select a category to generate a caption.",
            ),
            _ => Notice::destructive("AI Suggestion Failed")
                .with_description("Could not generate suggestions. Please try again."),
        }
    }
}

pub fn ready_notice() -> Notice {
    Notice::success("AI Suggestions Ready!").with_description("Caption, hashtags, and emojis suggested.")
}

#[async_trait(?Send)]
pub trait CaptionService {
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionSuggestion, CaptionError>;
}

/// Validate inputs, then make exactly one call to `service`
pub async fn suggest(
    service: &dyn CaptionService,
    image_data_uri: &str,
    category: &str,
) -> Result<CaptionSuggestion, CaptionError> {
    if image_data_uri.is_empty() || category.trim().is_empty() {
        return Err(CaptionError::MissingInput);
    }
    let request = CaptionRequest {
        photo_data_uri: image_data_uri.to_string(),
        category: category.to_string(),
    };
    service.generate(request).await.map_err(|err| {
        warn!("caption suggestion failed: {}", err);
        err
    })
}

/// Append hashtags not already in `caption` (case-insensitive)
pub fn append_hashtags(caption: &str, hashtags: &[String]) -> String {
    let existing: Vec<String> = caption
        .split_whitespace()
        .filter(|word| word.starts_with('#'))
        .map(|word| word.to_lowercase())
        .collect();
    let mut added: Vec<String> = Vec::new();
    for tag in hashtags {
        let tag = if tag.starts_with('#') { tag.clone() } else { format!("#{}", tag) };
        let key = tag.to_lowercase();
        if !existing.contains(&key) && !added.iter().any(|a| a.to_lowercase() == key) {
            added.push(tag);
        }
    }
    join_trimmed(caption, &added)
}

/// Append emojis not already in `caption`
pub fn append_emojis(caption: &str, emojis: &[String]) -> String {
    let existing = extract_emojis(caption);
    let mut added: Vec<String> = Vec::new();
    for emoji in emojis {
        if !existing.contains(emoji) && !added.contains(emoji) {
            added.push(emoji.clone());
        }
    }
    join_trimmed(caption, &added)
}

fn join_trimmed(caption: &str, extra: &[String]) -> String {
    format!("{} {}", caption, extra.join(" ")).trim().to_string()
}

/// Offline stand-in keyed on category
#[derive(Debug, Clone, Default)]
pub struct MockCaptionService {
    /// Fail every request with this message
    pub fail_with: Option<String>,
}

#[async_trait(?Send)]
impl CaptionService for MockCaptionService {
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionSuggestion, CaptionError> {
        if let Some(message) = &self.fail_with {
            return Err(CaptionError::Service(message.clone()));
        }
        match parse_data_uri(&request.photo_data_uri) {
            Some((mime, _)) if mime.starts_with("image/") => {}
            _ => return Err(CaptionError::InvalidImage),
        }

        let category = request.category.trim();
        let slug: String = category
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let (caption, emojis): (&str, &[&str]) = match slug.as_str() {
            "nature" => ("Lost in the quiet of the wild.", &["🌿", "🌄"]),
            "travel" => ("Collecting moments, not things.", &["✈️", "🗺️"]),
            "food" => ("Good food, good mood.", &["🍜", "😋"]),
            "animals" => ("Best friends come with paws.", &["🐾", "🐶"]),
            "music" => ("Turn it up.", &["🎶", "🎧"]),
            "sports" => ("Leave it all on the field.", &["🏅", "🔥"]),
            "art" => ("Every color tells a story.", &["🎨", "✨"]),
            _ => ("A moment worth sharing.", &["📸", "✨"]),
        };

        Ok(CaptionSuggestion {
            caption: caption.to_string(),
            hashtags: vec![slug.clone(), format!("{}photography", slug), "zuzzbee".to_string()],
            emojis: emojis.iter().map(|e| e.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/png;base64,aGk=";

    #[tokio::test]
    async fn test_mock_suggests_for_category() {
        let service = MockCaptionService::default();
        let suggestion = suggest(&service, IMAGE, "Food").await.expect("suggestion failed");
        assert_eq!(suggestion.caption, "Good food, good mood.");
        assert_eq!(suggestion.hashtags[0], "food");
        assert_eq!(suggestion.emojis.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_input_skips_service() {
        let service = MockCaptionService {
            fail_with: Some("should not be called".to_string()),
        };
        assert_eq!(suggest(&service, "", "Food").await, Err(CaptionError::MissingInput));
        assert_eq!(suggest(&service, IMAGE, " ").await, Err(CaptionError::MissingInput));
    }

    #[tokio::test]
    async fn test_service_failure_is_reported_once() {
        let service = MockCaptionService {
            fail_with: Some("quota".to_string()),
        };
        let err = suggest(&service, IMAGE, "Art").await.unwrap_err();
        assert_eq!(err, CaptionError::Service("quota".to_string()));
        assert_eq!(err.notice().title, "AI Suggestion Failed");
    }

    #[tokio::test]
    async fn test_rejects_non_image_data() {
        let service = MockCaptionService::default();
        let err = suggest(&service, "https://example.com/a.png", "Art").await.unwrap_err();
        assert_eq!(err, CaptionError::InvalidImage);
    }

    #[test]
    fn test_append_hashtags_skips_existing() {
        let tags = vec!["Beach".to_string(), "#sun".to_string(), "sea".to_string()];
        let caption = append_hashtags("Day out #beach", &tags);
        assert_eq!(caption, "Day out #beach #sun #sea");
    }

    #[test]
    fn test_append_hashtags_on_empty_caption() {
        assert_eq!(append_hashtags("", &["a".to_string()]), "#a");
    }

    #[test]
    fn test_append_emojis_skips_existing() {
        let emojis = vec!["🌿".to_string(), "🌄".to_string()];
        assert_eq!(append_emojis("Hike 🌿", &emojis), "Hike 🌿 🌄");
    }
}
