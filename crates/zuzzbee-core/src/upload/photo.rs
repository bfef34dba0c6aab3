//! Photo Upload
//!
//! Form state for posting a single photo, including caption suggestions.

use log::info;

use super::UploadError;
use crate::caption::{self, CaptionError, CaptionService, CaptionSuggestion};
use crate::config::{ImageFilter, IMAGE_FILTERS};
use crate::domain::{Photo, User};
use crate::notice::Notice;
use crate::repository::Repository;

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDraft {
    pub file_name: Option<String>,
    pub image_data_uri: Option<String>,
    pub caption: String,
    pub category: String,
    pub filter: ImageFilter,
    /// Last successful suggestion, replaced wholesale on each request
    pub suggestion: Option<CaptionSuggestion>,
}

impl Default for PhotoDraft {
    fn default() -> Self {
        Self {
            file_name: None,
            image_data_uri: None,
            caption: String::new(),
            category: String::new(),
            filter: IMAGE_FILTERS[0],
            suggestion: None,
        }
    }
}

impl PhotoDraft {
    /// New image picked; old suggestions no longer apply
    pub fn set_image(&mut self, file_name: String, data_uri: String) {
        self.file_name = Some(file_name);
        self.image_data_uri = Some(data_uri);
        self.suggestion = None;
    }

    pub fn clear_image(&mut self) {
        self.file_name = None;
        self.image_data_uri = None;
        self.suggestion = None;
    }

    /// Ask `service` for caption ideas. The previous suggestion is dropped
    /// before the request so a failure leaves nothing stale behind.
    pub async fn request_suggestion(
        &mut self,
        service: &dyn CaptionService,
    ) -> Result<&CaptionSuggestion, CaptionError> {
        self.suggestion = None;
        let image = self.image_data_uri.as_deref().unwrap_or_default();
        let suggestion = caption::suggest(service, image, &self.category).await?;
        Ok(self.suggestion.insert(suggestion))
    }

    pub fn use_suggested_caption(&mut self) {
        if let Some(s) = &self.suggestion {
            self.caption = s.caption.clone();
        }
    }

    pub fn use_suggested_hashtags(&mut self) {
        if let Some(s) = &self.suggestion {
            self.caption = caption::append_hashtags(&self.caption, &s.hashtags);
        }
    }

    pub fn use_suggested_emojis(&mut self) {
        if let Some(s) = &self.suggestion {
            self.caption = caption::append_emojis(&self.caption, &s.emojis);
        }
    }

    /// Build the photo and put it at the top of the feed
    pub async fn submit(
        &self,
        repo: &dyn Repository<Photo>,
        user: Option<&User>,
    ) -> Result<Photo, UploadError> {
        let (image, user) = match (self.image_data_uri.as_deref(), user) {
            (Some(image), Some(user))
                if !self.caption.trim().is_empty() && !self.category.is_empty() =>
            {
                (image, user)
            }
            _ => {
                return Err(UploadError::MissingInformation(
                    "Please provide an image, caption, category, and ensure you are logged in."
                        .to_string(),
                ))
            }
        };

        let photo = Photo::new(
            user.clone(),
            image,
            self.caption.clone(),
            self.category.clone(),
            self.filter.class_name,
        );
        let photo = repo.prepend(photo).await?;
        info!("photo upload: created {}", photo.id);
        Ok(photo)
    }

    pub fn success_notice(&self) -> Notice {
        let name = self.file_name.as_deref().unwrap_or("Your photo");
        Notice::success("Photo Uploaded!").with_description(format!("{} has been uploaded.", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::MockCaptionService;
    use crate::config::find_filter;
    use crate::repository::MemoryRepository;

    fn ready_draft() -> PhotoDraft {
        let mut draft = PhotoDraft::default();
        draft.set_image("beach.png".to_string(), "data:image/png;base64,aGk=".to_string());
        draft.category = "Travel".to_string();
        draft
    }

    #[tokio::test]
    async fn test_submit_requires_all_fields() {
        let repo = MemoryRepository::<Photo>::new();
        let user = User::new("u1", "alice");
        let draft = ready_draft();

        let result = draft.submit(&repo, Some(&user)).await;
        assert!(matches!(result, Err(UploadError::MissingInformation(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_submit_prepends_photo() {
        let repo = MemoryRepository::<Photo>::new();
        let user = User::new("u1", "alice");
        let mut draft = ready_draft();
        draft.caption = "Waves #sea ☀️".to_string();
        draft.filter = *find_filter("Sepia").unwrap();

        let photo = draft.submit(&repo, Some(&user)).await.expect("submit failed");
        assert_eq!(photo.hashtags, vec!["sea"]);
        assert_eq!(photo.emojis, vec!["☀️"]);
        assert_eq!(photo.filter, "sepia");
        assert_eq!(repo.list().await.unwrap()[0].id, photo.id);
        assert_eq!(draft.success_notice().description.as_deref(), Some("beach.png has been uploaded."));
    }

    #[tokio::test]
    async fn test_suggestion_applies_to_caption() {
        let mut draft = ready_draft();
        draft.caption = "Look #Travel".to_string();
        let service = MockCaptionService::default();

        let suggestion = draft.request_suggestion(&service).await.expect("suggestion failed").clone();
        assert!(!suggestion.hashtags.is_empty());

        draft.use_suggested_hashtags();
        assert_eq!(draft.caption, "Look #Travel #travelphotography #zuzzbee");

        draft.use_suggested_caption();
        assert_eq!(draft.caption, suggestion.caption);
    }

    #[tokio::test]
    async fn test_failed_suggestion_clears_previous() {
        let mut draft = ready_draft();
        let service = MockCaptionService::default();
        draft.request_suggestion(&service).await.unwrap();
        assert!(draft.suggestion.is_some());

        draft.category.clear();
        let result = draft.request_suggestion(&service).await;
        assert!(matches!(result, Err(CaptionError::MissingInput)));
        assert!(draft.suggestion.is_none());
    }

    #[test]
    fn test_new_image_drops_suggestion() {
        let mut draft = ready_draft();
        draft.suggestion = Some(CaptionSuggestion {
            caption: "x".to_string(),
            hashtags: vec![],
            emojis: vec![],
        });
        draft.set_image("other.png".to_string(), "data:image/png;base64,aGk=".to_string());
        assert!(draft.suggestion.is_none());
    }
}
