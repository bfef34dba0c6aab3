//! Photo Entity
//!
//! Feed photo with local-only like, bookmark and comment state.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::user::User;
use crate::ids::next_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub photo_id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub image_url: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub emojis: Vec<String>,
    pub category: String,
    /// CSS filter classes, empty for none
    pub filter: String,
    pub likes_count: u32,
    pub comments_count: u32,
    pub shares_count: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub is_liked_by_current_user: bool,
    #[serde(default)]
    pub is_bookmarked_by_current_user: bool,
}

impl Photo {
    /// Fresh upload: hashtags and emojis are pulled out of the caption,
    /// counters start at zero.
    pub fn new(
        user: User,
        image_url: impl Into<String>,
        caption: impl Into<String>,
        category: impl Into<String>,
        filter: impl Into<String>,
    ) -> Self {
        let caption = caption.into();
        Self {
            id: next_id("photo"),
            user_id: user.id.clone(),
            user: Some(user),
            image_url: image_url.into(),
            hashtags: extract_hashtags(&caption),
            emojis: extract_emojis(&caption),
            caption,
            category: category.into(),
            filter: filter.into(),
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            created_at: Utc::now(),
            aspect_ratio: Some("1/1".to_string()),
            comments: Vec::new(),
            is_liked_by_current_user: false,
            is_bookmarked_by_current_user: false,
        }
    }

    /// Flip the like flag and adjust the counter. Returns the new state.
    pub fn toggle_like(&mut self) -> bool {
        if self.is_liked_by_current_user {
            self.likes_count = self.likes_count.saturating_sub(1);
        } else {
            self.likes_count += 1;
        }
        self.is_liked_by_current_user = !self.is_liked_by_current_user;
        self.is_liked_by_current_user
    }

    pub fn toggle_bookmark(&mut self) -> bool {
        self.is_bookmarked_by_current_user = !self.is_bookmarked_by_current_user;
        self.is_bookmarked_by_current_user
    }

    /// Prepend a comment by `author`. Blank text is rejected.
    pub fn add_comment(&mut self, author: &User, text: &str) -> DomainResult<&Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("comment text is empty".to_string()));
        }
        let comment = Comment {
            id: next_id("comment"),
            photo_id: self.id.clone(),
            user_id: author.id.clone(),
            user: Some(author.clone()),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.comments.insert(0, comment);
        self.comments_count += 1;
        Ok(&self.comments[0])
    }

    /// Comments shown inline on the card
    pub fn preview_comments(&self) -> &[Comment] {
        &self.comments[..self.comments.len().min(2)]
    }

    /// True when there are more comments than the inline preview shows
    pub fn has_more_comments(&self) -> bool {
        self.comments_count as usize > self.preview_comments().len()
    }
}

impl Entity for Photo {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

fn hashtag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"))
}

fn emoji_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\p{Emoji_Presentation}|\p{Emoji}\x{FE0F}").expect("emoji pattern is valid")
    })
}

/// Hashtags in order of appearance, without the leading `#`
pub fn extract_hashtags(text: &str) -> Vec<String> {
    hashtag_regex()
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_string())
        .collect()
}

/// Emoji in order of appearance
pub fn extract_emojis(text: &str) -> Vec<String> {
    emoji_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_photo() -> Photo {
        Photo::new(User::new("u1", "alice"), "img.png", "Sunset #beach #Gold 🌅", "Nature", "")
    }

    #[test]
    fn test_new_photo_extracts_tags_and_emojis() {
        let photo = make_photo();
        assert_eq!(photo.hashtags, vec!["beach", "Gold"]);
        assert_eq!(photo.emojis, vec!["🌅"]);
        assert_eq!(photo.likes_count, 0);
    }

    #[test]
    fn test_extract_emojis_ignores_plain_digits() {
        assert!(extract_emojis("room 42 #1").is_empty());
    }

    #[test]
    fn test_toggle_like_twice_restores_count() {
        let mut photo = make_photo();
        photo.likes_count = 10;
        assert!(photo.toggle_like());
        assert_eq!(photo.likes_count, 11);
        assert!(!photo.toggle_like());
        assert_eq!(photo.likes_count, 10);
    }

    #[test]
    fn test_unlike_never_underflows() {
        let mut photo = make_photo();
        photo.is_liked_by_current_user = true;
        photo.toggle_like();
        assert_eq!(photo.likes_count, 0);
    }

    #[test]
    fn test_toggle_bookmark() {
        let mut photo = make_photo();
        assert!(photo.toggle_bookmark());
        assert!(!photo.toggle_bookmark());
    }

    #[test]
    fn test_comments_prepend_and_count() {
        let mut photo = make_photo();
        let bob = User::new("u2", "bob");
        photo.add_comment(&bob, "first").unwrap();
        photo.add_comment(&bob, "  second  ").unwrap();
        photo.add_comment(&bob, "third").unwrap();

        assert_eq!(photo.comments_count, 3);
        assert_eq!(photo.comments[0].text, "third");
        assert_eq!(photo.comments[1].text, "second");
        assert_eq!(photo.preview_comments().len(), 2);
        assert!(photo.has_more_comments());
    }

    #[test]
    fn test_blank_comment_rejected() {
        let mut photo = make_photo();
        let result = photo.add_comment(&User::new("u2", "bob"), "   ");
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(photo.comments_count, 0);
    }
}
