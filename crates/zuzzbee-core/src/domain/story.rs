//! Story Entity
//!
//! An ordered, ephemeral set of image slides owned by one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::user::User;
use crate::ids::next_id;

/// Slide kind; only images exist today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryItemKind {
    #[default]
    Image,
}

/// One slide within a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryItem {
    pub id: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: StoryItemKind,
    /// Display time in seconds. Carried but not used for playback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl StoryItem {
    pub fn image(image_url: impl Into<String>) -> Self {
        Self {
            id: next_id("storyitem"),
            image_url: image_url.into(),
            kind: StoryItemKind::Image,
            duration: None,
            link: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub user_id: String,
    pub user: User,
    pub timestamp: DateTime<Utc>,
    /// Playback order, fixed at creation
    pub items: Vec<StoryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub is_seen: bool,
}

impl Story {
    /// New unseen story owned by `user`
    pub fn new(user: User, items: Vec<StoryItem>, content: Option<String>) -> Self {
        Self {
            id: next_id("story"),
            user_id: user.id.clone(),
            user,
            timestamp: Utc::now(),
            items,
            content,
            is_seen: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A story with no slides is never shown
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&StoryItem> {
        self.items.get(index)
    }
}

impl Entity for Story {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_story_is_unseen_and_owned() {
        let user = User::new("u1", "alice");
        let story = Story::new(user, vec![StoryItem::image("a.png")], None);
        assert_eq!(story.user_id, "u1");
        assert!(!story.is_seen);
        assert_eq!(story.len(), 1);
        assert!(story.id.starts_with("story_"));
    }

    #[test]
    fn test_item_kind_serializes_as_type() {
        let item = StoryItem::image("a.png");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["imageUrl"], "a.png");
        assert!(json.get("duration").is_none());
    }
}
