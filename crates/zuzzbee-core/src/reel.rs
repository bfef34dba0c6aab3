//! Story Reel Projection
//!
//! Turns the story collection into avatar entries for the reel. Pure; the
//! click target is just the story id.

use crate::config::STORY_PLACEHOLDER_IMAGE;
use crate::domain::Story;

/// Avatar ring color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingState {
    Unseen,
    Seen,
}

impl RingState {
    pub fn css_class(&self) -> &'static str {
        match self {
            RingState::Unseen => "story-ring unseen",
            RingState::Seen => "story-ring seen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReelEntry {
    pub story_id: String,
    pub label: String,
    pub initial: String,
    pub preview_url: String,
    pub ring: RingState,
}

impl ReelEntry {
    pub fn from_story(story: &Story) -> Self {
        Self {
            story_id: story.id.clone(),
            label: story.user.display_label().to_string(),
            initial: story.user.initial(),
            preview_url: story
                .items
                .first()
                .map(|item| item.image_url.clone())
                .unwrap_or_else(|| STORY_PLACEHOLDER_IMAGE.to_string()),
            ring: if story.is_seen { RingState::Seen } else { RingState::Unseen },
        }
    }
}

/// One entry per story in collection order
pub fn reel_entries(stories: &[Story]) -> Vec<ReelEntry> {
    stories.iter().map(ReelEntry::from_story).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoryItem, User};

    #[test]
    fn test_empty_collection_has_no_entries() {
        assert!(reel_entries(&[]).is_empty());
    }

    #[test]
    fn test_entries_keep_order_and_ring_state() {
        let mut seen = Story::new(User::new("u1", "alice"), vec![StoryItem::image("a.png")], None);
        seen.is_seen = true;
        let fresh = Story::new(User::new("u2", "bob"), vec![StoryItem::image("b.png")], None);

        let entries = reel_entries(&[fresh.clone(), seen.clone()]);
        assert_eq!(entries[0].story_id, fresh.id);
        assert_eq!(entries[0].ring, RingState::Unseen);
        assert_eq!(entries[1].ring, RingState::Seen);
        assert_eq!(entries[1].preview_url, "a.png");
        assert_eq!(entries[1].label, "alice");
    }

    #[test]
    fn test_story_without_items_uses_placeholder() {
        let story = Story::new(User::new("u1", "alice"), Vec::new(), None);
        assert_eq!(ReelEntry::from_story(&story).preview_url, STORY_PLACEHOLDER_IMAGE);
    }
}
