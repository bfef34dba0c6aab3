//! Application Services
//!
//! Everything the UI needs from the domain layer, built once at startup and
//! handed down explicitly instead of living in globals.

use std::sync::Arc;

use log::debug;

use crate::domain::{Campaign, DomainResult, Photo, Story};
use crate::repository::{MemoryRepository, SharedRepository};
use crate::seed;
use crate::settings::{KeyValueStore, MemoryStore};

#[derive(Clone)]
pub struct AppServices {
    pub stories: SharedRepository<Story>,
    pub photos: SharedRepository<Photo>,
    pub campaigns: SharedRepository<Campaign>,
    pub settings: Arc<dyn KeyValueStore>,
}

impl AppServices {
    /// In-memory collections seeded with the demo content
    pub fn new(settings: Arc<dyn KeyValueStore>) -> Self {
        Self {
            stories: Arc::new(MemoryRepository::with_items(seed::stories())),
            photos: Arc::new(MemoryRepository::with_items(seed::photos())),
            campaigns: Arc::new(MemoryRepository::with_items(seed::campaigns())),
            settings,
        }
    }

    /// Fully in-memory, settings included
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Flag a story as seen so the reel mutes its ring.
    /// Returns false when no such story exists.
    pub async fn mark_story_seen(&self, story_id: &str) -> DomainResult<bool> {
        let Some(mut story) = self.stories.find_by_id(story_id.to_string()).await? else {
            return Ok(false);
        };
        if !story.is_seen {
            story.is_seen = true;
            self.stories.update(&story).await?;
            debug!("story {} marked seen", story_id);
        }
        Ok(true)
    }

    /// Apply `change` to one photo and store the result
    pub async fn update_photo<F>(&self, photo_id: &str, change: F) -> DomainResult<Option<Photo>>
    where
        F: FnOnce(&mut Photo) -> DomainResult<()>,
    {
        let Some(mut photo) = self.photos.find_by_id(photo_id.to_string()).await? else {
            return Ok(None);
        };
        change(&mut photo)?;
        self.photos.update(&photo).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::viewer::StoryViewer;

    #[tokio::test]
    async fn test_seeded_collections() {
        let services = AppServices::in_memory();
        assert!(!services.stories.list().await.unwrap().is_empty());
        assert!(!services.photos.list().await.unwrap().is_empty());
        assert!(!services.campaigns.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_and_mark_seen() {
        let services = AppServices::in_memory();
        let stories = services.stories.list().await.unwrap();
        let target = stories.iter().find(|s| !s.is_seen && !s.is_empty()).expect("unseen story");

        let mut viewer = StoryViewer::new();
        assert!(viewer.open_by_id(&stories, &target.id));
        assert!(services.mark_story_seen(&target.id).await.unwrap());

        let reloaded = services.stories.find_by_id(target.id.clone()).await.unwrap().unwrap();
        assert!(reloaded.is_seen);
        assert!(!services.mark_story_seen("story_missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_photo_like() {
        let services = AppServices::in_memory();
        let photo = services.photos.list().await.unwrap().remove(0);
        let before = photo.likes_count;

        let updated = services
            .update_photo(&photo.id, |p| {
                p.toggle_like();
                Ok(())
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.likes_count, before + 1);

        let rejected = services
            .update_photo(&photo.id, |p| p.add_comment(&User::new("u9", "z"), " ").map(|_| ()))
            .await;
        assert!(rejected.is_err());
    }
}
