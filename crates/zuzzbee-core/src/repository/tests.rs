//! Repository Integration Tests
//!
//! Exercises MemoryRepository through the Repository trait object.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{DomainError, Photo, Story, StoryItem, User};
    use crate::repository::{MemoryRepository, Repository, SharedRepository};

    fn make_story(name: &str) -> Story {
        Story::new(User::new("u1", name), vec![StoryItem::image("a.png")], None)
    }

    fn setup_repo() -> SharedRepository<Story> {
        Arc::new(MemoryRepository::<Story>::new())
    }

    #[tokio::test]
    async fn test_prepend_puts_newest_first() {
        let repo = setup_repo();
        let first = repo.prepend(make_story("first")).await.expect("prepend failed");
        let second = repo.prepend(make_story("second")).await.expect("prepend failed");

        let stories = repo.list().await.expect("list failed");
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].id, second.id);
        assert_eq!(stories[1].id, first.id);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_repo();
        let created = repo.prepend(make_story("find me")).await.unwrap();

        let found = repo.find_by_id(created.id.clone()).await.expect("find failed");
        assert_eq!(found.map(|s| s.user.username), Some("find me".to_string()));

        let missing = repo.find_by_id("story_0_0".to_string()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_prepend_conflicts() {
        let repo = setup_repo();
        let story = make_story("dup");
        repo.prepend(story.clone()).await.unwrap();

        let result = repo.prepend(story).await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let repo = setup_repo();
        let older = repo.prepend(make_story("older")).await.unwrap();
        repo.prepend(make_story("newer")).await.unwrap();

        let mut seen = older.clone();
        seen.is_seen = true;
        repo.update(&seen).await.expect("update failed");

        let stories = repo.list().await.unwrap();
        assert_eq!(stories[1].id, older.id);
        assert!(stories[1].is_seen);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_repo();
        let result = repo.update(&make_story("ghost")).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_seeded_photos_keep_order() {
        let owner = User::new("u1", "alice");
        let a = Photo::new(owner.clone(), "a.png", "a", "Nature", "");
        let b = Photo::new(owner, "b.png", "b", "Nature", "");
        let repo = MemoryRepository::with_items(vec![a.clone(), b.clone()]);

        let photos = repo.list().await.unwrap();
        assert_eq!(photos[0].id, a.id);
        assert_eq!(photos[1].id, b.id);
    }
}
