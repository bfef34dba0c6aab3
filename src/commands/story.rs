//! Story Commands
//!
//! Frontend bindings for story collection operations.

use zuzzbee_core::upload::{self, StoryUpload, UploadError};
use zuzzbee_core::{AppServices, Story, User};

use super::files::PickedFile;

pub async fn list_stories(services: &AppServices) -> Result<Vec<Story>, String> {
    services.stories.list().await.map_err(|e| e.to_string())
}

pub async fn mark_story_seen(services: &AppServices, story_id: &str) -> Result<bool, String> {
    services.mark_story_seen(story_id).await.map_err(|e| e.to_string())
}

pub async fn create_story(
    services: &AppServices,
    user: Option<&User>,
    files: &[PickedFile],
    caption: &str,
) -> Result<StoryUpload, UploadError> {
    upload::create_story(services.stories.as_ref(), user, files, caption).await
}
