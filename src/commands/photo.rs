//! Photo Commands
//!
//! Frontend bindings for the feed: listing, local likes, bookmarks and
//! comments, and posting a draft.

use zuzzbee_core::upload::{PhotoDraft, UploadError};
use zuzzbee_core::{AppServices, Campaign, Photo, User};

pub async fn list_photos(services: &AppServices) -> Result<Vec<Photo>, String> {
    services.photos.list().await.map_err(|e| e.to_string())
}

pub async fn list_campaigns(services: &AppServices) -> Result<Vec<Campaign>, String> {
    services.campaigns.list().await.map_err(|e| e.to_string())
}

pub async fn toggle_like(services: &AppServices, photo_id: &str) -> Result<Option<Photo>, String> {
    services
        .update_photo(photo_id, |photo| {
            photo.toggle_like();
            Ok(())
        })
        .await
        .map_err(|e| e.to_string())
}

pub async fn toggle_bookmark(services: &AppServices, photo_id: &str) -> Result<Option<Photo>, String> {
    services
        .update_photo(photo_id, |photo| {
            photo.toggle_bookmark();
            Ok(())
        })
        .await
        .map_err(|e| e.to_string())
}

pub async fn add_comment(
    services: &AppServices,
    photo_id: &str,
    author: &User,
    text: &str,
) -> Result<Option<Photo>, String> {
    services
        .update_photo(photo_id, |photo| photo.add_comment(author, text).map(|_| ()))
        .await
        .map_err(|e| e.to_string())
}

pub async fn post_photo(
    services: &AppServices,
    draft: &PhotoDraft,
    user: Option<&User>,
) -> Result<Photo, UploadError> {
    draft.submit(services.photos.as_ref(), user).await
}
