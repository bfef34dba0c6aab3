//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mirrors the
//! repositories so views never await.

use leptos::prelude::*;
use reactive_stores::Store;
use zuzzbee_core::{Campaign, Photo, Story};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Story collection, newest first
    pub stories: Vec<Story>,
    /// Feed photos, newest first
    pub photos: Vec<Photo>,
    pub campaigns: Vec<Campaign>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Put a new story at the front of the reel
pub fn store_prepend_story(store: &AppStore, story: Story) {
    store.stories().write().insert(0, story);
}

/// Flag a story as seen by ID
pub fn store_mark_story_seen(store: &AppStore, story_id: &str) {
    store.stories().write().iter_mut()
        .find(|story| story.id == story_id)
        .map(|story| story.is_seen = true);
}

/// Put a new photo at the top of the feed
pub fn store_prepend_photo(store: &AppStore, photo: Photo) {
    store.photos().write().insert(0, photo);
}

/// Update a photo in the store by ID
pub fn store_update_photo(store: &AppStore, updated_photo: Photo) {
    store.photos().write().iter_mut()
        .find(|photo| photo.id == updated_photo.id)
        .map(|photo| *photo = updated_photo);
}

/// Photos posted by `user_id`
pub fn store_photos_by_user(store: &AppStore, user_id: &str) -> Vec<Photo> {
    store.photos().with(|photos| {
        photos.iter().filter(|p| p.user_id == user_id).cloned().collect()
    })
}
