//! Domain Layer
//!
//! Entities and core abstractions. Nothing here touches the browser.

mod entity;
mod user;
mod story;
mod photo;
mod campaign;

pub use entity::{Entity, DomainError, DomainResult};
pub use user::{User, UserPatch, Privacy};
pub use story::{Story, StoryItem, StoryItemKind};
pub use photo::{Photo, Comment, extract_hashtags, extract_emojis};
pub use campaign::Campaign;
