//! ZuzzBee Core
//!
//! Layered domain logic for the ZuzzBee frontend:
//! - domain: entities and errors
//! - repository: shared collections behind a trait
//! - viewer / reel: story playback state machine and reel projection
//! - upload / caption: story and photo creation, caption suggestions
//! - settings: persisted session user and appearance

pub mod caption;
pub mod config;
pub mod domain;
pub mod ids;
pub mod notice;
pub mod reel;
pub mod repository;
pub mod seed;
pub mod services;
pub mod settings;
pub mod upload;
pub mod viewer;

pub use domain::{
    Campaign, Comment, DomainError, DomainResult, Entity, Photo, Privacy, Story, StoryItem,
    StoryItemKind, User, UserPatch,
};
pub use notice::{Notice, NoticeKind};
pub use repository::{MemoryRepository, Repository, SharedRepository};
pub use services::AppServices;
pub use viewer::{SegmentFill, StoryViewer, ViewerState};
