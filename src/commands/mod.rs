//! Browser Bindings
//!
//! Frontend wrappers around browser APIs and the domain services, organized
//! by concern.

mod caption;
mod files;
mod photo;
mod storage;
mod story;
mod theme;

// Re-export all public items
pub use caption::*;
pub use files::*;
pub use photo::*;
pub use storage::*;
pub use story::*;
pub use theme::*;
