//! Persisted Settings
//!
//! Session user and appearance settings, each stored as one JSON record in
//! a key-value store (browser local storage in the app).

mod store;
mod theme;
mod auth;

pub use store::{KeyValueStore, MemoryStore, StorageError};
pub use theme::{ThemeMode, ThemeSettings};
pub use auth::{authenticate, signup, AuthError, AuthSession, DEMO_EMAIL, DEMO_PASSWORD};
