//! Repository Layer
//!
//! Data access abstractions and the in-memory implementation.

mod traits;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SharedRepository};
pub use memory::MemoryRepository;
