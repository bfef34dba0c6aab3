//! Repository Layer - Core Traits
//!
//! Abstract interface for the shared collections (stories, photos,
//! campaigns). The app uses the in-memory implementation; a remote backend
//! can be swapped in behind the same trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Ordered collection of entities, newest first
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert at the front of the collection
    async fn prepend(&self, entity: T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// All entities in collection order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity, keeping its position
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Number of entities held
    async fn count(&self) -> DomainResult<usize> {
        Ok(self.list().await?.len())
    }
}

/// Repository handle shared between components
pub type SharedRepository<T> = Arc<dyn Repository<T>>;
