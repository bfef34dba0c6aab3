//! In-Memory Repository
//!
//! Vec-backed collection guarded by a lock. Lives as long as the page does.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity};

pub struct MemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Seed with entities, first element is the front of the collection
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for MemoryRepository<T>
where
    T: Entity + 'static,
    T::Id: std::fmt::Debug,
{
    async fn prepend(&self, entity: T) -> DomainResult<T> {
        let mut items = self.write();
        let id = entity.id();
        if items.iter().any(|existing| existing.id() == id) {
            return Err(DomainError::Conflict(format!("{:?} already exists", id)));
        }
        items.insert(0, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>> {
        Ok(self.read().iter().find(|e| e.id() == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.read().clone())
    }

    async fn update(&self, entity: &T) -> DomainResult<T> {
        let mut items = self.write();
        let id = entity.id();
        match items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity.clone())
            }
            None => Err(DomainError::NotFound(format!("{:?}", id))),
        }
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.read().len())
    }
}
