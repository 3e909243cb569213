//! In-memory implementation of ResourceStore
//!
//! State lives for the lifetime of the process; a restart yields empty stores.

use crate::core::entity::Entity;
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::store::ResourceStore;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory store
///
/// Uses a single RwLock per store for thread-safe access and an IndexMap so
/// that listing follows insertion order.
pub struct InMemoryStore<T> {
    entity_type: String,
    data: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entity_type: self.entity_type.clone(),
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store named after the entity type
    pub fn new() -> Self {
        Self::named(T::resource_name_singular())
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryStore<T> {
    /// Create an empty store with an explicit entity name for errors
    pub fn named(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            data: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, IndexMap<Uuid, T>>> {
        self.data.read().map_err(|e| ServiceError::Storage {
            message: format!("Failed to acquire read lock: {}", e),
        })
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, IndexMap<Uuid, T>>> {
        self.data.write().map_err(|e| ServiceError::Storage {
            message: format!("Failed to acquire write lock: {}", e),
        })
    }
}

impl<T: Entity> ResourceStore<T> for InMemoryStore<T> {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn insert(&self, id: Uuid, value: T) -> ServiceResult<T> {
        let mut data = self.write()?;

        match data.entry(id) {
            Entry::Occupied(_) => Err(ServiceError::conflict(&self.entity_type, id)),
            Entry::Vacant(slot) => {
                slot.insert(value.clone());
                Ok(value)
            }
        }
    }

    fn get(&self, id: &Uuid) -> ServiceResult<T> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(&self.entity_type, *id))
    }

    fn list_all(&self) -> ServiceResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn replace(&self, id: &Uuid, value: T) -> ServiceResult<T> {
        let mut data = self.write()?;

        let slot = data
            .get_mut(id)
            .ok_or_else(|| ServiceError::not_found(&self.entity_type, *id))?;
        *slot = value.clone();

        Ok(value)
    }

    fn remove(&self, id: &Uuid) -> ServiceResult<T> {
        self.write()?
            .shift_remove(id)
            .ok_or_else(|| ServiceError::not_found(&self.entity_type, *id))
    }

    fn contains(&self, id: &Uuid) -> ServiceResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    fn len(&self) -> ServiceResult<usize> {
        Ok(self.read()?.len())
    }
}
