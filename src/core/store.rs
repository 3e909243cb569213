//! Store trait for keyed entity storage

use crate::core::entity::Entity;
use crate::core::error::ServiceResult;
use uuid::Uuid;

/// Keyed storage for one entity type
///
/// Each operation is atomic with respect to its key and never partially
/// applies. Values are snapshots: readers receive clones, writers replace
/// whole values.
pub trait ResourceStore<T: Entity>: Send + Sync {
    /// Singular entity name used in errors
    fn entity_type(&self) -> &str;

    /// Store `value` under `id`
    ///
    /// Fails with `Conflict` if `id` is already present; the existing value is
    /// left untouched.
    fn insert(&self, id: Uuid, value: T) -> ServiceResult<T>;

    /// Fails with `NotFound` if `id` is absent
    fn get(&self, id: &Uuid) -> ServiceResult<T>;

    /// All stored values in insertion order
    fn list_all(&self) -> ServiceResult<Vec<T>>;

    /// Overwrite the value under `id`; fails with `NotFound` if absent
    fn replace(&self, id: &Uuid, value: T) -> ServiceResult<T>;

    /// Delete the value under `id`; fails with `NotFound` if absent
    fn remove(&self, id: &Uuid) -> ServiceResult<T>;

    fn contains(&self, id: &Uuid) -> ServiceResult<bool>;

    fn len(&self) -> ServiceResult<usize>;

    fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.len()? == 0)
    }
}
