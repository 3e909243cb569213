//! Generic resource service composing store, identity, filtering and merging

use crate::config::EntityConfig;
use crate::core::clock::{Clock, SystemClock};
use crate::core::entity::{Deletable, Resource};
use crate::core::error::{ServiceError, ServiceResult};
use crate::core::filter::FilterEngine;
use crate::core::identity::{IdentityAllocator, RandomIdAllocator};
use crate::core::patch::PartialUpdateMerger;
use crate::core::store::ResourceStore;
use std::sync::Arc;
use uuid::Uuid;

/// Create / list / get / patch (and, for [`Deletable`] resources, delete)
/// over one entity type.
///
/// Every entity is in a single "persisted" state once created; the service
/// only translates requests into store operations. Writes that derive
/// fields (order totals) are validated before anything is stored.
pub struct ResourceService<T: Resource> {
    names: EntityConfig,
    store: Arc<dyn ResourceStore<T>>,
    ids: Arc<dyn IdentityAllocator>,
    clock: Arc<dyn Clock>,
    merger: PartialUpdateMerger,
    context: T::Context,
}

impl<T: Resource> ResourceService<T> {
    pub fn new(store: Arc<dyn ResourceStore<T>>, context: T::Context) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            names: EntityConfig::of::<T>(),
            store,
            ids: Arc::new(RandomIdAllocator),
            merger: PartialUpdateMerger::new(clock.clone()),
            clock,
            context,
        }
    }

    pub fn with_names(mut self, names: EntityConfig) -> Self {
        self.names = names;
        self
    }

    pub fn with_identity_allocator(mut self, ids: Arc<dyn IdentityAllocator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.merger = PartialUpdateMerger::new(clock.clone());
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &Arc<dyn ResourceStore<T>> {
        &self.store
    }

    /// Create a new entity
    ///
    /// Uses the client-supplied id when present, otherwise allocates one.
    /// A duplicate id fails with `Conflict` and leaves the stored value as is.
    pub fn create(&self, payload: T::Create) -> ServiceResult<T> {
        let id = T::requested_id(&payload).unwrap_or_else(|| self.ids.allocate());

        let entity = T::from_payload(id, payload, self.clock.now(), &self.context)
            .inspect_err(|e| self.log_rejected("create", &id, e))?;

        let created = self
            .store
            .insert(id, entity)
            .inspect_err(|e| self.log_rejected("create", &id, e))?;

        tracing::info!(entity_type = %self.names.singular, %id, "created");
        Ok(created)
    }

    /// List entities matching every supplied predicate
    pub fn list(&self, filter: &T::Filter) -> ServiceResult<Vec<T>> {
        let all = self.store.list_all()?;
        let total = all.len();
        let results = FilterEngine::apply(all, filter);

        tracing::debug!(
            resource = %self.names.plural,
            total,
            matched = results.len(),
            "listed"
        );
        Ok(results)
    }

    pub fn get(&self, id: &Uuid) -> ServiceResult<T> {
        tracing::debug!(entity_type = %self.names.singular, %id, "get");
        self.store.get(id)
    }

    /// Apply a partial update
    ///
    /// Omitted fields keep their stored values; the modification timestamp is
    /// refreshed on every successful patch.
    ///
    /// Read, merge and write are separate store operations. Two concurrent
    /// patches of the same id are last-writer-wins: the later write replaces
    /// the whole record, dropping fields set only by the earlier one.
    pub fn patch(&self, id: &Uuid, update: T::Update) -> ServiceResult<T> {
        let current = self.store.get(id)?;

        let next = self
            .merger
            .merge(&current, update, &self.context)
            .inspect_err(|e| self.log_rejected("patch", id, e))?;

        let updated = self.store.replace(id, next)?;

        tracing::info!(entity_type = %self.names.singular, %id, "patched");
        Ok(updated)
    }

    pub fn count(&self) -> ServiceResult<usize> {
        self.store.len()
    }

    fn log_rejected(&self, operation: &str, id: &Uuid, error: &ServiceError) {
        tracing::warn!(
            entity_type = %self.names.singular,
            %id,
            operation,
            error = %error,
            "rejected"
        );
    }
}

impl<T: Deletable> ResourceService<T> {
    pub fn delete(&self, id: &Uuid) -> ServiceResult<()> {
        self.store.remove(id)?;

        tracing::info!(entity_type = %self.names.singular, %id, "deleted");
        Ok(())
    }
}
