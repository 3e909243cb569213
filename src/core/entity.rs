//! Entity traits defining the core abstraction for all resource types

use crate::core::error::ServiceResult;
use crate::core::filter::Filter;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all entities in the system.
///
/// Entities are immutable value snapshots keyed by a unique identifier.
/// "Mutation" always means storing a new snapshot under the same id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "persons", "addresses")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "person", "address")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;
}

/// Entities that carry creation and modification timestamps
pub trait Timestamped: Entity {
    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;
}

/// An entity that can be managed by a [`ResourceService`](crate::core::service::ResourceService).
///
/// The associated types describe the payloads the outer layer hands in:
///
/// - `Create`: a full, already-validated creation payload, optionally carrying an id
/// - `Update`: a sparse update where every field is absent, present-null or present-value
/// - `Filter`: the optional predicates accepted by list
/// - `Context`: read-only collaborators needed to derive fields at write time
///   (the product catalog for orders, `()` for everything else)
pub trait Resource: Entity {
    type Create: Send;
    type Update: Send;
    type Filter: Filter<Self>;
    type Context: Send + Sync;

    /// The identifier the client asked for, if any
    fn requested_id(payload: &Self::Create) -> Option<Uuid>;

    /// Build the first snapshot of a new entity
    ///
    /// Any failure here happens before the store is touched.
    fn from_payload(
        id: Uuid,
        payload: Self::Create,
        now: DateTime<Utc>,
        context: &Self::Context,
    ) -> ServiceResult<Self>;

    /// Overlay the provided fields onto a copy of `self`
    ///
    /// Fields absent from `update` are copied verbatim.
    fn merge(&self, update: Self::Update, context: &Self::Context) -> ServiceResult<Self>;

    /// Refresh the modification timestamp, if the entity has one
    fn touch(&mut self, _now: DateTime<Utc>) {}
}

/// Resources whose service exposes a delete operation
pub trait Deletable: Resource {}
