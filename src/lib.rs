//! # Resources
//!
//! An in-memory resource layer for four related entity types (Person,
//! Address, Product, Order) with create / list / get / patch / delete
//! semantics.
//!
//! ## Features
//!
//! - **Generic services**: one [`ResourceService`](core::ResourceService) parameterized over the entity type
//! - **Keyed stores**: insertion-ordered, lock-protected, conflict on duplicate ids
//! - **Filtering**: optional exact or case-insensitive substring predicates, AND-combined
//! - **Partial updates**: absent / null / value fields, with `updated_at` refreshed on every patch
//! - **Order pricing**: totals resolved against the product catalog at write time
//! - **Typed errors**: `NotFound`, `Conflict`, `InvalidReference`
//!
//! HTTP routing, payload validation and server bootstrap are left to the
//! caller; the services accept already-validated payloads.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resources::prelude::*;
//!
//! let registry = ServiceRegistry::new();
//!
//! let widget = registry.products.create(ProductCreate {
//!     id: None,
//!     name: "Widget".to_string(),
//!     description: None,
//!     price: 9.99,
//!     in_stock: 100,
//! })?;
//!
//! let order = registry.orders.create(OrderCreate {
//!     id: None,
//!     customer_name: "Alice".to_string(),
//!     items: vec![LineItem::new(widget.id, 2)],
//!     note: None,
//! })?;
//!
//! assert_eq!(order.total_amount, 19.98);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod registry;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        Clock, Deletable, Entity, Filter, FilterEngine, IdentityAllocator, OrderPricingResolver,
        PartialUpdateMerger, RandomIdAllocator, Resource, ResourceService, ResourceStore,
        SystemClock, Timestamped,
    };

    // === Errors ===
    pub use crate::core::{ErrorResponse, ServiceError, ServiceResult};

    // === Entities ===
    pub use crate::entities::{
        Address, AddressCreate, AddressFilter, AddressUpdate, LineItem, Order, OrderContext,
        OrderCreate, OrderFilter, OrderUpdate, Person, PersonCreate, PersonFilter, PersonUpdate,
        Product, ProductCreate, ProductFilter, ProductUpdate,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{EntitiesConfig, EntityConfig, PricingConfig, ServiceConfig};

    // === Registry ===
    pub use crate::registry::ServiceRegistry;

    // === External dependencies ===
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use uuid::Uuid;
}
