//! Core module containing fundamental traits and types for the framework

pub mod clock;
pub mod entity;
pub mod error;
pub mod filter;
pub mod identity;
pub mod patch;
pub mod pricing;
pub mod service;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use entity::{Deletable, Entity, Resource, Timestamped};
pub use error::{ErrorResponse, ServiceError, ServiceResult};
pub use filter::{Filter, FilterEngine};
pub use identity::{IdentityAllocator, RandomIdAllocator};
pub use patch::PartialUpdateMerger;
pub use pricing::OrderPricingResolver;
pub use service::ResourceService;
pub use store::ResourceStore;
