//! Identifier allocation for newly created entities

use uuid::Uuid;

/// Hands out identifiers for entities created without one
///
/// Implementations must never return the same identifier twice during the
/// lifetime of the process.
pub trait IdentityAllocator: Send + Sync {
    fn allocate(&self) -> Uuid;
}

/// Random 128-bit (v4) identifiers
///
/// Collisions are treated as impossible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdAllocator;

impl IdentityAllocator for RandomIdAllocator {
    fn allocate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
