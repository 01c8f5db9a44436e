//! Repository Layer - Core Traits
//!
//! Defines the abstract read interface for data access.

use crate::domain::Entity;

/// Core repository trait for lookups
///
/// Generic over any Entity type. Implementations own their entities and hand
/// out borrows, so callers always observe the current state.
pub trait Repository<T: Entity> {
    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// List all entities in storage order
    fn list(&self) -> &[T];
}
