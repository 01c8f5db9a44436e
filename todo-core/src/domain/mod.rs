//! Domain Layer
//!
//! Contains the todo entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod todo_item;

pub use entity::{Entity, DomainError, DomainResult};
pub use todo_item::TodoItem;
