//! Todo Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: In-memory collection of todo items

pub mod domain;
pub mod repository;

pub use domain::{DomainError, DomainResult, Entity, TodoItem};
pub use repository::{ItemCounts, Repository, TodoCollection};
