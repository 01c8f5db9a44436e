//! Domain Layer - Core Entity Trait
//!
//! Every entity has a unique ID and can be moved across threads.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::NotFound("todo item 7".to_string()).to_string(),
            "Not found: todo item 7"
        );
        assert_eq!(
            DomainError::InvalidInput("empty description".to_string()).to_string(),
            "Invalid input: empty description"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = DomainError::Conflict("duplicate id 2".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"Conflict":"duplicate id 2"}"#);
    }
}
