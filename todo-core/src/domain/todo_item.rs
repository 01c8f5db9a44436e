//! Todo Item Entity
//!
//! A single task record owned by a `TodoCollection`.

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A todo/task item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned by the owning collection
    pub id: u32,
    /// What needs doing
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub complete: bool,
}

impl TodoItem {
    /// Create a new incomplete item
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self::with_complete(id, description, false)
    }

    pub fn with_complete(id: u32, description: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            description: description.into(),
            complete,
        }
    }

    /// Write the formatted line to `sink`, followed by a newline
    pub fn print_details<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{}", self)
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id, self.description)?;
        if self.complete {
            write!(f, "\t(complete)")?;
        }
        Ok(())
    }
}

impl Entity for TodoItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(1, "New Todo Item");
        assert_eq!(item.id(), 1);
        assert_eq!(item.description, "New Todo Item");
        assert!(!item.complete);
    }

    #[test]
    fn test_format_incomplete() {
        let item = TodoItem::new(1, "New Todo Item");
        assert_eq!(item.to_string(), "1\tNew Todo Item");
    }

    #[test]
    fn test_format_complete() {
        let item = TodoItem::with_complete(1, "New Todo Item", true);
        assert_eq!(item.to_string(), "1\tNew Todo Item\t(complete)");
    }

    #[test]
    fn test_print_details_to_sink() {
        let mut item = TodoItem::new(12, "Call Boss");
        let mut out = Vec::new();
        item.print_details(&mut out).unwrap();
        item.complete = true;
        item.print_details(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "12\tCall Boss\n12\tCall Boss\t(complete)\n"
        );
    }

    #[test]
    fn test_deserialize_defaults_complete() {
        let item: TodoItem = serde_json::from_str(r#"{"id":3,"description":"Collect Tickets"}"#).unwrap();
        assert_eq!(item, TodoItem::new(3, "Collect Tickets"));
    }
}
