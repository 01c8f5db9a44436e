//! Todo Collection - In-memory CRUD over todo items
//!
//! Owns the items for one user. Ids are handed out from a counter that only
//! moves forward, so an id is never reused after its item is removed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, Entity, TodoItem};
use super::traits::Repository;

/// Item totals for a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCounts {
    pub total: usize,
    pub incomplete: usize,
}

/// In-memory collection of todo items for a single owner
#[derive(Debug, Clone)]
pub struct TodoCollection {
    owner_name: String,
    items: Vec<TodoItem>,
    /// `None` once the id space is used up
    next_id: Option<u32>,
}

impl TodoCollection {
    /// Create a collection seeded with `items`
    ///
    /// Seed ids must be positive and unique.
    pub fn new(owner_name: impl Into<String>, items: Vec<TodoItem>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id() == 0 {
                return Err(DomainError::InvalidInput(format!(
                    "todo item id must be positive: {:?}",
                    item.description
                )));
            }
            if !seen.insert(item.id()) {
                return Err(DomainError::Conflict(format!(
                    "duplicate todo item id {}",
                    item.id()
                )));
            }
        }

        let next_id = match items.iter().map(|item| item.id()).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Ok(Self {
            owner_name: owner_name.into(),
            items,
            next_id,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in storage order
    pub fn items(&self) -> &[TodoItem] {
        self.list()
    }

    /// Get item by ID
    pub fn get_by_id(&self, id: u32) -> DomainResult<&TodoItem> {
        self.find_by_id(id)
            .ok_or_else(|| DomainError::NotFound(format!("todo item {}", id)))
    }

    /// Items in storage order, skipping complete ones unless `include_complete`
    pub fn get_items(&self, include_complete: bool) -> impl Iterator<Item = &TodoItem> + '_ {
        self.items
            .iter()
            .filter(move |item| include_complete || !item.complete)
    }

    pub fn get_counts(&self) -> ItemCounts {
        ItemCounts {
            total: self.items.len(),
            incomplete: self.get_items(false).count(),
        }
    }

    /// Append a new incomplete item and return its id
    pub fn add(&mut self, description: impl Into<String>) -> DomainResult<u32> {
        let description = description.into();
        if description.trim().is_empty() {
            log::warn!("[{}] rejected todo item with empty description", self.owner_name);
            return Err(DomainError::InvalidInput(
                "todo description must not be empty".to_string(),
            ));
        }

        let id = self.next_id.ok_or_else(|| {
            DomainError::Conflict("no todo item ids left to assign".to_string())
        })?;
        self.next_id = id.checked_add(1);
        self.items.push(TodoItem::new(id, description));

        log::debug!("[{}] added todo item {}", self.owner_name, id);
        Ok(id)
    }

    /// Set the completion flag of item `id`
    pub fn mark_complete(&mut self, id: u32, complete: bool) -> DomainResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo item {}", id)))?;

        if item.complete != complete {
            item.complete = complete;
            log::debug!("[{}] todo item {} complete = {}", self.owner_name, id, complete);
        }
        Ok(())
    }

    /// Drop every complete item, keeping the rest in order
    pub fn remove_complete(&mut self) {
        let before = self.items.len();
        self.items.retain(|item| !item.complete);
        let removed = before - self.items.len();
        if removed > 0 {
            log::debug!("[{}] removed {} complete todo item(s)", self.owner_name, removed);
        }
    }
}

impl Repository<TodoItem> for TodoCollection {
    fn find_by_id(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list(&self) -> &[TodoItem] {
        &self.items
    }
}
