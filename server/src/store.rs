//! In-memory todo store.
//!
//! # Design
//! `TodoStore` owns the authoritative list of todos for the lifetime of the
//! process. Items live in a `Vec` because storage order is observable: an
//! unconstrained `list` returns items exactly as they were inserted. The
//! resolver layer receives an explicitly constructed store instance rather
//! than reaching for process-wide state, so tests run against isolated
//! stores and a persistent backend could be swapped in without touching
//! the resolver contract.

use std::sync::Arc;

use async_graphql::{Enum, InputObject, SimpleObject, ID};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store shared across request handlers. Every operation takes the lock
/// for its full duration, so each one is atomic with respect to the rest.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Task priority. Rendered lowercase on the wire (`high | medium | low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(rename_items = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single todo item.
///
/// `id` is an opaque string, unique within the store and immutable after
/// creation. Only `completed` ever changes, and only through
/// [`TodoStore::toggle`].
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Todo {
    pub id: ID,
    pub task: String,
    pub completed: bool,
    pub priority: Priority,
}

/// Optional equality constraints for [`TodoStore::list`]. Unset keys
/// impose no constraint; set keys must all match (logical AND).
#[derive(Debug, Clone, Copy, Default, InputObject)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

/// Errors raised by store operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No item with the given id exists.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The task text was empty or whitespace-only.
    #[error("task must not be empty")]
    EmptyTask,
}

/// Ordered, in-memory todo list.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter items shown by a fresh interactive server. Used by the
    /// server binary; library callers and tests start empty.
    pub fn with_demo_items() -> Self {
        let seed = [
            ("Coding", Priority::High, false),
            ("Assignments", Priority::Medium, false),
            ("Trekking", Priority::Low, true),
        ];
        Self {
            items: seed
                .into_iter()
                .map(|(task, priority, completed)| Todo {
                    id: fresh_id(),
                    task: task.to_string(),
                    completed,
                    priority,
                })
                .collect(),
        }
    }

    /// Items satisfying all set predicates, in insertion order. An empty
    /// filter matches everything; a filter matching nothing yields an
    /// empty vec, never an error.
    pub fn list(&self, filter: &TodoFilter) -> Vec<Todo> {
        self.items
            .iter()
            .filter(|todo| filter.completed.map_or(true, |c| todo.completed == c))
            .filter(|todo| filter.priority.map_or(true, |p| todo.priority == p))
            .cloned()
            .collect()
    }

    /// Append a new item with a fresh id and `completed = false`, and
    /// return it. The task text is stored as given; empty or
    /// whitespace-only text is rejected.
    pub fn insert(&mut self, task: &str, priority: Priority) -> Result<Todo, StoreError> {
        if task.trim().is_empty() {
            return Err(StoreError::EmptyTask);
        }
        let todo = Todo {
            id: fresh_id(),
            task: task.to_string(),
            completed: false,
            priority,
        };
        self.items.push(todo.clone());
        Ok(todo)
    }

    /// Delete the item with the given id if present. Idempotent: reports
    /// whether a removal occurred rather than failing on unknown ids.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id.as_str() != id);
        self.items.len() != before
    }

    /// Flip the `completed` flag of the item with the given id and return
    /// the updated item.
    pub fn toggle(&mut self, id: &str) -> Result<Todo, StoreError> {
        let todo = self
            .items
            .iter_mut()
            .find(|todo| todo.id.as_str() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn fresh_id() -> ID {
    ID(Uuid::new_v4().to_string())
}
