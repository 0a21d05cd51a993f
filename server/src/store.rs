//! The in-memory todo store.
//!
//! # Design
//! `TodoStore` is an owned, injectable struct rather than ambient global
//! state, so tests can instantiate independent stores per case. The backing
//! collection is a `Vec`: insertion order is the only ordering promised to
//! clients, and the collection is small enough that linear id lookup is
//! fine. The store itself is synchronous; callers on a multi-threaded
//! runtime must guard it (the route layer uses `Arc<RwLock<_>>`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// A single todo item.
///
/// `id` and `created_at` are assigned once by the store at creation and
/// never change; `title` is immutable after creation as well. Only
/// `completed` is mutable, via [`TodoStore::set_completed`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// The authoritative, process-lifetime collection of todos.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in insertion order. Never fails.
    pub fn list_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Create a todo with a fresh id and `completed = false`.
    ///
    /// The title must be non-empty after trimming; the stored title keeps
    /// the caller's original whitespace.
    pub fn create(&mut self, title: &str) -> Result<Todo, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required"));
        }
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Set the completion flag of an existing todo and return the updated
    /// entry. No other field changes.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<Todo, ApiError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound("Todo not found"))?;
        todo.completed = completed;
        Ok(todo.clone())
    }

    /// Remove a todo permanently. There is no soft delete or recovery.
    pub fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(ApiError::NotFound("Todo not found"))?;
        self.todos.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
