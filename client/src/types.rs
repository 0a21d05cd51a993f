//! Wire DTOs for the todo API.
//!
//! These mirror the server's schema but are defined independently so the
//! client crate stands alone; the lifecycle test catches any drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo item as returned by the API.
///
/// `id` is an opaque server-assigned string; `created_at` arrives on the
/// wire as the camelCase `createdAt` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateTodo<'a> {
    pub title: &'a str,
}

/// Request payload for the status-update operation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SetCompleted {
    pub completed: bool,
}

/// The `{"error": <message>}` body the server sends on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
