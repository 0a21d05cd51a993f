//! HTTP route layer: translates verbs and paths into store operations.
//!
//! # Design
//! Handlers hold the write guard only for the duration of the store call.
//! JSON body extraction is taken as a `Result` so a malformed body maps to
//! the generic 500 shape instead of axum's default 4xx rejection; a body
//! that parses but lacks a title is a validation failure, not a malformed
//! one, so `CreateTodo::title` defaults to the empty string and the store
//! rejects it with 400.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::store::{Todo, TodoStore};

/// The store behind the mutual-exclusion guard the route layer requires.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Request payload for creating a todo. A missing `title` key parses as an
/// empty string and fails validation downstream.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Request payload for the status-update operation. The title is immutable
/// after creation, so `completed` is the only accepted field.
#[derive(Debug, Deserialize)]
pub struct SetCompleted {
    pub completed: bool,
}

/// Build a router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(SharedStore::default())
}

/// Build a router over an injected store, for tests that need to seed or
/// observe state.
pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(set_completed).delete(delete_todo))
        .with_state(store)
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the todo API",
        "endpoints": { "todos": "/todos" }
    }))
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.read().await.list_all())
}

async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.create(&input.title)?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn set_completed(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    payload: Result<Json<SetCompleted>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.set_completed(&id, input.completed)?;
    tracing::info!(id = %todo.id, completed = todo.completed, "todo status updated");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.write().await.delete(&id)?;
    tracing::info!(id = %id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
