//! In-memory todo REST API service.
//!
//! # Overview
//! An axum router over an injectable [`TodoStore`]. All state lives in
//! process memory for the lifetime of the process — a restart loses every
//! todo, and no durability is promised.
//!
//! # Design
//! - `TodoStore` owns the collection and is the only mutation point; the
//!   HTTP layer wraps it in `Arc<RwLock<_>>` so every read-modify-write
//!   sequence holds a write guard.
//! - Handlers translate store results into status codes; error bodies are
//!   always `{"error": <message>}`.
//! - Tests build routers with independent stores via [`routes::app`].

pub mod error;
pub mod routes;
pub mod store;

pub use error::ApiError;
pub use routes::{app, app_with_store, SharedStore};
pub use store::{Todo, TodoStore};

/// Serve the API on the given listener until the process exits.
pub async fn run(listener: tokio::net::TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
