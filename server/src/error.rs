//! Error taxonomy for the todo API.
//!
//! # Design
//! Two expected failures exist: a missing/empty required field (400) and an
//! unknown id (404). Everything else — malformed JSON, wrong field types,
//! missing content-type — collapses into `Internal` (500) with a generic
//! body so the wire contract stays at exactly three error shapes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures a store operation or handler can surface to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field is missing or empty. Maps to 400.
    #[error("{0}")]
    Validation(&'static str),

    /// The requested todo does not exist. Maps to 404.
    #[error("{0}")]
    NotFound(&'static str),

    /// The request body could not be read as the expected JSON shape,
    /// or some other unexpected failure. Maps to 500.
    #[error("Internal server error")]
    Internal,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection, "failed to read request body");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
