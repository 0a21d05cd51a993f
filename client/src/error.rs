//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers
//! distinguish "the todo does not exist" and "the input was rejected" from
//! "the server returned an unexpected status." All other non-2xx responses
//! land in `Http` with the raw status and body for debugging; connect and
//! read failures land in `Transport`.

use thiserror::Error;

/// Failures an operation on [`crate::TodoClient`] can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 with a message decoded from its error body.
    #[error("invalid request: {message}")]
    Validation { message: String },

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed: connect, write, or read failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
