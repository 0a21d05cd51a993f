//! The blocking HTTP client for the todo API.
//!
//! # Design
//! The agent is built with status-as-error disabled so 4xx/5xx responses
//! come back as data and the client maps them to [`ApiError`] variants
//! itself. Status interpretation and body decoding live in free functions
//! that take plain `(status, body)` pairs, so they are unit-testable
//! without a network.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::types::{CreateTodo, ErrorBody, SetCompleted, Todo};

/// Default base URL when `API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Blocking client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    agent: ureq::Agent,
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the `API_URL` environment variable, falling back
    /// to `http://localhost:3000`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all todos in the server's insertion order.
    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let mut response = self.agent.get(&self.endpoint("/todos")).call()?;
        let (status, body) = read_response(&mut response)?;
        interpret(status, 200, &body)
    }

    /// Create a todo; the server assigns the id and creation timestamp.
    pub fn create(&self, title: &str) -> Result<Todo, ApiError> {
        let payload = to_json(&CreateTodo { title })?;
        let mut response = self
            .agent
            .post(&self.endpoint("/todos"))
            .content_type("application/json")
            .send(payload.as_bytes())?;
        let (status, body) = read_response(&mut response)?;
        interpret(status, 201, &body)
    }

    /// Set the completion flag of an existing todo.
    pub fn set_completed(&self, id: &str, completed: bool) -> Result<Todo, ApiError> {
        let payload = to_json(&SetCompleted { completed })?;
        let mut response = self
            .agent
            .patch(&self.endpoint(&format!("/todos/{id}")))
            .content_type("application/json")
            .send(payload.as_bytes())?;
        let (status, body) = read_response(&mut response)?;
        interpret(status, 200, &body)
    }

    /// Delete a todo permanently.
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut response = self
            .agent
            .delete(&self.endpoint(&format!("/todos/{id}")))
            .call()?;
        let (status, body) = read_response(&mut response)?;
        check_status(status, 204, &body)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn to_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn read_response(response: &mut ureq::http::Response<ureq::Body>) -> Result<(u16, String), ApiError> {
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok((status, body))
}

/// Check the status and decode the body as the expected type.
fn interpret<T: DeserializeOwned>(status: u16, expected: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, expected, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(status: u16, expected: u16, body: &str) -> Result<(), ApiError> {
    if status == expected {
        return Ok(());
    }
    match status {
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::Validation {
            message: error_message(body),
        }),
        _ => Err(ApiError::Http {
            status,
            body: body.to_string(),
        }),
    }
}

/// Pull the message out of an `{"error": ...}` body, falling back to the
/// raw body when it has some other shape.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
