//! Blocking API client for the todo service.
//!
//! # Overview
//! A thin typed wrapper over the four HTTP calls of the todo route
//! contract. Each operation issues the request, interprets the status code,
//! and decodes the JSON body; every network or non-2xx failure is
//! propagated to the caller as an [`ApiError`], which must decide how to
//! surface it. No retry, timeout, or backoff is implemented.
//!
//! # Design
//! - `TodoClient` holds only an agent and a normalized base URL; it carries
//!   no mutable state between calls.
//! - DTOs are defined independently from the server crate; the lifecycle
//!   test catches schema drift.
//! - Todo ids are opaque strings assigned by the server.

pub mod client;
pub mod error;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use types::Todo;
