//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `Invalid` get dedicated variants because callers react
//! to them differently: "the todo no longer exists" usually just means
//! the local list is stale, while "the server rejected the input" is a
//! user mistake worth showing. Any other GraphQL field error lands in
//! `Graphql` with the message verbatim, and non-200 transport responses
//! keep the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server reported `NOT_FOUND` for the requested id.
    #[error("todo not found")]
    NotFound,

    /// The server rejected the input (`BAD_USER_INPUT`).
    #[error("invalid input: {0}")]
    Invalid(String),

    /// Any other GraphQL field error.
    #[error("graphql error: {0}")]
    Graphql(String),

    /// The server returned a non-200 status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response envelope carried no data for the requested field.
    #[error("response missing field: {0}")]
    MissingData(&'static str),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
