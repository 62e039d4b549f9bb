//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` get dedicated variants because callers act on
//! them; every other unexpected status lands in `HttpError` with the raw
//! status and body.

use serde::Deserialize;
use thiserror::Error;

/// One entry of a 422 response's `detail` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Errors returned by `TodoClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 422 and rejected these fields.
    #[error("validation failed: {}", describe(.0))]
    Validation(Vec<FieldError>),

    /// The server returned any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.loc.join("."), e.msg))
        .collect::<Vec<_>>()
        .join("; ")
}
