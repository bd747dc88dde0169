//! Error types for the todo API gateway.
//!
//! # Design
//! The gateway collapses every failure shape into a single human-readable
//! message before anything downstream sees it: a structured failure envelope
//! contributes its `message` field, any other non-2xx response falls back to
//! `HTTP {status}`, and local (de)serialization failures describe themselves.
//! `Display` yields exactly that one string — the store and presentation
//! layer never see status codes or structured detail.

use serde::Deserialize;
use thiserror::Error;

use crate::http::HttpResponse;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server reported a failure; carries only the normalized message.
    #[error("{0}")]
    Api(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// The server's failure envelope; only `message` survives normalization.
#[derive(Debug, Deserialize)]
struct FailureBody {
    message: String,
}

/// Collapse a non-success response into a single message string.
pub(crate) fn normalize_failure(response: &HttpResponse) -> ApiError {
    match serde_json::from_str::<FailureBody>(&response.body) {
        Ok(body) => ApiError::Api(body.message),
        Err(_) => ApiError::Api(format!("HTTP {}", response.status)),
    }
}
