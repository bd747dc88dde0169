//! Service error taxonomy and its HTTP rendering.
//!
//! # Design
//! `Validation` and `NotFound` carry precise, user-actionable messages and
//! map to 400/404. Anything else is an `Internal` fault: the response keeps
//! a generic message and ships the detail string in a separate `error`
//! field, so clients never depend on internal wording.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures a todo service operation can report.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Bad or missing input; the message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// The id does not resolve to an existing record.
    #[error("Todo not found")]
    NotFound,

    /// Persistence or other unexpected fault.
    #[error("{0}")]
    Internal(String),
}

/// Failure envelope: `message` is always present, `error` only on 500s.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ServiceError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            ServiceError::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string(), None),
            ServiceError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(detail),
                )
            }
        };
        let body = ErrorBody {
            success: false,
            message,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}
