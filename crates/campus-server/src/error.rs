//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::InternalError(msg) => {
                msg
            }
        };

        let body = serde_json::json!({
            "success": false,
            "error": ApiErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<campus_core::CoreError> for ApiError {
    fn from(err: campus_core::CoreError) -> Self {
        match &err {
            campus_core::CoreError::LocationNotFound { .. } => ApiError::NotFound(err.to_string()),
            campus_core::CoreError::DuplicateLocationName { .. }
            | campus_core::CoreError::InvalidWalkway { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            campus_core::CoreError::Dataset { .. } => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<campus_trace::TraceError> for ApiError {
    fn from(err: campus_trace::TraceError) -> Self {
        match &err {
            campus_trace::TraceError::InvalidReference { .. } => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::LocationId;

    #[test]
    fn invalid_reference_maps_to_not_found() {
        let err = ApiError::from(campus_trace::TraceError::InvalidReference {
            id: LocationId(9),
            len: 3,
        });
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg.contains('9')));
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn dataset_error_is_internal() {
        let err = ApiError::from(campus_core::CoreError::Dataset {
            reason: "bad".into(),
        });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        );
    }
}
