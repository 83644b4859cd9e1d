//! Error types for the AMD service.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for AMD service operations.
#[derive(Debug, Error)]
pub enum AmdError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Unreadable request body: {0}")]
    UnreadableBody(#[from] BytesRejection),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AmdError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // Every body problem is a validation failure, including
            // malformed JSON and a non-JSON content type.
            AmdError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    "Request body failed validation".to_string(),
                    Some(rejection.body_text()),
                )
            }
            AmdError::MalformedJson(e) => {
                tracing::debug!(error = %e, "Rejected request body");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    "Request body failed validation".to_string(),
                    Some(e.to_string()),
                )
            }
            AmdError::UnreadableBody(rejection) => (
                rejection.status(),
                "BODY_ERROR",
                "Failed to read request body".to_string(),
                Some(rejection.body_text()),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for AMD service operations.
pub type AmdResult<T> = Result<T, AmdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_omits_empty_details() {
        let body = ErrorResponse {
            error: "boom".to_string(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_malformed_json_is_unprocessable() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let resp = AmdError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
