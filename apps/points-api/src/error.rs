//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Handler                                                                │
//! │  Result<Json<T>, ApiError>                                              │
//! │         │                                                               │
//! │         ├── Bad JSON? ───────── ApiError::bad_request ──────► 400       │
//! │         ├── ValidationError ─── ApiError (VALIDATION_ERROR) ─► 400      │
//! │         ├── Unknown id ──────── ApiError::not_found ─────────► 404      │
//! │         └── Success ─────────────────────────────────────────► 200      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "invalid retailer",
//!   "kind": "invalid_retailer"
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use points_core::ValidationError;
use serde::Serialize;

/// API error returned from handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Validation kind, present only for rejected receipts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Receipt failed validation (400)
    ValidationError,

    /// Request body could not be decoded (400)
    BadRequest,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            kind: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }
}

/// Validation messages are surfaced verbatim.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
            kind: Some(err.code().to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_conversion() {
        let err: ApiError = ValidationError::TotalMismatch.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "total mismatch with items total");
        assert_eq!(err.kind.as_deref(), Some("total_mismatch"));
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Receipt", "abc")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Receipt not found: abc" })
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("Receipt", "abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::bad_request("EOF while parsing").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
