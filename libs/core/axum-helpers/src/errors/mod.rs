pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error response carries both a machine-readable `error` and a
/// human-readable `message`:
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "User not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type so that every crate renders the same
/// [`ErrorResponse`] body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPathParam(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status code and error code this error renders with.
    pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::JsonExtractorRejection(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidJson),
            AppError::QueryRejection(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidQuery),
            AppError::PathRejection(_) | AppError::InvalidPathParam(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidPathParam)
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, ErrorCode::ValidationError),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError),
            AppError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::PathRejection(e) => {
                tracing::warn!(error_code = code.code(), "Path extraction error: {:?}", e);
                e.body_text()
            }
            AppError::QueryRejection(e) => {
                tracing::warn!(error_code = code.code(), "Query extraction error: {:?}", e);
                e.body_text()
            }
            AppError::Validation(msg) => {
                tracing::info!(error_code = code.code(), "Validation error: {}", msg);
                msg
            }
            AppError::InvalidPathParam(msg) => {
                tracing::info!(error_code = code.code(), "Invalid path parameter: {}", msg);
                msg
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(error_code = code.code(), "Unauthorized: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::Database(msg) => {
                tracing::error!(error_code = code.code(), "Database error: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                msg
            }
        };

        error_response(status, message, code)
    }
}

/// Helper function to create error responses.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Missing data".to_string(),
///     ErrorCode::ValidationError,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}
