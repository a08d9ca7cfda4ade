use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for the clinic API
#[derive(Debug)]
pub enum ServiceError {
    // Lookup Errors
    /// Zero rows matched a by-id lookup, update or delete. Holds the resource label.
    NotFound(&'static str),

    // Database Errors
    /// Any driver failure. Holds the client-facing message; the driver error is logged.
    DatabaseError(String),
    DatabaseConnectionError,

    // Request Errors
    InvalidId(String),
    InvalidInput(String),
    ValidationError(String),
}

/// Error response structure sent to clients
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(label) => write!(f, "{} not found", label),

            ServiceError::DatabaseError(msg) => write!(f, "{}", msg),
            ServiceError::DatabaseConnectionError => write!(f, "Database connection failed"),

            ServiceError::InvalidId(raw) => write!(f, "Invalid id: {}", raw),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 Not Found
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,

            // 400 Bad Request
            ServiceError::InvalidId(_)
            | ServiceError::InvalidInput(_)
            | ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            ServiceError::DatabaseError(_) | ServiceError::DatabaseConnectionError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code string for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::DatabaseError(_) => "DATABASE_ERROR",
            ServiceError::DatabaseConnectionError => "DATABASE_CONNECTION_ERROR",
            ServiceError::InvalidId(_) => "INVALID_ID",
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

/// Implement IntoResponse for Axum integration
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Failures are logged where they are mapped and again by the error middleware
        tracing::debug!(code = self.error_code(), message = %self, "Rendering error response");

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Conversion from validation errors
impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

/// Type alias for Results using ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
