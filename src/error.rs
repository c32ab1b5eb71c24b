// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::schema::Violation;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every failure renders the same envelope: `{ statusCode, error, message }`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - one or more schema violations, declaration order
    Validation(Vec<Violation>),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Reason phrase for the `error` field of the envelope
    pub fn error(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Bad Request",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Conflict(_) => "Conflict",
            ApiError::InternalServerError(_) => "Internal Server Error",
        }
    }

    /// Get client-safe error message.
    ///
    /// Validation failures carry every collected violation; only the first
    /// one becomes the headline message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(violations) => violations
                .first()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "validation failed".to_string()),
            ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::InternalServerError(msg) => msg.clone(),
        }
    }

    /// Convert to the uniform JSON envelope
    pub fn to_json(&self) -> Value {
        json!({
            "statusCode": self.status_code(),
            "error": self.error(),
            "message": self.message(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        ApiError::Validation(violations)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

// Convert lower-layer error types to ApiError
impl From<crate::database::StoreError> for ApiError {
    fn from(err: crate::database::StoreError) -> Self {
        match err {
            crate::database::StoreError::UniqueViolation(_) => {
                ApiError::conflict("This email is already in use")
            }
            crate::database::StoreError::Sqlx(sqlx_err) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("store error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::auth::TokenError> for ApiError {
    fn from(err: crate::auth::TokenError) -> Self {
        match err {
            crate::auth::TokenError::Verification(_) => ApiError::unauthorized(err.to_string()),
            crate::auth::TokenError::MissingSecret | crate::auth::TokenError::Generation(_) => {
                tracing::error!("token service error: {}", err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
