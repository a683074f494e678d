// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::AuthError;
use crate::schema::Issue;

/// HTTP API error with appropriate status codes and client-facing bodies
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("request body failed validation ({} issues)", .0.len())]
    ValidationError(Vec<Issue>),

    // 401 Unauthorized
    #[error("{0}")]
    Unauthorized(String),

    // 500 Internal Server Error
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError(issues) => json!({
                "success": false,
                "issues": issues,
            }),
            ApiError::Unauthorized(message) | ApiError::InternalServerError(message) => json!({
                "message": message,
            }),
        }
    }
}

impl ApiError {
    pub fn validation_error(issues: Vec<Issue>) -> Self {
        ApiError::ValidationError(issues)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::warn!("Authentication rejected: {:?}", err);
        ApiError::unauthorized(err.to_string())
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
