//! Error types for Envelope Router.
//!
//! `ApiError` maps request outcomes onto the error envelopes written by
//! [`crate::api::response`]; `BootstrapError` covers startup failures.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::response;

/// Request-level failure, rendered as an error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Unauthorized, with a Basic authentication challenge.
    #[error("Authentication required")]
    Authenticate,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => response::not_found(&msg),
            ApiError::BadRequest(msg) => response::bad_request(&msg),
            ApiError::Unauthorized => response::unauthorized(),
            ApiError::Authenticate => response::authenticate(),
            ApiError::Serialization(e) => response::bad_request(&e.to_string()),
            ApiError::Internal(msg) => response::internal_error(&msg),
        }
    }
}

/// Result type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure while turning configuration into a router.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid CORS {kind} '{value}': {reason}")]
    InvalidCors {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
