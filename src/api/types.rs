//! Response envelope types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every successful response that carries content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuccessEnvelope {
    /// Always `true`.
    pub status: bool,
    /// HTTP status code, repeated in the body.
    pub code: u16,
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub status: bool,
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Fixed label for the status class, e.g. "Not Found".
    pub message: String,
    /// Caller-supplied detail.
    pub error: String,
}

impl SuccessEnvelope {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: true,
            code,
            message: message.into(),
        }
    }
}

impl ErrorEnvelope {
    pub fn new(code: u16, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: false,
            code,
            message: message.into(),
            error: error.into(),
        }
    }
}
