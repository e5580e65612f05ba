//! Error types for the API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a call on [`crate::ApiClient`] can fail with.
///
/// Nothing is retried or reinterpreted: transport failures and non-2xx
/// answers are handed back to the caller as they happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection reset, transport-level timeout
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status; the body is shown
    /// so a FastAPI `detail` message reaches the user
    #[error("API error: {status}: {body}")]
    Status {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// JSON encoding of a request or typed decoding of a response failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl ApiError {
    /// HTTP status carried by a [`ApiError::Status`] error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Parsed response body carried by a [`ApiError::Status`] error
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
