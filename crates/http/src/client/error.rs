//! Client error types

use super::token::StorageError;
use crate::types::ErrorResponse;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A route segment would change the request path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Reading the session token failed
    #[error("Token storage error: {0}")]
    TokenStore(#[from] StorageError),

    /// The stored token cannot be sent as a header value
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body
    ///
    /// The backend answers validation failures with `{"status": .., "message": ..}`;
    /// when the body has that shape only the message is kept.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.message,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server rejected the credential (or its absence)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Forbidden(_))
    }
}
