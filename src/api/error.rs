//! API error types

use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered `success: false`
    #[error("{message}")]
    Endpoint {
        /// Message carried in the response envelope
        message: String,
    },

    /// No bearer token available in either client-side store
    #[error("not logged in (no session token found); run 'limbah login'")]
    MissingToken,

    /// Response body did not match the expected envelope
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ApiError {
    /// Create an endpoint error from a server-supplied message
    #[must_use]
    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint {
            message: message.into(),
        }
    }
}
