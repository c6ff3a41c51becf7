//! API error types

use thiserror::Error;

/// Errors surfaced by the HTTP client core
///
/// Taxonomy: transport failures (no response received), unauthorized (401,
/// triggers token eviction), any other error status, and responses whose body
/// does not match the expected shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure - no response received
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the session (401); the stored token was cleared
    #[error("unauthorized: session expired or not logged in")]
    Unauthorized,

    /// Any other non-success status
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, when one was readable
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Token store I/O failure
    #[error("token store error: {0}")]
    TokenStore(#[from] std::io::Error),
}

impl ApiError {
    /// HTTP status code carried by this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is the 401 session-expiry case
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
