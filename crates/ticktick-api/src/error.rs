//! Error types for the TickTick API client.

use std::fmt;

use thiserror::Error;

/// Errors reported by the TickTick API itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure (expired or invalid access token).
    Auth { message: String },
    /// Rate limit exceeded.
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String, id: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "rate limited, retry after {} seconds", secs),
                None => write!(f, "rate limited"),
            },
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if the error indicates a credential problem.
    ///
    /// Callers surface these with a hint to re-authenticate rather than as
    /// a generic request failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}

/// Errors that can occur when interacting with the TickTick API.
#[derive(Debug, Error)]
pub enum Error {
    /// The API returned an error response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or protocol failure before a response was decoded.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    /// Returns true if the error indicates a credential problem.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_auth())
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;
