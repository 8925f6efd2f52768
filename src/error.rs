/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure (connection refused, TLS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The server answered 401
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered 403
    #[error("forbidden")]
    Forbidden,
    /// The server answered 404
    #[error("not found")]
    NotFound,
    /// Any other non-success status
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),
    /// The authentication exchange did not yield a usable token
    #[error("authentication error: {0}")]
    Authentication(String),
    /// Caller supplied an argument the client refuses to send
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The response could not be mapped to the requested type
    #[error("deserialization error: {0}")]
    Deserialization(String),
    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Maps a non-success HTTP status to the matching error variant
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized,
            StatusCode::FORBIDDEN => AppError::Forbidden,
            StatusCode::NOT_FOUND => AppError::NotFound,
            other => AppError::Unexpected(other),
        }
    }
}
