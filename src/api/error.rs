//! Errors raised while talking to the mock REST API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The body could not be mapped onto the expected shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
