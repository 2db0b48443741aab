//! Error types for the fetch layer

use thiserror::Error;

/// Errors raised while retrieving and parsing a yearly export page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, truncated body). Retried once.
    #[error("connection error for {url}: {message}")]
    Connection { url: String, message: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Request could not be built or followed (bad redirect, invalid header)
    #[error("request error: {0}")]
    Request(String),

    /// The page did not contain the expected table or columns
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// Only connection failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Connection { .. })
    }
}
