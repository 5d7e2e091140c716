//! Error types for fieldlog-client.

use thiserror::Error;

/// Result type for feed client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when fetching a channel snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The endpoint URL is not a usable http(s) URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status code.
    #[error("Feed endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not a valid channel snapshot document.
    #[error("Failed to decode feed response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Error produced by a scripted mock source.
    #[error("Mock feed error: {0}")]
    Mock(String),
}
