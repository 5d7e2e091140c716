//! Error types for data parsing in fieldlog-types.

use thiserror::Error;

/// Errors that can occur when converting feed data.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The timestamp did not match the feed API format.
    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    /// A parsed timestamp could not be rendered in the stored format.
    #[error("Failed to format timestamp: {0}")]
    FormatTimestamp(#[from] time::error::Format),
}

/// Result type alias using fieldlog-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
