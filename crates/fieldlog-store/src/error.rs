//! Error types for fieldlog-store.

use std::path::PathBuf;

/// Result type for fieldlog-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fieldlog-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to create the data directory.
    #[error("Failed to create data directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or create a log file.
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read rows back from a log file.
    #[error("Failed to read log file {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },

    /// Failed to write a row to a log file.
    #[error("Failed to write to log file {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },

    /// Failed to flush appended rows to a log file.
    #[error("Failed to flush log file {path}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}
