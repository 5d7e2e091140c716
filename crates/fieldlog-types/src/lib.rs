//! Platform-agnostic types for fieldlog channel telemetry.
//!
//! This crate provides the shared data types used by the fieldlog client,
//! store, and poller crates.
//!
//! # Features
//!
//! - The [`Reading`] record persisted to per-device logs
//! - Strict timestamp conversion from the feed API format to the stored format
//! - Error types for timestamp parsing
//!
//! # Example
//!
//! ```
//! use fieldlog_types::timestamp;
//!
//! let stored = timestamp::to_stored("2024-03-05T10:15:30Z").unwrap();
//! assert_eq!(stored, "2024-03-05 10:15:30 UTC");
//! ```

pub mod error;
pub mod timestamp;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::Reading;
