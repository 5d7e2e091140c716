//! Core types for fieldlog telemetry data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One reading as persisted to a device's log file.
///
/// Field order matches the log row order: `created_at`, channel id, device
/// name, entry id, measurement value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Capture time in the stored format, `YYYY-MM-DD HH:MM:SS UTC`.
    pub created_at: String,
    /// Numeric channel identifier assigned by the remote source.
    pub channel_id: u64,
    /// Human-readable device name as reported by the channel.
    pub device_name: String,
    /// Remote-source-assigned entry identifier, used as the dedup key.
    ///
    /// String-typed even though current ids are numeric-looking.
    pub entry_id: String,
    /// Measurement value, carried opaquely and never validated.
    pub value: String,
}
