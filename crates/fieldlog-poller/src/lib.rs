//! Background poller appending channel telemetry to per-device CSV logs.
//!
//! Fetches one channel snapshot per cycle from a feed endpoint, persists the
//! newest reading if its entry id has not been seen before, and repeats at a
//! fixed interval until interrupted.

pub mod collector;
pub mod config;

pub use collector::{Collector, CollectorError, CycleOutcome};
pub use config::{Config, ConfigError, PollConfig, SourceConfig, StorageConfig};
