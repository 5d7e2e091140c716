//! HTTP client for the fieldlog channel feed API.
//!
//! This crate fetches channel snapshots from a remote feed endpoint (a JSON
//! document with a `channel` object and a `feeds` array) and exposes the
//! [`FeedSource`] trait so the poller can be driven by either the real
//! [`ChannelClient`] or the scripted [`MockFeedSource`] in tests.
//!
//! # Example
//!
//! ```no_run
//! use fieldlog_client::{ChannelClient, FeedSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChannelClient::new(
//!     "https://api.thingspeak.com/channels/1598577/fields/1.json",
//!     2,
//! )?;
//!
//! let snapshot = client.fetch().await?;
//! println!("Channel: {}", snapshot.channel.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod mock;
pub mod snapshot;
pub mod source;

pub use client::ChannelClient;
pub use error::{Error, Result};
pub use mock::MockFeedSource;
pub use snapshot::{ChannelInfo, ChannelSnapshot, Feed};
pub use source::FeedSource;
