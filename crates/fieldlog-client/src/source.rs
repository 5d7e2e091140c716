//! Trait abstraction over feed snapshot sources.

use async_trait::async_trait;

use crate::client::ChannelClient;
use crate::error::Result;
use crate::snapshot::ChannelSnapshot;

/// Trait abstracting where channel snapshots come from.
///
/// The poller is written against this trait so that tests can drive it with
/// a scripted [`MockFeedSource`](crate::mock::MockFeedSource) instead of a
/// live endpoint.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one channel snapshot from the source.
    async fn fetch(&self) -> Result<ChannelSnapshot>;
}

#[async_trait]
impl FeedSource for ChannelClient {
    async fn fetch(&self) -> Result<ChannelSnapshot> {
        self.fetch_snapshot().await
    }
}
