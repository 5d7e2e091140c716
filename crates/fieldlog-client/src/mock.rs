//! Mock feed source for testing.
//!
//! [`MockFeedSource`] implements [`FeedSource`] with a scripted queue of
//! responses, so poller behavior (dedup, error isolation, empty feeds) can
//! be exercised without a live endpoint.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::snapshot::{ChannelInfo, ChannelSnapshot, Feed};
use crate::source::FeedSource;

enum Scripted {
    Snapshot(ChannelSnapshot),
    Failure(String),
}

/// A scripted feed source.
///
/// Responses are consumed in the order they were pushed; fetching past the
/// end of the script is an error.
///
/// # Example
///
/// ```
/// use fieldlog_client::{FeedSource, MockFeedSource};
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = MockFeedSource::new();
/// source.push_failure("connection refused");
/// assert!(source.fetch().await.is_err());
/// assert_eq!(source.fetch_count(), 1);
/// # }
/// ```
#[derive(Default)]
pub struct MockFeedSource {
    script: Mutex<VecDeque<Scripted>>,
    fetch_count: AtomicU32,
}

impl MockFeedSource {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a snapshot to be returned by a later `fetch`.
    pub fn push_snapshot(&self, snapshot: ChannelSnapshot) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Snapshot(snapshot));
    }

    /// Queue a failure to be returned by a later `fetch`.
    pub fn push_failure(&self, message: &str) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.to_string()));
    }

    /// How many times `fetch` has been called.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Build a single-feed snapshot, the common case in tests.
    pub fn snapshot(
        channel_id: u64,
        device_name: &str,
        created_at: &str,
        entry_id: &str,
        value: &str,
    ) -> ChannelSnapshot {
        ChannelSnapshot {
            channel: ChannelInfo {
                id: channel_id,
                name: device_name.to_string(),
                field_label: None,
            },
            feeds: vec![Feed {
                created_at: created_at.to_string(),
                entry_id: entry_id.to_string(),
                value: Some(value.to_string()),
            }],
        }
    }
}

impl std::fmt::Debug for MockFeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockFeedSource")
            .field("queued", &self.script.lock().unwrap().len())
            .field("fetch_count", &self.fetch_count.load(Ordering::Relaxed))
            .finish()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self) -> Result<ChannelSnapshot> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Snapshot(snapshot)) => Ok(snapshot),
            Some(Scripted::Failure(message)) => Err(Error::Mock(message)),
            None => Err(Error::Mock("no scripted responses left".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_responses_are_consumed_in_order() {
        let source = MockFeedSource::new();
        source.push_snapshot(MockFeedSource::snapshot(
            1,
            "Test",
            "2024-03-05T10:15:30Z",
            "1",
            "20.0",
        ));
        source.push_failure("boom");

        assert_eq!(source.fetch().await.unwrap().feeds[0].entry_id, "1");
        assert!(matches!(source.fetch().await, Err(Error::Mock(_))));
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_script_is_an_error() {
        let source = MockFeedSource::new();
        assert!(source.fetch().await.is_err());
    }
}
