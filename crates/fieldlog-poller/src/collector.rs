//! Poll cycle and driver loop.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use fieldlog_client::FeedSource;
use fieldlog_store::{DedupIndex, LogStore};
use fieldlog_types::{Reading, timestamp};

/// Collector that polls a feed source and appends new readings to the log.
///
/// Owns the dedup index for the lifetime of the process; the index is
/// rebuilt from disk lazily, per device, on first poll.
pub struct Collector<S> {
    source: S,
    store: LogStore,
    index: DedupIndex,
    interval: Duration,
}

/// Result of one poll cycle.
///
/// The driver loop inspects this for logging only; no outcome changes the
/// loop's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new reading was appended to the device's log.
    Appended { device_name: String, entry_id: String },
    /// The newest entry was already present in the log; nothing written.
    Duplicate { device_name: String, entry_id: String },
    /// The snapshot carried no feed records; nothing written.
    NoData,
}

/// Collector errors. All are fatal for the cycle and none for the process.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("Failed to fetch channel snapshot: {0}")]
    Fetch(fieldlog_client::Error),
    #[error("Feed entry {entry_id} has no measurement value")]
    MissingValue { entry_id: String },
    #[error("Failed to convert feed timestamp: {0}")]
    Timestamp(fieldlog_types::ParseError),
    #[error("Failed to store reading: {0}")]
    Store(fieldlog_store::Error),
}

impl<S: FeedSource> Collector<S> {
    /// Create a collector over a feed source and log store.
    pub fn new(source: S, store: LogStore, interval: Duration) -> Self {
        Self {
            source,
            store,
            index: DedupIndex::new(),
            interval,
        }
    }

    /// Execute exactly one fetch-and-maybe-persist cycle.
    ///
    /// Only the first feed record is considered, even when the snapshot
    /// carries several; catch-up over older records is out of scope.
    pub async fn poll_once(&mut self) -> Result<CycleOutcome, CollectorError> {
        let snapshot = self.source.fetch().await.map_err(CollectorError::Fetch)?;
        let device_name = snapshot.channel.name.clone();

        let Some(feed) = snapshot.feeds.first() else {
            info!("No feed data in snapshot for device {}", device_name);
            return Ok(CycleOutcome::NoData);
        };

        if !self.index.is_loaded(&device_name) {
            match snapshot.channel.field_label.as_deref() {
                Some(label) => info!(
                    "Monitoring device {} (channel {}, field: {})",
                    device_name, snapshot.channel.id, label
                ),
                None => info!(
                    "Monitoring device {} (channel {})",
                    device_name, snapshot.channel.id
                ),
            }
        }

        let path = self
            .store
            .ensure_initialized(&device_name)
            .map_err(CollectorError::Store)?;
        let known = self
            .index
            .entry_ids(&self.store, &device_name)
            .map_err(CollectorError::Store)?;

        let entry_id = feed.entry_id.clone();
        if known.contains(&entry_id) {
            info!("Entry {} already exists in {}", entry_id, path.display());
            return Ok(CycleOutcome::Duplicate {
                device_name,
                entry_id,
            });
        }

        let value = feed
            .value
            .clone()
            .ok_or_else(|| CollectorError::MissingValue {
                entry_id: entry_id.clone(),
            })?;
        let created_at =
            timestamp::to_stored(&feed.created_at).map_err(CollectorError::Timestamp)?;

        let reading = Reading {
            created_at,
            channel_id: snapshot.channel.id,
            device_name: device_name.clone(),
            entry_id: entry_id.clone(),
            value,
        };
        self.store
            .append(&device_name, &reading)
            .map_err(CollectorError::Store)?;
        self.index.insert(&device_name, &entry_id);

        info!("Added new entry {} to {}", entry_id, path.display());
        Ok(CycleOutcome::Appended {
            device_name,
            entry_id,
        })
    }

    /// Run poll cycles at the configured interval until Ctrl+C.
    ///
    /// A failed cycle is logged and the loop continues; the interrupt
    /// signal is the only thing that stops it. The signal is honored at
    /// the fetch and sleep suspension points; a write already in progress
    /// completes first.
    pub async fn run(mut self) {
        info!(
            "Starting continuous logging every {}s. Press Ctrl+C to stop.",
            self.interval.as_secs()
        );

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut consecutive_failures = 0u32;

        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                result = self.poll_once() => match result {
                    Ok(outcome) => {
                        consecutive_failures = 0;
                        debug!(?outcome, "Poll cycle finished");
                    }
                    Err(e) => {
                        consecutive_failures += 1;
                        if consecutive_failures <= 3 {
                            warn!(
                                "Poll cycle failed: {} (attempt {})",
                                e, consecutive_failures
                            );
                        } else if consecutive_failures == 4 {
                            error!(
                                "Poll cycle failed {} times in a row, will continue trying silently",
                                consecutive_failures
                            );
                        }
                    }
                },
            }

            tokio::select! {
                _ = &mut ctrl_c => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!("Logging stopped by user.");
    }
}
