//! Append-only CSV log files, one per device.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing::{debug, info};

use fieldlog_types::Reading;

use crate::error::{Error, Result};
use crate::naming::log_file_name;

/// Header row written once when a log file is created.
const HEADER: [&str; 5] = ["created_at", "id", "name", "entry_id", "temperature"];

/// Store managing one append-only CSV log per device.
///
/// Files live directly in the data directory and are named from the device
/// display name (see [`log_file_name`]). Rows are never rewritten or
/// truncated by this store.
#[derive(Debug, Clone)]
pub struct LogStore {
    data_dir: PathBuf,
}

impl LogStore {
    /// Create a store rooted at the given data directory.
    ///
    /// The directory itself is created lazily, on the first
    /// [`ensure_initialized`](Self::ensure_initialized) call.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the log file for a device.
    pub fn path_for(&self, device_name: &str) -> PathBuf {
        self.data_dir.join(log_file_name(device_name))
    }

    /// Create the device's log file with its header row if it does not
    /// exist yet. Idempotent; safe to call every cycle.
    pub fn ensure_initialized(&self, device_name: &str) -> Result<PathBuf> {
        let path = self.path_for(device_name);
        if path.exists() {
            return Ok(path);
        }

        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir).map_err(|source| Error::CreateDirectory {
                path: self.data_dir.clone(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        writer.flush().map_err(|source| Error::Flush {
            path: path.clone(),
            source,
        })?;

        info!("Created new log file: {}", path.display());
        Ok(path)
    }

    /// Collect the entry ids already present in the device's log file.
    ///
    /// A missing file yields an empty set. The header row is skipped, and
    /// rows with fewer than four fields are skipped rather than failing the
    /// whole load.
    pub fn load_entry_ids(&self, device_name: &str) -> Result<HashSet<String>> {
        let path = self.path_for(device_name);
        let mut ids = HashSet::new();

        if !path.exists() {
            return Ok(ids);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;

        for record in reader.records() {
            match record {
                Ok(row) if row.len() >= 4 => {
                    ids.insert(row[3].to_string());
                }
                Ok(row) => {
                    debug!(
                        "Skipping malformed row with {} field(s) in {}",
                        row.len(),
                        path.display()
                    );
                }
                Err(e) => {
                    debug!("Skipping unreadable row in {}: {}", path.display(), e);
                }
            }
        }

        Ok(ids)
    }

    /// Append one reading as a single row.
    ///
    /// Opens the file in append mode; prior content is never touched. The
    /// dedup check belongs to the caller; the store itself enforces no
    /// uniqueness.
    pub fn append(&self, device_name: &str, reading: &Reading) -> Result<()> {
        let path = self.path_for(device_name);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::Open {
                path: path.clone(),
                source,
            })?;

        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record([
                reading.created_at.as_str(),
                &reading.channel_id.to_string(),
                reading.device_name.as_str(),
                reading.entry_id.as_str(),
                reading.value.as_str(),
            ])
            .map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
        writer.flush().map_err(|source| Error::Flush {
            path: path.clone(),
            source,
        })?;

        Ok(())
    }
}
