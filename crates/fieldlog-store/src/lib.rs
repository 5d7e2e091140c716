//! Per-device append-only CSV logs for fieldlog readings.
//!
//! This crate owns the on-disk format: one CSV file per device, created
//! lazily with a fixed header and only ever appended to. It also provides
//! the in-memory [`DedupIndex`] that guards appends against duplicate entry
//! ids.
//!
//! # Example
//!
//! ```no_run
//! use fieldlog_store::{DedupIndex, LogStore};
//!
//! let store = LogStore::new(".");
//! let mut index = DedupIndex::new();
//!
//! store.ensure_initialized("Proteus A")?;
//! let known = index.entry_ids(&store, "Proteus A")?;
//! assert!(!known.contains("100"));
//! # Ok::<(), fieldlog_store::Error>(())
//! ```

mod dedup;
mod error;
mod log;
mod naming;

pub use dedup::DedupIndex;
pub use error::{Error, Result};
pub use log::LogStore;
pub use naming::log_file_name;
