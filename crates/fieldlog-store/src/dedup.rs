//! In-memory index of entry ids already present in each device's log.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::Result;
use crate::log::LogStore;

/// Dedup index mapping device names to the entry ids seen in their logs.
///
/// The set for a device is rebuilt from its log file on the first reference
/// in process lifetime and never re-read afterwards; every id appended later
/// must be recorded through [`insert`](Self::insert). The index is a plain
/// value owned by its caller, constructed at startup and passed by
/// reference into each poll cycle.
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashMap<String, HashSet<String>>,
}

impl DedupIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the device's set has been loaded in this process lifetime.
    pub fn is_loaded(&self, device_name: &str) -> bool {
        self.seen.contains_key(device_name)
    }

    /// The set of known entry ids for a device, loading it from the store
    /// on first reference.
    ///
    /// Once loaded, later calls return the in-memory set untouched; the
    /// log file is never re-read mid-run.
    pub fn entry_ids(
        &mut self,
        store: &LogStore,
        device_name: &str,
    ) -> Result<&HashSet<String>> {
        match self.seen.entry(device_name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let ids = store.load_entry_ids(device_name)?;
                debug!(
                    "Loaded {} known entry id(s) for device {}",
                    ids.len(),
                    device_name
                );
                Ok(entry.insert(ids))
            }
        }
    }

    /// Whether an entry id is known for a device.
    ///
    /// Returns false for a device that was never loaded.
    pub fn contains(&self, device_name: &str, entry_id: &str) -> bool {
        self.seen
            .get(device_name)
            .is_some_and(|ids| ids.contains(entry_id))
    }

    /// Record an entry id after a successful append. Ids are never removed.
    pub fn insert(&mut self, device_name: &str, entry_id: &str) {
        self.seen
            .entry(device_name.to_string())
            .or_default()
            .insert(entry_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use fieldlog_types::Reading;

    use super::*;

    fn reading(entry_id: &str) -> Reading {
        Reading {
            created_at: "2024-03-05 10:15:30 UTC".to_string(),
            channel_id: 1,
            device_name: "Proteus A".to_string(),
            entry_id: entry_id.to_string(),
            value: "20.0".to_string(),
        }
    }

    #[test]
    fn test_loads_existing_ids_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.ensure_initialized("Proteus A").unwrap();
        store.append("Proteus A", &reading("5")).unwrap();

        // A fresh index models a process restart.
        let mut index = DedupIndex::new();
        let ids = index.entry_ids(&store, "Proteus A").unwrap();
        assert!(ids.contains("5"));
        assert!(index.contains("Proteus A", "5"));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());

        let mut index = DedupIndex::new();
        assert!(index.entry_ids(&store, "Proteus A").unwrap().is_empty());
        assert!(index.is_loaded("Proteus A"));
    }

    #[test]
    fn test_contains_is_false_before_load() {
        let index = DedupIndex::new();
        assert!(!index.contains("Proteus A", "5"));
        assert!(!index.is_loaded("Proteus A"));
    }

    #[test]
    fn test_insert_then_contains() {
        let mut index = DedupIndex::new();
        index.insert("Proteus A", "7");
        assert!(index.contains("Proteus A", "7"));
        assert!(!index.contains("Proteus A", "8"));
        assert!(!index.contains("Proteus B", "7"));
    }

    #[test]
    fn test_never_reloads_after_first_reference() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.ensure_initialized("Proteus A").unwrap();

        let mut index = DedupIndex::new();
        assert!(index.entry_ids(&store, "Proteus A").unwrap().is_empty());

        // Rows that land on disk behind the index's back stay invisible.
        store.append("Proteus A", &reading("5")).unwrap();
        assert!(!index.entry_ids(&store, "Proteus A").unwrap().contains("5"));
        assert!(!index.contains("Proteus A", "5"));
    }

    #[test]
    fn test_devices_are_tracked_independently() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path());
        store.ensure_initialized("Proteus A").unwrap();
        store.append("Proteus A", &reading("5")).unwrap();

        let mut index = DedupIndex::new();
        index.entry_ids(&store, "Proteus A").unwrap();
        index.entry_ids(&store, "Proteus B").unwrap();

        assert!(index.contains("Proteus A", "5"));
        assert!(!index.contains("Proteus B", "5"));
    }
}
