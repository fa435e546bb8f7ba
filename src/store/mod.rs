//! Key-value slot persistence.
//!
//! The app keeps exactly two persisted slots (the album collection and the
//! profile image). Stores are handed to the owning components as
//! `Arc<dyn SlotStore>` so tests can substitute [`MemorySlotStore`] for the
//! on-disk implementation.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};

/// Default per-slot capacity, mirroring common browser local-storage limits.
pub const DEFAULT_SLOT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Error returned by [`SlotStore::write`]. Quota exhaustion is its own
/// variant because the caller keeps the in-memory mutation and warns the
/// user instead of treating it like an I/O fault.
#[derive(Debug)]
pub enum WriteError {
    QuotaExceeded { attempted: usize, limit: usize },
    Io(anyhow::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::QuotaExceeded { attempted, limit } => write!(
                f,
                "value of {attempted} bytes exceeds the {limit} byte slot quota"
            ),
            WriteError::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for WriteError {}

impl WriteError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, WriteError::QuotaExceeded { .. })
    }
}

/// Whole-value string slots with atomic writes.
///
/// A failed or oversized write must leave the previous value untouched, so a
/// reader never observes a half-written slot.
pub trait SlotStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<(), WriteError>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One file per key under the app-data directory. Writes land in a temp
/// file first and rename into place, which is atomic on every platform we
/// ship to.
pub struct FileSlotStore {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileSlotStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            quota_bytes: Some(DEFAULT_SLOT_QUOTA_BYTES),
        }
    }

    pub fn with_quota(dir: PathBuf, quota_bytes: Option<usize>) -> Self {
        Self { dir, quota_bytes }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read storage slot '{key}'"))
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), WriteError> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(WriteError::QuotaExceeded {
                    attempted: value.len(),
                    limit,
                });
            }
        }

        let write_whole = || -> Result<()> {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("failed to create storage directory {}", self.dir.display())
            })?;

            let path = self.slot_path(key);
            let tmp_path = self.dir.join(format!("{key}.tmp"));
            fs::write(&tmp_path, value)
                .with_context(|| format!("failed to stage storage slot '{key}'"))?;
            fs::rename(&tmp_path, &path)
                .with_context(|| format!("failed to commit storage slot '{key}'"))?;
            Ok(())
        };

        write_whole().map_err(WriteError::Io)
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove storage slot '{key}'"))
            }
        }
    }
}

/// In-memory store with the same contract, used as the test substitute.
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }
}

impl Default for MemorySlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.read().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), WriteError> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(WriteError::QuotaExceeded {
                    attempted: value.len(),
                    limit,
                });
            }
        }

        self.slots
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.write().unwrap().remove(key);
        Ok(())
    }
}

/// Convenience alias for the shape the rest of the app passes around.
pub type SharedSlotStore = Arc<dyn SlotStore>;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_reads_back_what_it_wrote() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path().to_path_buf());

        assert!(store.read("albums").unwrap().is_none());
        store.write("albums", "[]").unwrap();
        assert_eq!(store.read("albums").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_overwrites_whole_value() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path().to_path_buf());

        store.write("slot", "first").unwrap();
        store.write("slot", "second").unwrap();
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_store_rejects_values_over_quota_and_keeps_previous() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::with_quota(dir.path().to_path_buf(), Some(8));

        store.write("slot", "small").unwrap();
        let err = store.write("slot", "way too large for it").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn file_store_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileSlotStore::new(dir.path().to_path_buf());

        store.write("slot", "value").unwrap();
        store.remove("slot").unwrap();
        store.remove("slot").unwrap();
        assert!(store.read("slot").unwrap().is_none());
    }

    #[test]
    fn memory_store_matches_contract() {
        let store = MemorySlotStore::with_quota(8);

        assert!(store.read("slot").unwrap().is_none());
        store.write("slot", "value").unwrap();
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("value"));

        let err = store.write("slot", "far beyond the quota").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("value"));

        store.remove("slot").unwrap();
        assert!(store.read("slot").unwrap().is_none());
    }
}
