//! # Key-Value Gateway
//!
//! The opaque storage boundary every collection persists through.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KvStore Contract                                   │
//! │                                                                         │
//! │  get("yardtrack_inventory")  ──►  Ok(Some(json)) | Ok(None) | Err     │
//! │  set("yardtrack_inventory")  ──►  Ok(())         | Err                │
//! │                                                                         │
//! │  • Values are whole JSON documents; there are no partial writes        │
//! │  • A missing key is Ok(None), never an error                           │
//! │  • No transactions span keys; inventory and sales are written          │
//! │    independently even within one sale recording                        │
//! │                                                                         │
//! │  Implementations:                                                      │
//! │  ┌──────────────────┐         ┌──────────────────────────────┐         │
//! │  │    FileStore     │         │        MemoryStore           │         │
//! │  │ one file per key │         │ HashMap behind a mutex, with │         │
//! │  │ in a data dir    │         │ a write-failure switch for   │         │
//! │  │                  │         │ tests                        │         │
//! │  └──────────────────┘         └──────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// KvStore Trait
// =============================================================================

/// The opaque string-keyed store the collections read and write through.
///
/// Object-safe on purpose: the collections hold an `Arc<dyn KvStore>` so
/// the gateway is injected, never ambient.
pub trait KvStore: Send + Sync {
    /// Reads the document under `key`. Absence is `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes the whole document under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// FileStore
// =============================================================================

/// File-backed store: one JSON document per key inside a data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) a data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|err| StoreError::unavailable(dir.display().to_string(), err.to_string()))?;
        Ok(FileStore { dir })
    }

    /// Backing file for a key.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The data directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::read_failed(key, err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key, bytes = value.len(), "writing store document");
        fs::write(self.path_for(key), value)
            .map_err(|err| StoreError::write_failed(key, err.to_string()))
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store used by tests and ephemeral sessions.
///
/// The `fail_writes` switch simulates an unavailable store so the
/// logged-and-swallowed write-failure path is testable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Makes every subsequent `set` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed(key, "store unavailable"));
        }
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_dir(label: &str) -> PathBuf {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "yardtrack-kv-{label}-{}-{seq}",
            std::process::id()
        ))
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = temp_dir("roundtrip");
        let store = FileStore::open(&dir).unwrap();

        assert_eq!(store.get("yardtrack_inventory").unwrap(), None);

        store.set("yardtrack_inventory", r#"{"cement":{}}"#).unwrap();
        assert_eq!(
            store.get("yardtrack_inventory").unwrap().as_deref(),
            Some(r#"{"cement":{}}"#)
        );

        // Overwrite replaces the whole document
        store.set("yardtrack_inventory", "{}").unwrap();
        assert_eq!(
            store.get("yardtrack_inventory").unwrap().as_deref(),
            Some("{}")
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_store_reopens_existing_data() {
        let dir = temp_dir("reopen");
        {
            let store = FileStore::open(&dir).unwrap();
            store.set("yardtrack_sales", "{}").unwrap();
        }

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("yardtrack_sales").unwrap().as_deref(), Some("{}"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store_write_failure_switch() {
        let store = MemoryStore::new();
        store.set("k", "v1").unwrap();

        store.set_fail_writes(true);
        let err = store.set("k", "v2").unwrap_err();
        assert!(matches!(err, StoreError::WriteFailed { .. }));

        // The old value is untouched
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set_fail_writes(false);
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }
}
