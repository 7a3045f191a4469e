//! In-Memory Member Storage Adapter
//!
//! Keeps the roster snapshot in memory.
//! Useful for testing and development.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::member::RosterSnapshot;
use crate::ports::{MemberStorage, StorageError};

/// In-memory storage for the roster
///
/// Clones share the same underlying snapshot, so a test can keep a handle
/// after passing one to the store. Load and save failures can be switched
/// on to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberStorage {
    snapshot: Arc<RwLock<Option<RosterSnapshot>>>,
    fail_load: Arc<AtomicBool>,
    fail_save: Arc<AtomicBool>,
    save_count: Arc<AtomicUsize>,
}

impl InMemoryMemberStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage already holding a snapshot
    pub fn with_snapshot(snapshot: RosterSnapshot) -> Self {
        let storage = Self::new();
        if let Ok(mut slot) = storage.snapshot.write() {
            *slot = Some(snapshot);
        }
        storage
    }

    /// Make subsequent loads fail
    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail
    pub fn set_fail_save(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    /// The last saved snapshot, if any
    pub fn stored(&self) -> Option<RosterSnapshot> {
        self.snapshot.read().ok().and_then(|s| s.clone())
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

impl MemberStorage for InMemoryMemberStorage {
    fn load(&self) -> Result<RosterSnapshot, StorageError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(StorageError::DeserializationFailed(
                "Simulated load failure".to_string(),
            ));
        }
        let slot = self
            .snapshot
            .read()
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        Ok(slot.clone().unwrap_or_default())
    }

    fn save(&self, snapshot: &RosterSnapshot) -> Result<(), StorageError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(StorageError::IoError("Simulated save failure".to_string()));
        }
        let mut slot = self
            .snapshot
            .write()
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        *slot = Some(snapshot.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
