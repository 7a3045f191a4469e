//! Member Storage Port - Interface for persisting the roster.
//!
//! The whole roster is loaded and saved as one document. There are no
//! partial reads or writes and no locking; the store owning the port is the
//! only writer.

use crate::domain::member::{IntegrityError, RosterSnapshot};

/// Errors that can occur during roster storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize roster: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize roster: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Stored roster is inconsistent: {0}")]
    Integrity(#[from] IntegrityError),
}

/// Port for loading and saving the full roster.
pub trait MemberStorage: Send + Sync {
    /// Load the stored roster
    ///
    /// # Returns
    /// The stored snapshot, or an empty snapshot with `next_id = 1` when
    /// nothing has been stored yet
    ///
    /// # Errors
    /// Returns `StorageError` if stored data exists but cannot be read or parsed
    fn load(&self) -> Result<RosterSnapshot, StorageError>;

    /// Replace the stored roster
    ///
    /// Readers never observe a partially written roster.
    ///
    /// # Errors
    /// Returns `StorageError` if the write cannot complete
    fn save(&self, snapshot: &RosterSnapshot) -> Result<(), StorageError>;
}
