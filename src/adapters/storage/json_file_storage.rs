//! JSON File Storage Adapter
//!
//! Stores the roster as a single pretty-printed JSON document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::member::RosterSnapshot;
use crate::ports::{MemberStorage, StorageError};

/// File-based storage for the roster
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `{file}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file}`
///
/// A crash mid-write leaves the previous document in place.
#[derive(Debug, Clone)]
pub struct JsonFileMemberStorage {
    path: PathBuf,
}

impl JsonFileMemberStorage {
    /// Create a new storage backed by the given file
    ///
    /// # Example
    /// ```ignore
    /// let storage = JsonFileMemberStorage::new("members.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy an unreadable backing file to `{file}.corrupt`
    ///
    /// Call after a failed load, before the next save replaces the file.
    /// Returns the copy's path, or `None` if there is no file to keep.
    pub fn preserve_unreadable(&self) -> Result<Option<PathBuf>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let backup = self.sibling_path("corrupt");
        fs::copy(&self.path, &backup).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to copy {} to {}: {}",
                self.path.display(),
                backup.display(),
                e
            ))
        })?;

        tracing::warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "Kept a copy of the unreadable roster file"
        );

        Ok(Some(backup))
    }

    /// Get the temporary file path used for atomic writes
    fn temp_path(&self) -> PathBuf {
        self.sibling_path("tmp")
    }

    /// `{file}.{extension}` next to the backing file
    fn sibling_path(&self, extension: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(extension);
        self.path.with_file_name(name)
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|e| {
                StorageError::IoError(format!(
                    "Failed to create directory {}: {}",
                    dir.display(),
                    e
                ))
            }),
            _ => Ok(()),
        }
    }

    fn write_temp(&self, temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).map_err(|e| {
            StorageError::IoError(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().map_err(|e| {
            StorageError::IoError(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

impl MemberStorage for JsonFileMemberStorage {
    fn load(&self) -> Result<RosterSnapshot, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No roster file yet, starting empty");
                return Ok(RosterSnapshot::default());
            }
            Err(e) => {
                return Err(StorageError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let snapshot: RosterSnapshot = serde_json::from_str(&json)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            members = snapshot.members.len(),
            next_id = %snapshot.next_id,
            "Loaded roster"
        );

        Ok(snapshot)
    }

    fn save(&self, snapshot: &RosterSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        self.ensure_parent_dir()?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::IoError(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            members = snapshot.members.len(),
            "Saved roster"
        );

        Ok(())
    }
}
