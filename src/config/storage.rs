//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the roster and exports are written
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Backing JSON file holding the roster
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// CSV file written by exports
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_FILE"));
        }
        if self.export_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__EXPORT_FILE"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("members.json")
}

fn default_export_file() -> PathBuf {
    PathBuf::from("members_export.csv")
}
