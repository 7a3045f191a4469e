//! Member Export Port - Flat-file projection of member records.
//!
//! Exporters receive whatever sequence the presentation layer is showing
//! (the full roster or a search result) and never touch the roster or its
//! backing file.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::member::MemberRecord;

/// Column headers written before the member rows.
pub const EXPORT_HEADER: [&str; 4] = ["Membership ID", "Name", "Club Type", "Favorite Activity"];

/// Port for exporting member records to a flat file.
///
/// # Contract
///
/// Implementations must:
/// - Write the header row first
/// - Write one row per record in the order given
/// - Leave the roster and its backing file untouched
pub trait MemberExporter: Send + Sync {
    /// Export the given records.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the output cannot be written.
    fn export(&self, members: &[MemberRecord]) -> Result<ExportSummary, ExportError>;
}

/// Where an export went and how many rows it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Member rows written, excluding the header.
    pub row_count: usize,
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to export CSV: {0}")]
    Io(String),
}

impl ExportError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::ExportFailed
    }
}
