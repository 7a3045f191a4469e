//! ExportMembersHandler - Query handler for exporting displayed members.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::member::MemberRecord;
use crate::ports::{ExportError, MemberExporter};

use super::MembershipStore;

/// Which members to export.
#[derive(Debug, Clone, Default)]
pub struct ExportMembersCommand {
    /// Name filter; `None` or a blank query exports everyone.
    pub query: Option<String>,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMembersResult {
    pub path: PathBuf,
    pub row_count: usize,
}

/// Handler for exporting members.
///
/// Exports are read-only: the roster and its backing file are untouched.
pub struct ExportMembersHandler {
    exporter: Arc<dyn MemberExporter>,
}

impl ExportMembersHandler {
    pub fn new(exporter: Arc<dyn MemberExporter>) -> Self {
        Self { exporter }
    }

    /// Exports the members selected by `cmd` from `store`.
    pub fn handle(
        &self,
        store: &MembershipStore,
        cmd: ExportMembersCommand,
    ) -> Result<ExportMembersResult, ExportError> {
        match cmd.query.as_deref() {
            Some(query) => self.export_records(&store.search(query)),
            None => self.export_records(store.list_all()),
        }
    }

    /// Exports an already-selected sequence of members in the given order.
    pub fn export_records(
        &self,
        members: &[MemberRecord],
    ) -> Result<ExportMembersResult, ExportError> {
        let summary = self.exporter.export(members).map_err(|e| {
            tracing::error!(error = %e, "Export failed");
            e
        })?;

        tracing::info!(
            path = %summary.path.display(),
            rows = summary.row_count,
            "Members exported"
        );

        Ok(ExportMembersResult {
            path: summary.path,
            row_count: summary.row_count,
        })
    }
}
