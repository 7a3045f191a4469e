//! CSV Export Adapter - Implementation of MemberExporter.
//!
//! Writes member rows as comma-separated values with CRLF line endings.
//! Fields containing a comma, a double quote or a line break are quoted and
//! inner quotes are doubled.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::member::MemberRecord;
use crate::ports::{ExportError, ExportSummary, MemberExporter, EXPORT_HEADER};

/// Default output file name.
pub const DEFAULT_EXPORT_FILE: &str = "members_export.csv";

/// Exports members to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvMemberExporter {
    path: PathBuf,
}

impl CsvMemberExporter {
    /// Creates an exporter writing to `path`, replacing any existing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the header and one row per member.
    pub fn render(members: &[MemberRecord]) -> String {
        let mut out = String::new();
        push_row(&mut out, EXPORT_HEADER.iter().copied());
        for member in members {
            let id = member.id.to_string();
            push_row(
                &mut out,
                [
                    id.as_str(),
                    member.name.as_str(),
                    member.club_type.as_str(),
                    member.activity.as_str(),
                ],
            );
        }
        out
    }
}

impl Default for CsvMemberExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_FILE)
    }
}

impl MemberExporter for CsvMemberExporter {
    fn export(&self, members: &[MemberRecord]) -> Result<ExportSummary, ExportError> {
        let content = Self::render(members);

        fs::write(&self.path, content).map_err(|e| {
            ExportError::io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), rows = members.len(), "Exported members");

        Ok(ExportSummary {
            path: self.path.clone(),
            row_count: members.len(),
        })
    }
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    let needs_quotes = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\r' | '\n'));
    if !needs_quotes {
        out.push_str(field);
        return;
    }
    out.push('"');
    out.push_str(&field.replace('"', "\"\""));
    out.push('"');
}
