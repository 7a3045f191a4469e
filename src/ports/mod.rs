//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberStorage` - Whole-roster load/save (the backing file)
//! - `MemberExporter` - Read-only flat-file export of member records

mod member_exporter;
mod member_storage;

pub use member_exporter::{ExportError, ExportSummary, MemberExporter, EXPORT_HEADER};
pub use member_storage::{MemberStorage, StorageError};
