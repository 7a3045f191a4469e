//! Export adapters for member records.

mod csv_exporter;

pub use csv_exporter::{CsvMemberExporter, DEFAULT_EXPORT_FILE};
