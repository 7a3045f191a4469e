//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Roster persistence (JSON file, in-memory)
//! - `export` - Flat-file export of member records (CSV)

pub mod export;
pub mod storage;

pub use export::CsvMemberExporter;
pub use storage::{InMemoryMemberStorage, JsonFileMemberStorage};
