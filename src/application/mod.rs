//! Application layer - the membership store and its handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `MembershipStore` owns the roster and is the only writer of the backing
//! file; `ExportMembersHandler` is a read-only query over it.

mod errors;
mod export_members;
mod membership_store;

pub use errors::{MemberError, PersistenceError};
pub use export_members::{ExportMembersCommand, ExportMembersHandler, ExportMembersResult};
pub use membership_store::{MembershipStore, OpenedStore};
