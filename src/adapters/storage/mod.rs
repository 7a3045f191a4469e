//! Storage Adapters
//!
//! Implementations of the MemberStorage port for persisting the roster.
//!
//! ## Available Adapters
//!
//! - **JsonFileMemberStorage** - Stores the roster as one JSON file on disk
//! - **InMemoryMemberStorage** - Stores the roster in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryMemberStorage, JsonFileMemberStorage};
//!
//! // Production: file-based storage
//! let storage = JsonFileMemberStorage::new("members.json");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryMemberStorage::new();
//! ```

mod in_memory_member_storage;
mod json_file_storage;

pub use in_memory_member_storage::InMemoryMemberStorage;
pub use json_file_storage::JsonFileMemberStorage;
