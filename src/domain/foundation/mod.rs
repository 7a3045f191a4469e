//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! club registry domain.

mod errors;
mod ids;

pub use errors::{ErrorCode, ValidationError};
pub use ids::MemberId;
