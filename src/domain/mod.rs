//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, error codes, validation errors)
//! - `member` - Member records, club types and the roster aggregate

pub mod foundation;
pub mod member;
