//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised when registration input fails validation.
///
/// Raised before any state change, so a rejected registration never
/// consumes an ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Please select a club type")]
    NoClubType,

    #[error("Favorite Activity cannot be empty")]
    EmptyActivity,
}

impl ValidationError {
    /// Returns the stable error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyName => ErrorCode::EmptyName,
            ValidationError::NoClubType => ErrorCode::NoClubType,
            ValidationError::EmptyActivity => ErrorCode::EmptyActivity,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyName,
    NoClubType,
    EmptyActivity,

    // Not found errors
    MemberNotFound,

    // Persistence errors
    LoadFailed,
    SaveFailed,

    // Counter errors
    IdsExhausted,

    // Export errors
    ExportFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyName => "EMPTY_NAME",
            ErrorCode::NoClubType => "NO_CLUB_TYPE",
            ErrorCode::EmptyActivity => "EMPTY_ACTIVITY",
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::LoadFailed => "LOAD_FAILED",
            ErrorCode::SaveFailed => "SAVE_FAILED",
            ErrorCode::IdsExhausted => "IDS_EXHAUSTED",
            ErrorCode::ExportFailed => "EXPORT_FAILED",
        };
        write!(f, "{}", s)
    }
}
