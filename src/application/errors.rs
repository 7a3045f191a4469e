//! Errors returned by the membership store to the presentation layer.
//!
//! | Error | Code |
//! |-------|------|
//! | Validation(EmptyName) | EMPTY_NAME |
//! | Validation(NoClubType) | NO_CLUB_TYPE |
//! | Validation(EmptyActivity) | EMPTY_ACTIVITY |
//! | NotFound | MEMBER_NOT_FOUND |
//! | Persistence(LoadFailed) | LOAD_FAILED |
//! | Persistence(SaveFailed) | SAVE_FAILED |
//! | IdsExhausted | IDS_EXHAUSTED |

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, MemberId, ValidationError};
use crate::domain::member::IdsExhausted;
use crate::ports::StorageError;

/// The backing file could not be read or written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to load data: {0}")]
    LoadFailed(#[source] StorageError),

    #[error("Failed to save data: {0}")]
    SaveFailed(#[source] StorageError),
}

impl PersistenceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PersistenceError::LoadFailed(_) => ErrorCode::LoadFailed,
            PersistenceError::SaveFailed(_) => ErrorCode::SaveFailed,
        }
    }
}

/// Membership store errors.
#[derive(Debug, Error)]
pub enum MemberError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No member with ID {0}")]
    NotFound(MemberId),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    IdsExhausted(#[from] IdsExhausted),
}

impl MemberError {
    /// Stable code for the presentation layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            MemberError::Validation(e) => e.code(),
            MemberError::NotFound(_) => ErrorCode::MemberNotFound,
            MemberError::Persistence(e) => e.code(),
            MemberError::IdsExhausted(_) => ErrorCode::IdsExhausted,
        }
    }
}
