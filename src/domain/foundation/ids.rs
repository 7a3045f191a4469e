//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Membership ID assigned to a registered member.
///
/// IDs are handed out sequentially starting at 1 and are never reused,
/// even after the member they belonged to is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// The first ID issued by a fresh store.
    pub const FIRST: MemberId = MemberId(1);

    /// Creates a MemberId from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the ID that follows this one, or `None` at `u64::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
