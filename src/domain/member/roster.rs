//! Roster aggregate - the ordered member collection and its ID counter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::record::{MemberRecord, NewMember};
use crate::domain::foundation::MemberId;

/// Serialized form of the whole roster.
///
/// Missing fields fall back to an empty list and the first ID; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub members: Vec<MemberRecord>,

    #[serde(default)]
    pub next_id: MemberId,
}

/// Problems found in a snapshot that would break roster invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("Member ID 0 is not a valid membership ID")]
    ZeroId,

    #[error("Membership ID {0} appears more than once")]
    DuplicateId(MemberId),

    #[error("Member {0} has an empty name")]
    EmptyName(MemberId),

    #[error("Member {0} has an empty club type")]
    EmptyClubType(MemberId),

    #[error("Member {0} has an empty favorite activity")]
    EmptyActivity(MemberId),

    #[error("Membership ID {0} leaves no room for another ID")]
    IdOverflow(MemberId),
}

/// Every membership ID has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No membership IDs left to issue (next ID is {0})")]
pub struct IdsExhausted(pub MemberId);

/// Ordered collection of member records plus the next ID to issue.
///
/// # Invariants
///
/// - Records keep insertion order.
/// - No two records share an ID.
/// - `next_id` is greater than every ID issued so far and only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<MemberRecord>,
    next_id: MemberId,
}

impl Roster {
    /// Creates an empty roster whose first registration receives ID 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a roster from a snapshot, checking its invariants.
    ///
    /// A `next_id` that does not exceed every stored ID is raised to
    /// `max(id) + 1`; callers can detect this by comparing against the
    /// snapshot.
    pub fn restore(snapshot: RosterSnapshot) -> Result<Self, IntegrityError> {
        let mut seen = HashSet::with_capacity(snapshot.members.len());
        let mut next_id = snapshot.next_id.max(MemberId::FIRST);

        for member in &snapshot.members {
            if member.id.value() == 0 {
                return Err(IntegrityError::ZeroId);
            }
            if !seen.insert(member.id) {
                return Err(IntegrityError::DuplicateId(member.id));
            }
            if member.name.trim().is_empty() {
                return Err(IntegrityError::EmptyName(member.id));
            }
            if member.club_type.as_str().trim().is_empty() {
                return Err(IntegrityError::EmptyClubType(member.id));
            }
            if member.activity.trim().is_empty() {
                return Err(IntegrityError::EmptyActivity(member.id));
            }
            if member.id >= next_id {
                next_id = member.id.next().ok_or(IntegrityError::IdOverflow(member.id))?;
            }
        }

        Ok(Self {
            members: snapshot.members,
            next_id,
        })
    }

    /// Captures the full state for persistence.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            members: self.members.clone(),
            next_id: self.next_id,
        }
    }

    /// All records in insertion order.
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    /// The ID the next registration will receive.
    pub fn next_id(&self) -> MemberId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: MemberId) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Appends a member under the next ID and advances the counter.
    ///
    /// Fails without changing the roster when the counter cannot advance.
    pub fn register(&mut self, member: NewMember) -> Result<MemberRecord, IdsExhausted> {
        let following = self.next_id.next().ok_or(IdsExhausted(self.next_id))?;
        let record = member.into_record(self.next_id);
        self.next_id = following;
        self.members.push(record.clone());
        Ok(record)
    }

    /// Removes the member with `id`, leaving the counter untouched.
    pub fn remove(&mut self, id: MemberId) -> Option<MemberRecord> {
        let index = self.members.iter().position(|m| m.id == id)?;
        Some(self.members.remove(index))
    }

    /// Members whose name contains `query`, ignoring case.
    ///
    /// A blank query matches everyone. Insertion order is preserved.
    pub fn search(&self, query: &str) -> Vec<MemberRecord> {
        let folded = query.trim().to_lowercase();
        if folded.is_empty() {
            return self.members.clone();
        }
        self.members
            .iter()
            .filter(|m| m.name_matches(&folded))
            .cloned()
            .collect()
    }
}
