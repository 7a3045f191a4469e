//! Member domain module.
//!
//! Handles member records, registration validation and the roster that
//! issues membership IDs.
//!
//! # Module Structure
//!
//! - `club_type` - ClubType value object and the offered ClubCatalog
//! - `record` - MemberRecord entity and validated NewMember input
//! - `roster` - Roster aggregate and its persisted RosterSnapshot

mod club_type;
mod record;
mod roster;

pub use club_type::{ClubCatalog, ClubType};
pub use record::{MemberRecord, NewMember};
pub use roster::{IdsExhausted, IntegrityError, Roster, RosterSnapshot};
