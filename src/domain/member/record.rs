//! Member record entity and validated registration input.

use serde::{Deserialize, Serialize};

use super::club_type::{ClubCatalog, ClubType};
use crate::domain::foundation::{MemberId, ValidationError};

/// One registered club member.
///
/// Field names match the persisted document (`id`, `name`, `club_type`,
/// `activity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    pub club_type: ClubType,
    /// Favorite activity.
    pub activity: String,
}

impl MemberRecord {
    /// Returns true if the member's name contains `folded_query`.
    ///
    /// `folded_query` must already be lower-cased.
    pub fn name_matches(&self, folded_query: &str) -> bool {
        self.name.to_lowercase().contains(folded_query)
    }
}

/// Registration input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    name: String,
    club_type: ClubType,
    activity: String,
}

impl NewMember {
    /// Trims and validates raw registration input.
    ///
    /// Checks run in form order (name, club type, activity) and the first
    /// failure is returned.
    pub fn parse(
        name: &str,
        club_type: &str,
        activity: &str,
        catalog: &ClubCatalog,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let club_type = catalog.resolve(club_type)?;

        let activity = activity.trim();
        if activity.is_empty() {
            return Err(ValidationError::EmptyActivity);
        }

        Ok(Self {
            name: name.to_string(),
            club_type,
            activity: activity.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn club_type(&self) -> &ClubType {
        &self.club_type
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Turns the input into a record carrying the assigned ID.
    pub fn into_record(self, id: MemberId) -> MemberRecord {
        MemberRecord {
            id,
            name: self.name,
            club_type: self.club_type,
            activity: self.activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ClubCatalog {
        ClubCatalog::default()
    }

    #[test]
    fn parse_trims_all_fields() {
        let member = NewMember::parse("  Jane Doe ", " Book Club", " Mystery novels  ", &catalog())
            .unwrap();
        assert_eq!(member.name(), "Jane Doe");
        assert_eq!(member.club_type().as_str(), "Book Club");
        assert_eq!(member.activity(), "Mystery novels");
    }

    #[test]
    fn parse_rejects_empty_name() {
        let result = NewMember::parse("   ", "Sport Club", "Tennis", &catalog());
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn parse_rejects_missing_club_type() {
        let result = NewMember::parse("A", "", "Tennis", &catalog());
        assert_eq!(result, Err(ValidationError::NoClubType));
    }

    #[test]
    fn parse_rejects_empty_activity() {
        let result = NewMember::parse("A", "Sport Club", " ", &catalog());
        assert_eq!(result, Err(ValidationError::EmptyActivity));
    }

    #[test]
    fn parse_reports_name_before_other_failures() {
        let result = NewMember::parse("", "", "", &catalog());
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn into_record_assigns_id() {
        let record = NewMember::parse("John Roe", "sport club", "Tennis", &catalog())
            .unwrap()
            .into_record(MemberId::new(2));

        assert_eq!(record.id, MemberId::new(2));
        assert_eq!(record.name, "John Roe");
        assert_eq!(record.club_type.as_str(), "Sport Club");
        assert_eq!(record.activity, "Tennis");
    }

    #[test]
    fn name_matches_is_case_insensitive_substring() {
        let record = NewMember::parse("ALBERT", "Sport Club", "Golf", &catalog())
            .unwrap()
            .into_record(MemberId::FIRST);

        assert!(record.name_matches("al"));
        assert!(record.name_matches("bert"));
        assert!(!record.name_matches("alice"));
    }

    #[test]
    fn record_serializes_with_persisted_field_names() {
        let record = NewMember::parse("Jane Doe", "Book Club", "Mystery novels", &catalog())
            .unwrap()
            .into_record(MemberId::FIRST);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["club_type"], "Book Club");
        assert_eq!(value["activity"], "Mystery novels");
    }
}
