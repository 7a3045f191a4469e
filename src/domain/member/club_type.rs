//! Club type value object and the catalog of offered club types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Category a member selects at registration.
///
/// Stored as the catalog's display label (e.g. `"Book Club"`). Values read
/// back from the backing file are kept verbatim even when the catalog no
/// longer offers them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubType(String);

impl ClubType {
    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of club types offered at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCatalog {
    offered: Vec<ClubType>,
}

impl ClubCatalog {
    /// Labels offered when configuration does not override them.
    pub const DEFAULT_TYPES: [&'static str; 2] = ["Sport Club", "Book Club"];

    /// Builds a catalog from labels.
    ///
    /// Labels are trimmed; blank labels and labels that fold to the same
    /// key as an earlier one are dropped, keeping the first spelling.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut offered: Vec<ClubType> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            let key = Self::fold(label);
            if key.is_empty() || offered.iter().any(|c| Self::fold(&c.0) == key) {
                continue;
            }
            offered.push(ClubType(label.to_string()));
        }
        Self { offered }
    }

    /// Matching key for a label: letters and digits only, lower-cased.
    ///
    /// `"Book Club"`, `"BookClub"` and `"book_club"` share the key `"bookclub"`.
    pub fn fold(label: &str) -> String {
        label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Resolves user input to an offered club type.
    ///
    /// Matching ignores case, whitespace and punctuation; the catalog's
    /// spelling is returned.
    pub fn resolve(&self, input: &str) -> Result<ClubType, ValidationError> {
        let key = Self::fold(input);
        if key.is_empty() {
            return Err(ValidationError::NoClubType);
        }
        self.offered
            .iter()
            .find(|c| Self::fold(&c.0) == key)
            .cloned()
            .ok_or(ValidationError::NoClubType)
    }

    /// Returns true if the catalog offers this club type.
    pub fn contains(&self, club_type: &ClubType) -> bool {
        self.offered.contains(club_type)
    }

    /// Iterates over the offered club types in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ClubType> {
        self.offered.iter()
    }

    pub fn len(&self) -> usize {
        self.offered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }
}

impl Default for ClubCatalog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TYPES)
    }
}
