//! Club catalog configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::member::ClubCatalog;

/// Club types offered at registration
#[derive(Debug, Clone, Deserialize)]
pub struct ClubsConfig {
    /// Offered club type labels, in display order
    #[serde(default = "default_types")]
    pub types: Vec<String>,
}

impl ClubsConfig {
    /// Build the domain catalog
    pub fn catalog(&self) -> ClubCatalog {
        ClubCatalog::new(&self.types)
    }

    /// Validate club configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.types.is_empty() {
            return Err(ValidationError::NoClubTypes);
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.types.len());
        for label in &self.types {
            let folded = ClubCatalog::fold(label);
            if folded.is_empty() {
                return Err(ValidationError::BlankClubType);
            }
            if seen.contains(&folded) {
                return Err(ValidationError::DuplicateClubType(label.trim().to_string()));
            }
            seen.push(folded);
        }
        Ok(())
    }
}

impl Default for ClubsConfig {
    fn default() -> Self {
        Self {
            types: default_types(),
        }
    }
}

fn default_types() -> Vec<String> {
    ClubCatalog::DEFAULT_TYPES
        .iter()
        .map(|s| s.to_string())
        .collect()
}
