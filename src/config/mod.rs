//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CLUB_REGISTRY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use club_registry::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Roster stored in {}", config.storage.data_file.display());
//! ```

mod clubs;
mod error;
mod logging;
mod storage;

pub use clubs::ClubsConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Backing file and export locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Offered club types
    #[serde(default)]
    pub clubs: ClubsConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CLUB_REGISTRY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `CLUB_REGISTRY__CLUBS__TYPES` on commas
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CLUB_REGISTRY__STORAGE__DATA_FILE=data/members.json` -> `storage.data_file`
    /// - `CLUB_REGISTRY__CLUBS__TYPES=Sport Club,Book Club` -> `clubs.types`
    /// - `CLUB_REGISTRY__LOGGING__LEVEL=debug` -> `logging.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_env()
    }

    /// Load configuration from the process environment only, without `.env`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLUB_REGISTRY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("clubs.types"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.clubs.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
