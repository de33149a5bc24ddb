//! Application configuration management.

use std::str::FromStr;

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration sources could not be loaded or deserialized.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The configured reporting time zone is not a known IANA zone name.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// IANA name of the reporting time zone. "Today" is always the calendar
    /// date in this zone, never the process-local zone.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "America/Sao_Paulo".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
        }
    }
}

impl DashboardConfig {
    /// Resolves the configured time zone name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTimeZone` if the name is not a valid
    /// IANA zone. There is no fallback to the system zone.
    pub fn resolve_time_zone(&self) -> Result<Tz, ConfigError> {
        Tz::from_str(&self.time_zone)
            .map_err(|_| ConfigError::UnknownTimeZone(self.time_zone.clone()))
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("VENDRA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
