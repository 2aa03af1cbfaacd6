//! User settings for Homekeeper
//!
//! Manages the monthly budget ceiling, alert thresholds, logging level and an
//! optional pinned "today" used for reproducible dashboards.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::paths::HomekeeperPaths;
use crate::error::HomekeeperError;
use crate::models::Money;

/// User settings for Homekeeper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly budget ceiling in won
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Usage percentage above which the budget page warns
    #[serde(default = "default_usage_alert_percent")]
    pub usage_alert_percent: f64,

    /// Days-left window in which a fridge item counts as expiring
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Evaluate dashboards as of this date instead of the system clock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    Money::from_won(1_000_000)
}

fn default_usage_alert_percent() -> f64 {
    80.0
}

fn default_expiry_warning_days() -> i64 {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            usage_alert_percent: default_usage_alert_percent(),
            expiry_warning_days: default_expiry_warning_days(),
            log_level: default_log_level(),
            today: None,
        }
    }
}

impl Settings {
    /// The evaluation date: the pinned date if any, otherwise the local calendar day
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HomekeeperPaths) -> Result<Self, HomekeeperError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HomekeeperError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HomekeeperError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HomekeeperPaths) -> Result<(), HomekeeperError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HomekeeperError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            HomekeeperError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    fn validate(&self) -> Result<(), HomekeeperError> {
        if self.monthly_budget.is_negative() {
            return Err(HomekeeperError::Config(
                "monthly_budget cannot be negative".into(),
            ));
        }
        if self.expiry_warning_days < 0 {
            return Err(HomekeeperError::Config(
                "expiry_warning_days cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
