//! User settings for monospend
//!
//! Display preferences and the caller-side policies around the metrics
//! engine (forecast critical horizon, anomaly hold, narration sample size).

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::MonospendPaths;
use crate::error::MonospendError;
use crate::metrics::forecast::DEFAULT_CRITICAL_DAYS;
use crate::models::Money;

/// User settings for monospend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// A visible forecast below this many days is flagged critical
    #[serde(default = "default_critical_days")]
    pub critical_depletion_days: i64,

    /// Hold anomalous expenses for confirmation instead of committing them
    #[serde(default = "default_true")]
    pub anomaly_hold: bool,

    /// How many recent expenses are handed to the insight narrator
    #[serde(default = "default_insight_sample")]
    pub insight_sample_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_critical_days() -> i64 {
    DEFAULT_CRITICAL_DAYS
}

fn default_true() -> bool {
    true
}

fn default_insight_sample() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            critical_depletion_days: default_critical_days(),
            anomaly_hold: default_true(),
            insight_sample_size: default_insight_sample(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &MonospendPaths) -> Result<Self, MonospendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MonospendError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MonospendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonospendPaths) -> Result<(), MonospendError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MonospendError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            MonospendError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured format, falling back to ISO 8601
    pub fn format_date(&self, date: NaiveDate) -> String {
        let valid = !StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if valid {
            date.format(&self.date_format).to_string()
        } else {
            date.format("%Y-%m-%d").to_string()
        }
    }
}
