//! User settings for the expense tracker
//!
//! Persisted as `config.json` in the base directory. Every field has a
//! default so older or hand-edited files keep loading.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Pixel dimensions for the rendered dashboard charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_trend_width")]
    pub trend_width: u32,
    #[serde(default = "default_trend_height")]
    pub trend_height: u32,
    #[serde(default = "default_pie_size")]
    pub pie_width: u32,
    #[serde(default = "default_pie_size")]
    pub pie_height: u32,
}

fn default_trend_width() -> u32 {
    1000
}

fn default_trend_height() -> u32 {
    500
}

fn default_pie_size() -> u32 {
    800
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            trend_width: default_trend_width(),
            trend_height: default_trend_height(),
            pie_width: default_pie_size(),
            pie_height: default_pie_size(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal and HTML output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when displaying expenses (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Default tracing filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub charts: ChartSettings,
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

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_log_filter() -> String {
    "expense_tracker=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            bind_address: default_bind_address(),
            log_filter: default_log_filter(),
            charts: ChartSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would only fail later, mid-output
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ExpenseError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.bind_address, "127.0.0.1:5000");
        assert_eq!(settings.charts.trend_width, 1000);
        assert_eq!(settings.charts.pie_height, 800);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.charts.trend_width = 640;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.charts.trend_width, 640);
        assert_eq!(loaded.charts.trend_height, 500);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"bind_address": "0.0.0.0:8080"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.bind_address, "0.0.0.0:8080");
        assert_eq!(loaded.log_filter, "expense_tracker=info");
        assert_eq!(loaded.charts, ChartSettings::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_bad_date_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"date_format": "%!"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(Settings::default().validate().is_ok());
    }
}
