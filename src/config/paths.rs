//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-tracker` or `~/.config/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory is available.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ExpenseError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("expense-tracker"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expense-tracker"))
}
