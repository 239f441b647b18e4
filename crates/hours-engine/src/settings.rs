//! Engine settings loaded once at startup.
//!
//! The TOML layout is:
//!
//! ```toml
//! [settings]
//! first-day-of-week = "SUNDAY"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HoursError, Result};
use crate::rotate::FirstDayOfWeek;

/// Read-only configuration shared by every formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EngineSettings {
    #[serde(default)]
    pub first_day_of_week: FirstDayOfWeek,
}

#[derive(Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: EngineSettings,
}

impl EngineSettings {
    pub fn new(first_day_of_week: FirstDayOfWeek) -> Self {
        Self { first_day_of_week }
    }

    /// Parse settings from TOML text. A missing `[settings]` table or key
    /// falls back to Monday.
    ///
    /// # Errors
    /// Returns `HoursError::InvalidSettings` for malformed TOML or a first
    /// day other than Monday or Sunday.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content)
            .map_err(|e| HoursError::InvalidSettings(format!("Failed to parse settings: {}", e)))?;
        Ok(file.settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    /// Returns `HoursError::InvalidSettings` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            HoursError::InvalidSettings(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
