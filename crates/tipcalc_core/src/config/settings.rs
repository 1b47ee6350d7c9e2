//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// History retention settings.
    #[serde(default)]
    pub history: HistorySettings,

    /// Tip presets and slider range.
    #[serde(default)]
    pub tips: TipSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths: PathSettings::default(),
            history: HistorySettings::default(),
            tips: TipSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Location of the persisted calculation history.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

fn default_history_file() -> String {
    "tip_history.json".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

/// History retention configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of retained entries; the oldest are evicted first.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    20
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

/// Tip input configuration consumed by the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSettings {
    /// Initial tip percentage shown on startup.
    #[serde(default = "default_percent")]
    pub default_percent: f64,

    /// Upper bound of the custom tip slider, in percent.
    #[serde(default = "default_slider_max")]
    pub slider_max_percent: f64,
}

fn default_percent() -> f64 {
    15.0
}

fn default_slider_max() -> f64 {
    50.0
}

impl Default for TipSettings {
    fn default() -> Self {
        Self {
            default_percent: default_percent(),
            slider_max_percent: default_slider_max(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for engine log output.
    #[serde(default)]
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    History,
    Tips,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::History => "history",
            ConfigSection::Tips => "tips",
            ConfigSection::Logging => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[history]"));
        assert!(toml.contains("history_file"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.paths.history_file, settings.paths.history_file);
        assert_eq!(parsed.history.max_entries, settings.history.max_entries);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[paths]\nhistory_file = \"custom_history.json\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.paths.history_file, "custom_history.json");
        // Defaults applied for missing
        assert_eq!(parsed.history.max_entries, 20);
        assert_eq!(parsed.tips.default_percent, 15.0);
        assert_eq!(parsed.tips.slider_max_percent, 50.0);
    }
}
