//! Configuration management for the Tip Calculator.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use tipcalc_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("History file: {}", config.settings().paths.history_file);
//!
//! // Modify a setting
//! config.settings_mut().history.max_entries = 50;
//!
//! // Save just the history section atomically
//! config.update_section(ConfigSection::History).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, HistorySettings, LoggingSettings, PathSettings, Settings, TipSettings,
};
