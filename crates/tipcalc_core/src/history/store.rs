//! History persistence: whole-file JSON load and atomic rewrite.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;
use crate::models::CalculationResult;

use super::log::{HistoryEntry, HistoryLog};

/// Errors from history file operations.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The file exists but is not a valid history document.
    #[error("History file {path} could not be parsed: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file could not be read or written.
    #[error("History file {path} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Access to the persisted history file.
///
/// Holds only configuration; operations take and return explicit
/// [`HistoryLog`] values and never keep state of their own.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Path to the backing JSON file.
    history_file: PathBuf,
    /// Maximum number of retained entries.
    max_entries: usize,
}

impl HistoryStore {
    /// Create a store for the given file path and entry cap.
    pub fn new(history_file: impl Into<PathBuf>, max_entries: usize) -> Self {
        Self {
            history_file: history_file.into(),
            max_entries,
        }
    }

    /// Build a store from loaded settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.paths.history_file,
            settings.history.max_entries,
        )
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.history_file
    }

    /// Get the entry cap.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Load the persisted log.
    ///
    /// A missing file is a valid first-run state and yields an empty log.
    /// Entries that fail to decode are skipped with a warning; a file that
    /// is not a JSON array at the top level is reported as corrupt.
    pub fn load(&self) -> HistoryResult<HistoryLog> {
        if !self.history_file.exists() {
            return Ok(HistoryLog::new());
        }

        let content =
            fs::read_to_string(&self.history_file).map_err(|source| HistoryError::Unavailable {
                path: self.history_file.clone(),
                source,
            })?;

        let raw: Vec<serde_json::Value> =
            serde_json::from_str(&content).map_err(|source| HistoryError::Corrupt {
                path: self.history_file.clone(),
                source,
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for value in raw {
            match serde_json::from_value::<HistoryEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping malformed history entry: {}", e);
                }
            }
        }

        tracing::info!(
            "Loaded {} history entries from {}",
            entries.len(),
            self.history_file.display()
        );
        Ok(HistoryLog::from_entries(entries))
    }

    /// Append a result to the log, evicting the oldest entries once the
    /// cap is exceeded.
    ///
    /// Does not persist; call [`persist`](Self::persist) separately so
    /// several changes can share one write.
    pub fn append(&self, log: &HistoryLog, result: &CalculationResult) -> HistoryLog {
        let mut updated = log.clone();
        updated.push_capped(HistoryEntry::from(result), self.max_entries);
        updated
    }

    /// Serialize the whole log and rewrite the backing file in one
    /// operation.
    ///
    /// Writes to a temp file first, then renames, so a failed write never
    /// leaves a half-written history behind.
    pub fn persist(&self, log: &HistoryLog) -> HistoryResult<()> {
        let unavailable = |source: io::Error| HistoryError::Unavailable {
            path: self.history_file.clone(),
            source,
        };

        if let Some(parent) = self.history_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(unavailable)?;
            }
        }

        let json = serde_json::to_string_pretty(log)
            .map_err(io::Error::other)
            .map_err(unavailable)?;

        let temp_file = self.history_file.with_extension("json.tmp");
        fs::write(&temp_file, &json).map_err(unavailable)?;
        fs::rename(&temp_file, &self.history_file).map_err(unavailable)?;

        tracing::debug!(
            "Saved {} history entries to {}",
            log.len(),
            self.history_file.display()
        );
        Ok(())
    }

    /// Drop every entry. Persisting the returned log empties the file.
    pub fn clear(&self, _log: &HistoryLog) -> HistoryLog {
        HistoryLog::new()
    }
}
