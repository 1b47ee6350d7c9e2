//! History entries and the ordered in-memory log.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, CalculationResult};

/// One persisted calculation record.
///
/// Extra fields in a stored entry are ignored on load so the on-disk
/// format can grow without breaking older files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub bill_amount: f64,
    pub tip_rate: f64,
    pub people_count: u32,
    pub round_up: bool,
    pub tip_amount: f64,
    pub total_amount: f64,
    pub per_person_final: f64,
    /// RFC 3339 creation time; the entry's identity and sort key.
    pub timestamp: String,
}

impl HistoryEntry {
    /// Rebuild calculator inputs from this entry, for recalling a past
    /// calculation back into the input form.
    pub fn as_input(&self) -> CalculationInput {
        CalculationInput {
            bill_amount: self.bill_amount,
            tip_rate: self.tip_rate,
            people_count: self.people_count,
            round_up: self.round_up,
        }
    }
}

impl From<&CalculationResult> for HistoryEntry {
    fn from(result: &CalculationResult) -> Self {
        Self {
            bill_amount: result.bill_amount,
            tip_rate: result.tip_rate,
            people_count: result.people_count,
            round_up: result.round_up,
            tip_amount: result.tip_amount,
            total_amount: result.total_amount,
            per_person_final: result.per_person_final,
            timestamp: result.timestamp.clone(),
        }
    }
}

/// Ordered sequence of history entries, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry.
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// The oldest retained entry (the next eviction candidate).
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Append an entry, evicting the oldest until the cap holds.
    pub(crate) fn push_capped(&mut self, entry: HistoryEntry, max_entries: usize) {
        self.entries.push(entry);
        while self.entries.len() > max_entries {
            self.entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(timestamp: &str) -> HistoryEntry {
        HistoryEntry {
            bill_amount: 50.0,
            tip_rate: 0.10,
            people_count: 3,
            round_up: false,
            tip_amount: 5.0,
            total_amount: 55.0,
            per_person_final: 18.33,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut log = HistoryLog::new();
        log.push_capped(make_entry("a"), 10);
        log.push_capped(make_entry("b"), 10);

        assert_eq!(log.len(), 2);
        assert_eq!(log.oldest().unwrap().timestamp, "a");
        assert_eq!(log.newest().unwrap().timestamp, "b");
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let mut log = HistoryLog::new();
        for ts in ["a", "b", "c", "d"] {
            log.push_capped(make_entry(ts), 3);
        }

        assert_eq!(log.len(), 3);
        let retained: Vec<&str> = log
            .entries()
            .iter()
            .map(|e| e.timestamp.as_str())
            .collect();
        assert_eq!(retained, vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut log = HistoryLog::new();
        log.push_capped(make_entry("a"), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn entry_recalls_its_inputs() {
        let entry = make_entry("a");
        let input = entry.as_input();
        assert_eq!(input.bill_amount, 50.0);
        assert_eq!(input.tip_rate, 0.10);
        assert_eq!(input.people_count, 3);
        assert!(!input.round_up);
    }
}
