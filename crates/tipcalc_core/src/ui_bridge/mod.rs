//! Facade exposed to the UI layer.
//!
//! The GUI owns raw text parsing, percent-to-fraction normalization,
//! theming, and clipboard formatting; it talks to the engine exclusively
//! through these calls. Keeping the seam here lets the UI toolkit change
//! without touching the calculation or history logic.

use tracing::warn;

use crate::calculator::{self, CalcResult};
use crate::history::{HistoryError, HistoryLog, HistoryStore};
use crate::models::{CalculationInput, CalculationResult, TipSelection};

/// Compute a result record from UI-level inputs.
///
/// Resolves the preset-vs-slider choice to its rate fraction, then
/// delegates validation and arithmetic to the calculator. A validation
/// error yields no result, so nothing derived from bad input can be saved.
pub fn compute(
    bill_amount: f64,
    tip: TipSelection,
    people_count: u32,
    round_up: bool,
) -> CalcResult<CalculationResult> {
    let input = CalculationInput {
        bill_amount,
        tip_rate: tip.rate(),
        people_count,
        round_up,
    };
    calculator::compute(&input)
}

/// Load the persisted history, degrading to an empty log if the file is
/// unreadable or corrupt.
///
/// Startup never fails on a bad history file; the problem is logged and
/// the session starts fresh.
pub fn load_history(store: &HistoryStore) -> HistoryLog {
    match store.load() {
        Ok(log) => log,
        Err(e) => {
            warn!("Could not load history, starting empty: {}", e);
            HistoryLog::new()
        }
    }
}

/// Append a result and persist the updated log in one step.
///
/// The returned log always reflects the append, even when the write
/// fails: the current session keeps the entry while the error tells the
/// UI that durability was not achieved.
pub fn save_to_history(
    store: &HistoryStore,
    log: &HistoryLog,
    result: &CalculationResult,
) -> (HistoryLog, Result<(), HistoryError>) {
    let updated = store.append(log, result);
    let outcome = store.persist(&updated);
    (updated, outcome)
}

/// Clear the history and persist the now-empty log.
pub fn clear_history(
    store: &HistoryStore,
    log: &HistoryLog,
) -> (HistoryLog, Result<(), HistoryError>) {
    let cleared = store.clear(log);
    let outcome = store.persist(&cleared);
    (cleared, outcome)
}
