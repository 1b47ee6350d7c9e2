//! Calculation input and result records.

use serde::{Deserialize, Serialize};

/// Inputs for one tip calculation, already normalized by the caller.
///
/// `tip_rate` is a fraction in `[0, 1]`; percentage-style values (15 for
/// 15%) must be divided down at the UI boundary before they reach the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Bill amount in currency units.
    pub bill_amount: f64,
    /// Tip rate as a fraction of the bill.
    pub tip_rate: f64,
    /// Number of people splitting the bill.
    pub people_count: u32,
    /// Round each share up to the next whole currency unit.
    pub round_up: bool,
}

/// Result record for one computation, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub bill_amount: f64,
    pub tip_rate: f64,
    pub people_count: u32,
    pub round_up: bool,

    /// `bill_amount` x `tip_rate`, unrounded.
    pub tip_amount: f64,
    /// `bill_amount` + `tip_amount`, unrounded.
    pub total_amount: f64,
    /// Raw per-person share before any rounding.
    pub per_person_raw: f64,
    /// Final per-person share: whole-unit ceiling when rounding up,
    /// otherwise the raw share rounded to cents.
    pub per_person_final: f64,

    /// RFC 3339 creation time. Doubles as the record's identity and sort
    /// key once it is saved to history.
    pub timestamp: String,
}
