//! Tip arithmetic: input validation, rounding policy, and [`compute`].
//!
//! The computation itself has no side effects and no state; identical
//! inputs always produce identical amounts. Only the result timestamp
//! varies between calls.

use chrono::Utc;
use thiserror::Error;

use crate::models::{CalculationInput, CalculationResult};

/// Errors for rejected calculation inputs.
///
/// A rejected input produces no result record, so nothing derived from it
/// can ever reach the history.
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Bill amount is negative or not a finite number.
    #[error("Bill amount must be a non-negative number, got {0}")]
    InvalidBill(f64),

    /// Tip rate outside the normalized `[0, 1]` range.
    #[error("Tip rate must be a fraction within 0..=1, got {0}")]
    TipRateOutOfRange(f64),

    /// Zero people cannot split a bill.
    #[error("Number of people must be at least 1, got {0}")]
    InvalidPeopleCount(u32),
}

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Round a currency amount to cents, half away from zero.
///
/// This is the display rounding for amounts that are not subject to the
/// round-up policy.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Compute a full result record from the given inputs.
///
/// The per-person share uses a ceiling to the next whole currency unit
/// when `round_up` is set, so the collected total always covers the bill;
/// otherwise the share is rounded to cents.
pub fn compute(input: &CalculationInput) -> CalcResult<CalculationResult> {
    if !input.bill_amount.is_finite() || input.bill_amount < 0.0 {
        return Err(CalculatorError::InvalidBill(input.bill_amount));
    }
    if !input.tip_rate.is_finite() || !(0.0..=1.0).contains(&input.tip_rate) {
        return Err(CalculatorError::TipRateOutOfRange(input.tip_rate));
    }
    if input.people_count < 1 {
        return Err(CalculatorError::InvalidPeopleCount(input.people_count));
    }

    let tip_amount = input.bill_amount * input.tip_rate;
    let total_amount = input.bill_amount + tip_amount;
    let per_person_raw = total_amount / f64::from(input.people_count);

    // Ceiling applies to the raw share, not its cent rounding, so the
    // never-under-collects guarantee survives float noise at cent
    // boundaries.
    let per_person_final = if input.round_up {
        per_person_raw.ceil()
    } else {
        round_currency(per_person_raw)
    };

    Ok(CalculationResult {
        bill_amount: input.bill_amount,
        tip_rate: input.tip_rate,
        people_count: input.people_count,
        round_up: input.round_up,
        tip_amount,
        total_amount,
        per_person_raw,
        per_person_final,
        timestamp: Utc::now().to_rfc3339(),
    })
}
