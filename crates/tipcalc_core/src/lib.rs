//! Tipcalc Core - Backend logic for the Tip Calculator
//!
//! This crate contains all business logic with zero UI dependencies:
//! the tip/split arithmetic and the persisted calculation history.
//! It can be used by the GUI application or a CLI tool.

pub mod calculator;
pub mod config;
pub mod history;
pub mod logging;
pub mod models;
pub mod ui_bridge;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
