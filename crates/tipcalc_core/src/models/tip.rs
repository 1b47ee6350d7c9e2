//! Tip selection types: fixed presets and the custom slider value.

use serde::{Deserialize, Serialize};

/// One of the fixed tip preset buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipPreset {
    #[serde(rename = "10%")]
    Ten,
    #[serde(rename = "12%")]
    Twelve,
    #[serde(rename = "15%")]
    Fifteen,
}

impl TipPreset {
    /// All presets in display order.
    pub const ALL: [TipPreset; 3] = [TipPreset::Ten, TipPreset::Twelve, TipPreset::Fifteen];

    /// The preset's tip rate as a fraction of the bill.
    pub fn rate(&self) -> f64 {
        match self {
            TipPreset::Ten => 0.10,
            TipPreset::Twelve => 0.12,
            TipPreset::Fifteen => 0.15,
        }
    }

    /// The preset's percentage value, for display.
    pub fn percent(&self) -> f64 {
        self.rate() * 100.0
    }
}

impl std::fmt::Display for TipPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipPreset::Ten => write!(f, "10%"),
            TipPreset::Twelve => write!(f, "12%"),
            TipPreset::Fifteen => write!(f, "15%"),
        }
    }
}

/// How the tip rate was chosen for one computation.
///
/// Only one variant is authoritative per computation. The slider overrides
/// any preset while it is active; the caller resolves that before asking
/// for a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TipSelection {
    /// A fixed preset button.
    Preset(TipPreset),
    /// Custom slider value as a fraction of the bill (0.15 for 15%).
    Custom(f64),
}

impl TipSelection {
    /// Resolve the selection to its tip rate fraction.
    pub fn rate(&self) -> f64 {
        match self {
            TipSelection::Preset(preset) => preset.rate(),
            TipSelection::Custom(rate) => *rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_rates() {
        assert_eq!(TipPreset::Ten.rate(), 0.10);
        assert_eq!(TipPreset::Twelve.rate(), 0.12);
        assert_eq!(TipPreset::Fifteen.rate(), 0.15);
        assert_eq!(TipPreset::Ten.percent(), 10.0);
    }

    #[test]
    fn preset_display_matches_buttons() {
        let labels: Vec<String> = TipPreset::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, vec!["10%", "12%", "15%"]);
    }

    #[test]
    fn selection_resolves_rate() {
        assert_eq!(TipSelection::Preset(TipPreset::Fifteen).rate(), 0.15);
        assert_eq!(TipSelection::Custom(0.225).rate(), 0.225);
    }

    #[test]
    fn preset_serializes_as_label() {
        let json = serde_json::to_string(&TipPreset::Twelve).unwrap();
        assert_eq!(json, "\"12%\"");
    }
}
