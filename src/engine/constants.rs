use crate::models::ratio::{AxisBounds, RatioPreset, RatioTriple};

pub use crate::models::macros::{CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM};
pub use crate::models::ratio::DEFAULT_RATIO;

// ─────────────────────────────────────────────────────────────────────────────
// Ratio engine
// ─────────────────────────────────────────────────────────────────────────────

/// Every ratio triple sums to this.
pub const RATIO_TOTAL: f64 = 100.0;

/// Slider range for the protein share.
pub const PROTEIN_PERCENT_BOUNDS: AxisBounds = AxisBounds::new(10.0, 60.0);

/// Slider range for the carbs share.
pub const CARBS_PERCENT_BOUNDS: AxisBounds = AxisBounds::new(5.0, 70.0);

/// Fat is the residual axis and only bounded by the total.
pub const FAT_PERCENT_BOUNDS: AxisBounds = AxisBounds::new(0.0, RATIO_TOTAL);

/// Named splits offered next to the sliders.
pub static RATIO_PRESETS: [RatioPreset; 5] = [
    RatioPreset {
        name: "Balanced",
        ratio: RatioTriple::new(30.0, 40.0, 30.0),
    },
    RatioPreset {
        name: "Mass gain",
        ratio: RatioTriple::new(25.0, 55.0, 20.0),
    },
    RatioPreset {
        name: "Ketogenic",
        ratio: RatioTriple::new(25.0, 5.0, 70.0),
    },
    RatioPreset {
        name: "Athletic",
        ratio: RatioTriple::new(35.0, 45.0, 20.0),
    },
    RatioPreset {
        name: "Low-carb",
        ratio: RatioTriple::new(35.0, 25.0, 40.0),
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Consistency and balance
// ─────────────────────────────────────────────────────────────────────────────

/// Allowed relative gap between stated and computed calories (5%).
pub const DEFAULT_DRIFT_TOLERANCE: f64 = 0.05;

/// Recommended calorie share of protein, in percent.
pub const PROTEIN_BAND: (f64, f64) = (15.0, 35.0);

/// Recommended calorie share of carbs, in percent.
pub const CARBS_BAND: (f64, f64) = (45.0, 65.0);

/// Recommended calorie share of fat, in percent.
pub const FAT_BAND: (f64, f64) = (20.0, 35.0);

// ─────────────────────────────────────────────────────────────────────────────
// Cooking
// ─────────────────────────────────────────────────────────────────────────────

/// Reference weight (g) that per-portion values are normalized to.
pub const STANDARD_WEIGHT: f64 = 100.0;

/// Minimum |delta| (percentage points) worth rendering as a badge.
pub const DELTA_DISPLAY_THRESHOLD: f64 = 0.5;

/// Case-insensitive lookup of a ratio preset by name.
pub fn find_preset(name: &str) -> Option<&'static RatioPreset> {
    let needle = name.trim().to_lowercase();
    RATIO_PRESETS
        .iter()
        .find(|p| p.name.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_complete() {
        for preset in &RATIO_PRESETS {
            assert!(preset.ratio.is_complete(), "{} does not sum to 100", preset.name);
        }
    }

    #[test]
    fn test_find_preset_case_insensitive() {
        assert_eq!(find_preset("ketogenic").unwrap().ratio.fat, 70.0);
        assert_eq!(find_preset("  LOW-CARB ").unwrap().name, "Low-carb");
        assert!(find_preset("paleo").is_none());
    }
}
