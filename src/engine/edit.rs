use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::ratio::set_axis_within_bounds;
use crate::engine::resolver::{calories_from_macros, macros_from_calories_and_ratio, ratio_of};
use crate::models::{MacroKind, MacroNutrients, RatioTriple, non_negative};

/// Which quantity the user just changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditSource {
    Calories,
    Macro,
    Ratio,
    Preset,
}

/// A single user edit, tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// New calorie total.
    Calories(f64),
    /// New grams for one macro.
    Macro(MacroKind, f64),
    /// New percentage for one ratio axis.
    Ratio(MacroKind, f64),
    /// Replace the whole ratio.
    Preset(RatioTriple),
}

impl Edit {
    pub fn source(&self) -> EditSource {
        match self {
            Edit::Calories(_) => EditSource::Calories,
            Edit::Macro(..) => EditSource::Macro,
            Edit::Ratio(..) => EditSource::Ratio,
            Edit::Preset(_) => EditSource::Preset,
        }
    }
}

/// Macros together with the ratio they are being balanced against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSnapshot {
    pub macros: MacroNutrients,
    pub ratio: RatioTriple,
}

impl MacroSnapshot {
    pub fn new(macros: MacroNutrients, ratio: RatioTriple) -> Self {
        Self { macros, ratio }
    }

    /// Seed from stored macros, deriving the ratio from their grams.
    pub fn from_macros(macros: MacroNutrients) -> Self {
        let ratio = ratio_of(&macros).unwrap_or_default();
        Self { macros, ratio }
    }
}

/// Apply one edit, running exactly one derivation direction.
///
/// - calories: grams follow from the new total and the current ratio
/// - macro: calories are recomputed from grams and the ratio re-derived
/// - ratio: the axis is moved within its bounds, grams follow from calories
/// - preset: the ratio is replaced, grams follow from calories
pub fn apply_edit(snapshot: &MacroSnapshot, edit: Edit) -> MacroSnapshot {
    debug!(source = ?edit.source(), ?edit, "applying macro edit");
    let unit = snapshot.macros.unit.as_str();

    match edit {
        Edit::Calories(calories) => MacroSnapshot {
            macros: macros_from_calories_and_ratio(calories, &snapshot.ratio, unit),
            ratio: snapshot.ratio,
        },
        Edit::Macro(kind, grams) => {
            let mut macros = snapshot.macros.with_grams(kind, non_negative(grams));
            macros.calories = calories_from_macros(&macros);
            let ratio = ratio_of(&macros).unwrap_or(snapshot.ratio);
            MacroSnapshot { macros, ratio }
        }
        Edit::Ratio(axis, percent) => {
            let ratio = set_axis_within_bounds(&snapshot.ratio, axis, percent);
            MacroSnapshot {
                macros: macros_from_calories_and_ratio(snapshot.macros.calories, &ratio, unit),
                ratio,
            }
        }
        Edit::Preset(preset) => MacroSnapshot {
            macros: macros_from_calories_and_ratio(snapshot.macros.calories, &preset, unit),
            ratio: preset,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> MacroSnapshot {
        MacroSnapshot::new(
            MacroNutrients::new(2000.0, 200.0, 150.0, 2000.0 * 0.3 / 9.0),
            RatioTriple::new(30.0, 40.0, 30.0),
        )
    }

    #[test]
    fn test_calorie_edit_keeps_ratio() {
        let next = apply_edit(&seed(), Edit::Calories(1000.0));
        assert_eq!(next.ratio, seed().ratio);
        assert_eq!(next.macros.calories, 1000.0);
        assert!((next.macros.protein - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_edit_recomputes_calories_and_ratio() {
        let start = MacroSnapshot::from_macros(MacroNutrients::new(460.0, 40.0, 30.0, 20.0));
        let next = apply_edit(&start, Edit::Macro(MacroKind::Fat, 10.0));
        // 160 + 120 + 90
        assert_eq!(next.macros.calories, 370.0);
        assert_eq!(next.macros.carbs, 40.0);
        assert!(next.ratio.is_complete());
        assert_eq!(next.ratio.fat, 24.0);
    }

    #[test]
    fn test_macro_edit_to_zero_keeps_previous_ratio() {
        let start = MacroSnapshot::from_macros(MacroNutrients::new(40.0, 0.0, 10.0, 0.0));
        let next = apply_edit(&start, Edit::Macro(MacroKind::Protein, 0.0));
        assert_eq!(next.macros.calories, 0.0);
        assert_eq!(next.ratio, start.ratio);
    }

    #[test]
    fn test_ratio_edit_keeps_calories() {
        let next = apply_edit(&seed(), Edit::Ratio(MacroKind::Protein, 50.0));
        assert_eq!(next.ratio, RatioTriple::new(50.0, 29.0, 21.0));
        assert_eq!(next.macros.calories, 2000.0);
        assert!((next.macros.protein - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_edit_respects_slider_bounds() {
        let next = apply_edit(&seed(), Edit::Ratio(MacroKind::Protein, 95.0));
        assert_eq!(next.ratio.protein, 60.0);
    }

    #[test]
    fn test_preset_edit() {
        let keto = RatioTriple::new(25.0, 5.0, 70.0);
        let next = apply_edit(&seed(), Edit::Preset(keto));
        assert_eq!(next.ratio, keto);
        assert!((next.macros.carbs - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_edit_source_tags() {
        assert_eq!(Edit::Calories(1.0).source(), EditSource::Calories);
        assert_eq!(Edit::Ratio(MacroKind::Fat, 1.0).source(), EditSource::Ratio);
    }
}
