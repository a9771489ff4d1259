use tracing::trace;

pub use crate::models::caloric_sum;
use crate::models::{MacroKind, MacroNutrients, RatioTriple, non_negative};

/// Calories implied by the macro grams, rounded to the nearest kcal.
pub fn calories_from_macros(m: &MacroNutrients) -> f64 {
    caloric_sum(m).round()
}

/// Grams per macro so that each takes its ratio share of `calories`.
///
/// Calories are copied through unchanged after clamping to a finite,
/// non-negative value.
pub fn macros_from_calories_and_ratio(
    calories: f64,
    ratio: &RatioTriple,
    unit: &str,
) -> MacroNutrients {
    let calories = non_negative(calories);
    let grams = |k: MacroKind| (calories * ratio.get(k) / 100.0) / k.calorie_factor();

    let m = MacroNutrients {
        calories,
        carbs: grams(MacroKind::Carbs),
        protein: grams(MacroKind::Protein),
        fat: grams(MacroKind::Fat),
        unit: unit.to_string(),
    };
    trace!(calories, ?ratio, "derived macros from calories");
    m
}

/// Calorie share of each macro as whole percentages summing to 100.
///
/// `None` when the grams carry no calories at all.
pub fn ratio_of(m: &MacroNutrients) -> Option<RatioTriple> {
    if caloric_sum(m) <= 0.0 {
        return None;
    }
    let kcal = |k: MacroKind| non_negative(m.grams(k)) * k.calorie_factor();
    Some(RatioTriple::normalized(
        kcal(MacroKind::Protein),
        kcal(MacroKind::Carbs),
        kcal(MacroKind::Fat),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_from_macros() {
        let m = MacroNutrients::new(0.0, 40.0, 30.0, 20.0);
        assert_eq!(calories_from_macros(&m), 460.0);
    }

    #[test]
    fn test_calories_from_macros_rounds() {
        // 10.3*4 + 0 + 0 = 41.2
        let m = MacroNutrients::new(0.0, 10.3, 0.0, 0.0);
        assert_eq!(calories_from_macros(&m), 41.0);
    }

    #[test]
    fn test_negative_grams_count_as_zero() {
        let m = MacroNutrients::new(0.0, -10.0, 10.0, 0.0);
        assert_eq!(calories_from_macros(&m), 40.0);
    }

    #[test]
    fn test_macros_from_calories() {
        let m = macros_from_calories_and_ratio(2000.0, &RatioTriple::new(30.0, 40.0, 30.0), "g");
        assert_eq!(m.calories, 2000.0);
        assert!((m.protein - 150.0).abs() < 1e-9);
        assert!((m.carbs - 200.0).abs() < 1e-9);
        assert!((m.fat - 66.666_666).abs() < 1e-3);
        assert_eq!(m.unit, "g");
    }

    #[test]
    fn test_macros_from_invalid_calories_clamps() {
        let ratio = RatioTriple::default();
        for bad in [-250.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let m = macros_from_calories_and_ratio(bad, &ratio, "g");
            assert_eq!(m, MacroNutrients::zero("g"));
        }
    }

    #[test]
    fn test_ratio_of() {
        // protein 120, carbs 160, fat 180 of 460 kcal -> 26.1 / 34.8 / 39.1
        let m = MacroNutrients::new(460.0, 40.0, 30.0, 20.0);
        assert_eq!(ratio_of(&m), Some(RatioTriple::new(26.0, 35.0, 39.0)));
        assert_eq!(ratio_of(&MacroNutrients::zero("g")), None);
    }
}
