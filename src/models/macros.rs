use std::fmt;

use serde::{Deserialize, Serialize};

// Atwater factors, kcal per gram.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// One of the three macronutrients.
///
/// Variant order matters: `MacroKind::ALL` defines which non-edited axis
/// absorbs rounding drift in the ratio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKind {
    Protein,
    Carbs,
    Fat,
}

impl MacroKind {
    pub const ALL: [MacroKind; 3] = [MacroKind::Protein, MacroKind::Carbs, MacroKind::Fat];

    /// kcal yielded per gram.
    #[inline]
    pub fn calorie_factor(self) -> f64 {
        match self {
            MacroKind::Protein => PROTEIN_KCAL_PER_GRAM,
            MacroKind::Carbs => CARBS_KCAL_PER_GRAM,
            MacroKind::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    /// The two kinds other than `self`, in canonical order.
    pub fn others(self) -> [MacroKind; 2] {
        match self {
            MacroKind::Protein => [MacroKind::Carbs, MacroKind::Fat],
            MacroKind::Carbs => [MacroKind::Protein, MacroKind::Fat],
            MacroKind::Fat => [MacroKind::Protein, MacroKind::Carbs],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MacroKind::Protein => "protein",
            MacroKind::Carbs => "carbs",
            MacroKind::Fat => "fat",
        }
    }
}

impl fmt::Display for MacroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_unit() -> String {
    "g".to_string()
}

/// Calories plus the three macro quantities for a food, meal or target.
///
/// Calories are not forced to agree with the grams at construction; use
/// [`MacroNutrients::calorie_drift`] to inspect how far apart they are.
///
/// Missing numeric fields deserialize as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl MacroNutrients {
    pub fn new(calories: f64, carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            calories,
            carbs,
            protein,
            fat,
            unit: default_unit(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// All-zero macros carrying the given unit tag.
    pub fn zero(unit: impl Into<String>) -> Self {
        Self {
            calories: 0.0,
            carbs: 0.0,
            protein: 0.0,
            fat: 0.0,
            unit: unit.into(),
        }
    }

    /// Grams of one macro.
    #[inline]
    pub fn grams(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }

    /// Copy with one macro replaced.
    pub fn with_grams(&self, kind: MacroKind, grams: f64) -> Self {
        let mut next = self.clone();
        match kind {
            MacroKind::Protein => next.protein = grams,
            MacroKind::Carbs => next.carbs = grams,
            MacroKind::Fat => next.fat = grams,
        }
        next
    }

    /// Copy with negative or non-finite fields clamped to 0.
    pub fn sanitized(&self) -> Self {
        Self {
            calories: non_negative(self.calories),
            carbs: non_negative(self.carbs),
            protein: non_negative(self.protein),
            fat: non_negative(self.fat),
            unit: self.unit.clone(),
        }
    }

    /// Compare stated calories against the value implied by the grams.
    pub fn calorie_drift(&self) -> CalorieDrift {
        CalorieDrift::new(self.calories, caloric_sum(self))
    }

    /// Copy whose calories are recomputed from the grams when missing or 0.
    pub fn with_calories_filled(&self) -> Self {
        let mut next = self.clone();
        if next.calories <= 0.0 {
            next.calories = caloric_sum(self).round();
        }
        next
    }

    /// Whether stated calories match the grams within `tolerance` (0.05 = 5%).
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.calorie_drift().within(tolerance)
    }
}

/// Unrounded kcal implied by the macro grams. Negative grams count as 0.
pub fn caloric_sum(m: &MacroNutrients) -> f64 {
    MacroKind::ALL
        .into_iter()
        .map(|k| non_negative(m.grams(k)) * k.calorie_factor())
        .sum()
}

/// Clamp a user-supplied quantity to a finite, non-negative value.
#[inline]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Gap between stated calories and the calories implied by macro grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieDrift {
    pub stated: f64,
    pub computed: f64,
    /// `|computed - stated| / stated`.
    pub relative: f64,
}

impl CalorieDrift {
    pub fn new(stated: f64, computed: f64) -> Self {
        let relative = if stated > 0.0 {
            (computed - stated).abs() / stated
        } else if computed > 0.0 {
            1.0
        } else {
            0.0
        };
        Self {
            stated,
            computed,
            relative,
        }
    }

    pub fn within(&self, tolerance: f64) -> bool {
        self.relative <= tolerance
    }

    /// Relative drift as a percentage.
    pub fn percent(&self) -> f64 {
        self.relative * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_macros() {
        // 40*4 + 30*4 + 20*9 = 460
        let m = MacroNutrients::new(460.0, 40.0, 30.0, 20.0);
        assert!(m.is_consistent(0.05));
        assert_eq!(m.calorie_drift().relative, 0.0);
    }

    #[test]
    fn test_drift_beyond_tolerance() {
        // 20*4 + 10*4 + 5*9 = 165 against a stated 200
        let m = MacroNutrients::new(200.0, 20.0, 10.0, 5.0);
        let drift = m.calorie_drift();
        assert_eq!(drift.computed, 165.0);
        assert!((drift.percent() - 17.5).abs() < 0.001);
        assert!(!m.is_consistent(0.05));
        assert!(m.is_consistent(0.2));
    }

    #[test]
    fn test_drift_with_zero_stated_calories() {
        assert_eq!(MacroNutrients::zero("g").calorie_drift().relative, 0.0);
        let m = MacroNutrients::new(0.0, 10.0, 0.0, 0.0);
        assert_eq!(m.calorie_drift().relative, 1.0);
    }

    #[test]
    fn test_sanitized_clamps_fields() {
        let m = MacroNutrients::new(f64::NAN, -5.0, 12.0, f64::INFINITY).sanitized();
        assert_eq!(m, MacroNutrients::new(0.0, 0.0, 12.0, 0.0));
    }

    #[test]
    fn test_unit_defaults_when_missing() {
        let m: MacroNutrients =
            serde_json::from_str(r#"{"calories": 100, "carbs": 10, "protein": 10, "fat": 2}"#)
                .unwrap();
        assert_eq!(m.unit, "g");
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let m: MacroNutrients = serde_json::from_str(r#"{"carbs": 40, "fat": 20}"#).unwrap();
        assert_eq!(m, MacroNutrients::new(0.0, 40.0, 0.0, 20.0));

        // 40*4 + 20*9
        assert_eq!(m.with_calories_filled().calories, 340.0);
    }

    #[test]
    fn test_stated_calories_are_not_refilled() {
        let m = MacroNutrients::new(200.0, 20.0, 10.0, 5.0);
        assert_eq!(m.with_calories_filled(), m);
    }

    #[test]
    fn test_others_order() {
        assert_eq!(MacroKind::Protein.others(), [MacroKind::Carbs, MacroKind::Fat]);
        assert_eq!(MacroKind::Fat.others(), [MacroKind::Protein, MacroKind::Carbs]);
    }
}
