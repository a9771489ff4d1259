use serde::Serialize;
use tracing::debug;

use crate::engine::resolver::calories_from_macros;
use crate::models::{
    AdjustmentReport, CalorieDrift, MacroNutrients, RetentionFactors, non_negative,
    percent_change,
};

/// Outcome of applying a cooking method's retention factors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookingAdjustment {
    /// Macros after cooking; calories recomputed from the adjusted grams.
    pub adjusted: MacroNutrients,
    pub adjusted_weight: f64,
    pub delta_percent: AdjustmentReport,
    /// `raw.calories * calorie_factor`, as the retention table claims.
    pub expected_calories: f64,
}

impl CookingAdjustment {
    /// Gap between the recomputed calories and what the retention table claims.
    ///
    /// A large gap means the supplied factors disagree with each other.
    pub fn retention_drift(&self) -> CalorieDrift {
        CalorieDrift::new(self.expected_calories, self.adjusted.calories)
    }

    /// Adjusted macros rescaled to `standard_weight` grams of cooked food.
    pub fn normalized_per(&self, standard_weight: f64) -> MacroNutrients {
        if self.adjusted_weight <= 0.0 {
            return MacroNutrients::zero(self.adjusted.unit.clone());
        }
        let scale = non_negative(standard_weight) / self.adjusted_weight;
        MacroNutrients {
            calories: self.adjusted.calories * scale,
            carbs: self.adjusted.carbs * scale,
            protein: self.adjusted.protein * scale,
            fat: self.adjusted.fat * scale,
            unit: self.adjusted.unit.clone(),
        }
    }
}

/// Apply retention factors to raw macros and weight.
///
/// Grams and weight are scaled directly. Calories are not scaled but
/// recomputed from the adjusted grams. Negative or non-finite inputs and
/// factors are treated as 0.
///
/// Identity factors reproduce `raw` only when its stated calories already
/// match its grams. Otherwise the result carries the grams' calories and
/// `delta_percent.calories` shows the gap.
pub fn apply(raw: &MacroNutrients, weight: f64, retention: &RetentionFactors) -> CookingAdjustment {
    let raw = raw.sanitized();
    let weight = non_negative(weight);

    let mut adjusted = MacroNutrients {
        calories: 0.0,
        carbs: raw.carbs * non_negative(retention.carbs_factor),
        protein: raw.protein * non_negative(retention.protein_factor),
        fat: raw.fat * non_negative(retention.fat_factor),
        unit: raw.unit.clone(),
    };
    adjusted.calories = calories_from_macros(&adjusted);

    let adjusted_weight = weight * non_negative(retention.weight_factor);
    let expected_calories = raw.calories * non_negative(retention.calorie_factor);

    let delta_percent = AdjustmentReport {
        calories: percent_change(raw.calories, adjusted.calories),
        carbs: percent_change(raw.carbs, adjusted.carbs),
        protein: percent_change(raw.protein, adjusted.protein),
        fat: percent_change(raw.fat, adjusted.fat),
        weight: percent_change(weight, adjusted_weight),
    };

    debug!(
        raw_calories = raw.calories,
        adjusted_calories = adjusted.calories,
        expected_calories,
        adjusted_weight,
        "applied retention factors"
    );

    CookingAdjustment {
        adjusted,
        adjusted_weight,
        delta_percent,
        expected_calories,
    }
}
