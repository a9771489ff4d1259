use tracing::trace;

use crate::models::{MacroNutrients, non_negative};

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scale macros given for `standard_qty` to `target_qty` of the same food.
///
/// Calories are rounded to whole kcal, grams to one decimal. A non-positive
/// target or standard quantity yields zeros carrying the input unit.
pub fn scale_to_portion(m: &MacroNutrients, standard_qty: f64, target_qty: f64) -> MacroNutrients {
    if !(target_qty > 0.0 && standard_qty > 0.0) || !target_qty.is_finite() {
        return MacroNutrients::zero(m.unit.clone());
    }

    let scale = target_qty / standard_qty;
    trace!(standard_qty, target_qty, scale, "scaling macros to portion");
    MacroNutrients {
        calories: (non_negative(m.calories) * scale).round(),
        carbs: round_tenth(non_negative(m.carbs) * scale),
        protein: round_tenth(non_negative(m.protein) * scale),
        fat: round_tenth(non_negative(m.fat) * scale),
        unit: m.unit.clone(),
    }
}

/// Sum the macros of every ingredient in a meal. Empty input gives zeros.
pub fn meal_totals(ingredients: &[MacroNutrients]) -> MacroNutrients {
    ingredients
        .iter()
        .fold(MacroNutrients::zero("g"), |mut total, m| {
            total.calories += non_negative(m.calories);
            total.carbs += non_negative(m.carbs);
            total.protein += non_negative(m.protein);
            total.fat += non_negative(m.fat);
            total
        })
}
