pub mod macros;
pub mod ratio;
pub mod retention;

pub use macros::{
    CARBS_KCAL_PER_GRAM, CalorieDrift, FAT_KCAL_PER_GRAM, MacroKind, MacroNutrients,
    PROTEIN_KCAL_PER_GRAM, caloric_sum, non_negative,
};
pub use ratio::{AxisBounds, RatioPreset, RatioTriple};
pub use retention::{AdjustmentReport, RetentionFactors, percent_change};
