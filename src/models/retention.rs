use serde::{Deserialize, Serialize};

use crate::error::{MacroError, Result};

/// Multipliers describing how a cooking method changes weight and nutrients.
///
/// Supplied by the caller; the engine does not own any per-method table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetentionFactors {
    pub weight_factor: f64,
    pub calorie_factor: f64,
    pub carbs_factor: f64,
    pub protein_factor: f64,
    pub fat_factor: f64,
}

impl Default for RetentionFactors {
    fn default() -> Self {
        Self::identity()
    }
}

impl RetentionFactors {
    /// No change at all (raw food).
    pub const fn identity() -> Self {
        Self {
            weight_factor: 1.0,
            calorie_factor: 1.0,
            carbs_factor: 1.0,
            protein_factor: 1.0,
            fat_factor: 1.0,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("weight_factor", self.weight_factor),
            ("calorie_factor", self.calorie_factor),
            ("carbs_factor", self.carbs_factor),
            ("protein_factor", self.protein_factor),
            ("fat_factor", self.fat_factor),
        ]
    }

    /// Reject non-finite or negative factors.
    ///
    /// Meant for data sources loading a retention table, before anything
    /// reaches the engine.
    pub fn validate(&self, method: &str) -> Result<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(MacroError::InvalidRetention {
                    method: method.to_string(),
                    reason: format!("{} must be a finite, non-negative number (got {})", name, value),
                });
            }
        }
        Ok(())
    }
}

/// Percentage change per field between two snapshots, e.g. `+12.0` for "+12%".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AdjustmentReport {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub weight: f64,
}

impl AdjustmentReport {
    pub fn is_zero(&self) -> bool {
        [self.calories, self.carbs, self.protein, self.fat, self.weight]
            .iter()
            .all(|v| *v == 0.0)
    }
}

/// Signed percentage change from `before` to `after`; 0 when `before` is 0.
#[inline]
pub fn percent_change(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        0.0
    } else {
        (after - before) / before * 100.0
    }
}
