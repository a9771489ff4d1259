use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    CARBS_BAND, DEFAULT_DRIFT_TOLERANCE, FAT_BAND, PROTEIN_BAND, STANDARD_WEIGHT,
};
use crate::models::MacroKind;

/// Inclusive percentage range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<(f64, f64)> for Band {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

/// Recommended calorie-share bands per macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceBands {
    pub protein: Band,
    pub carbs: Band,
    pub fat: Band,
}

impl Default for BalanceBands {
    fn default() -> Self {
        Self {
            protein: PROTEIN_BAND.into(),
            carbs: CARBS_BAND.into(),
            fat: FAT_BAND.into(),
        }
    }
}

impl BalanceBands {
    pub fn band(&self, kind: MacroKind) -> Band {
        match kind {
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }
}

/// Tunable engine settings, loadable from JSON.
///
/// Missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Relative calorie drift tolerated before a snapshot is flagged.
    pub drift_tolerance: f64,
    /// Reference weight (g) for per-portion normalization.
    pub standard_weight: f64,
    pub bands: BalanceBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drift_tolerance: DEFAULT_DRIFT_TOLERANCE,
            standard_weight: STANDARD_WEIGHT,
            bands: BalanceBands::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_is_inclusive() {
        let band = Band::new(15.0, 35.0);
        assert!(band.contains(15.0));
        assert!(band.contains(35.0));
        assert!(!band.contains(35.01));
        assert!(!band.contains(14.99));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"drift_tolerance": 0.1}"#).unwrap();
        assert_eq!(config.drift_tolerance, 0.1);
        assert_eq!(config.standard_weight, STANDARD_WEIGHT);
        assert_eq!(config.bands, BalanceBands::default());
    }
}
