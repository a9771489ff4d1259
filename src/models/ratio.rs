use serde::{Deserialize, Serialize};

use crate::models::macros::{MacroKind, non_negative};

/// Split used before the user picks anything.
pub const DEFAULT_RATIO: RatioTriple = RatioTriple::new(30.0, 40.0, 30.0);

/// Percentage split of total calories across protein, carbs and fat.
///
/// Every value produced by the ratio engine sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioTriple {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for RatioTriple {
    fn default() -> Self {
        DEFAULT_RATIO
    }
}

impl RatioTriple {
    pub const fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Rescale arbitrary non-negative weights to whole percentages summing to 100.
    ///
    /// Rounding drift lands on carbs unless that would push carbs below zero,
    /// in which case the largest share absorbs it. All-zero input yields the
    /// default split.
    pub fn normalized(protein: f64, carbs: f64, fat: f64) -> Self {
        let (protein, carbs, fat) = (non_negative(protein), non_negative(carbs), non_negative(fat));
        let total = protein + carbs + fat;
        if total <= 0.0 {
            return Self::default();
        }

        let mut ratio = Self {
            protein: (protein / total * 100.0).round(),
            carbs: (carbs / total * 100.0).round(),
            fat: (fat / total * 100.0).round(),
        };

        let diff = 100.0 - ratio.sum();
        if diff != 0.0 {
            let target = if ratio.carbs + diff >= 0.0 {
                MacroKind::Carbs
            } else {
                ratio.largest()
            };
            ratio.set(target, ratio.get(target) + diff);
        }
        ratio
    }

    #[inline]
    pub fn get(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }

    #[inline]
    pub fn set(&mut self, kind: MacroKind, value: f64) {
        match kind {
            MacroKind::Protein => self.protein = value,
            MacroKind::Carbs => self.carbs = value,
            MacroKind::Fat => self.fat = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Whether the triple sums to exactly 100 with no negative axis.
    pub fn is_complete(&self) -> bool {
        self.sum() == 100.0 && MacroKind::ALL.iter().all(|k| self.get(*k) >= 0.0)
    }

    /// Axis holding the largest share (first wins on ties).
    pub fn largest(&self) -> MacroKind {
        MacroKind::ALL
            .into_iter()
            .fold(MacroKind::Protein, |best, k| {
                if self.get(k) > self.get(best) { k } else { best }
            })
    }
}

/// Inclusive slider range for one ratio axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// A named ratio the user can apply in one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioPreset {
    pub name: &'static str,
    pub ratio: RatioTriple,
}
