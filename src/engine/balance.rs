use serde::Serialize;

use crate::engine::config::BalanceBands;
use crate::engine::resolver::caloric_sum;
use crate::models::{MacroKind, MacroNutrients, non_negative};

/// Unrounded calorie share of each macro, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroShares {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroShares {
    pub fn get(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }
}

/// Whether each macro's share falls inside its recommended band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroBalance {
    pub protein: bool,
    pub carbs: bool,
    pub fat: bool,
}

impl MacroBalance {
    pub fn get(&self, kind: MacroKind) -> bool {
        match kind {
            MacroKind::Protein => self.protein,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fat => self.fat,
        }
    }

    pub fn all(&self) -> bool {
        self.protein && self.carbs && self.fat
    }
}

/// Calorie shares, or `None` if the grams carry no calories.
pub fn calorie_shares(m: &MacroNutrients) -> Option<MacroShares> {
    let total = caloric_sum(m);
    if total <= 0.0 {
        return None;
    }
    let share = |k: MacroKind| non_negative(m.grams(k)) * k.calorie_factor() / total * 100.0;
    Some(MacroShares {
        protein: share(MacroKind::Protein),
        carbs: share(MacroKind::Carbs),
        fat: share(MacroKind::Fat),
    })
}

/// Check shares against the default bands.
pub fn evaluate(m: &MacroNutrients) -> MacroBalance {
    evaluate_with(m, &BalanceBands::default())
}

/// Check shares against `bands`. No calories means nothing is balanced.
pub fn evaluate_with(m: &MacroNutrients, bands: &BalanceBands) -> MacroBalance {
    match calorie_shares(m) {
        Some(shares) => MacroBalance {
            protein: bands.protein.contains(shares.protein),
            carbs: bands.carbs.contains(shares.carbs),
            fat: bands.fat.contains(shares.fat),
        },
        None => MacroBalance::default(),
    }
}
