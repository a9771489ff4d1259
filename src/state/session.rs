use tracing::warn;

use crate::engine::balance::{MacroBalance, evaluate_with};
use crate::engine::config::EngineConfig;
use crate::engine::edit::{Edit, MacroSnapshot, apply_edit};
use crate::models::{CalorieDrift, MacroNutrients, RatioTriple};

/// Caller-owned state for one adjustment interaction.
///
/// The engine itself is stateless; this holds the single current snapshot
/// and re-derives it through [`apply_edit`] on every change.
pub struct AdjusterSession {
    seed: MacroSnapshot,
    current: MacroSnapshot,
    config: EngineConfig,
    edits: usize,
}

impl AdjusterSession {
    /// Start from stored macros, deriving the ratio from their grams.
    pub fn new(seed: MacroNutrients, config: EngineConfig) -> Self {
        Self::from_snapshot(MacroSnapshot::from_macros(seed.sanitized()), config)
    }

    /// Start from macros and an explicit ratio.
    pub fn with_ratio(seed: MacroNutrients, ratio: RatioTriple, config: EngineConfig) -> Self {
        Self::from_snapshot(MacroSnapshot::new(seed.sanitized(), ratio), config)
    }

    fn from_snapshot(seed: MacroSnapshot, config: EngineConfig) -> Self {
        let session = Self {
            current: seed.clone(),
            seed,
            config,
            edits: 0,
        };
        if !session.is_consistent() {
            let drift = session.drift();
            warn!(
                stated = drift.stated,
                computed = drift.computed,
                "seed calories disagree with macro grams by {:.1}%",
                drift.percent()
            );
        }
        session
    }

    /// Apply one edit and return the new snapshot.
    pub fn apply(&mut self, edit: Edit) -> &MacroSnapshot {
        self.current = apply_edit(&self.current, edit);
        self.edits += 1;
        &self.current
    }

    pub fn snapshot(&self) -> &MacroSnapshot {
        &self.current
    }

    pub fn macros(&self) -> &MacroNutrients {
        &self.current.macros
    }

    pub fn ratio(&self) -> &RatioTriple {
        &self.current.ratio
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of edits applied since the seed or last reset.
    pub fn edit_count(&self) -> usize {
        self.edits
    }

    /// Whether any edit changed the snapshot.
    pub fn is_modified(&self) -> bool {
        self.current != self.seed
    }

    /// Discard all edits.
    pub fn reset(&mut self) {
        self.current = self.seed.clone();
        self.edits = 0;
    }

    pub fn balance(&self) -> MacroBalance {
        evaluate_with(&self.current.macros, &self.config.bands)
    }

    pub fn drift(&self) -> CalorieDrift {
        self.current.macros.calorie_drift()
    }

    pub fn is_consistent(&self) -> bool {
        self.drift().within(self.config.drift_tolerance)
    }

    /// Final macros to hand back to the persistence layer.
    pub fn into_macros(self) -> MacroNutrients {
        self.current.macros
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroKind;

    fn sample() -> MacroNutrients {
        MacroNutrients::new(460.0, 40.0, 30.0, 20.0)
    }

    #[test]
    fn test_seed_derives_ratio() {
        let session = AdjusterSession::new(sample(), EngineConfig::default());
        assert_eq!(*session.ratio(), RatioTriple::new(26.0, 35.0, 39.0));
        assert!(!session.is_modified());
    }

    #[test]
    fn test_apply_and_reset() {
        let mut session = AdjusterSession::new(sample(), EngineConfig::default());
        session.apply(Edit::Calories(920.0));
        assert_eq!(session.macros().calories, 920.0);
        assert_eq!(session.edit_count(), 1);
        assert!(session.is_modified());

        session.reset();
        assert_eq!(session.macros(), &sample());
        assert_eq!(session.edit_count(), 0);
    }

    #[test]
    fn test_ratio_edit_stays_consistent() {
        let mut session = AdjusterSession::with_ratio(
            MacroNutrients::new(2000.0, 0.0, 0.0, 0.0),
            RatioTriple::default(),
            EngineConfig::default(),
        );
        assert!(!session.is_consistent());

        session.apply(Edit::Ratio(MacroKind::Carbs, 50.0));
        assert!(session.is_consistent());
        assert!(session.ratio().is_complete());
    }

    #[test]
    fn test_negative_seed_is_sanitized() {
        let session = AdjusterSession::new(
            MacroNutrients::new(-10.0, 10.0, -3.0, 0.0),
            EngineConfig::default(),
        );
        assert_eq!(session.macros().calories, 0.0);
        assert_eq!(session.macros().protein, 0.0);
    }
}
