use tracing::{debug, trace};

use crate::engine::constants::{
    CARBS_PERCENT_BOUNDS, FAT_PERCENT_BOUNDS, PROTEIN_PERCENT_BOUNDS, RATIO_TOTAL,
};
use crate::models::{AxisBounds, MacroKind, RatioTriple};

/// Slider range for one axis.
pub fn axis_bounds(axis: MacroKind) -> AxisBounds {
    match axis {
        MacroKind::Protein => PROTEIN_PERCENT_BOUNDS,
        MacroKind::Carbs => CARBS_PERCENT_BOUNDS,
        MacroKind::Fat => FAT_PERCENT_BOUNDS,
    }
}

/// Clamp to `[0, 100]` and snap to a whole percent. Non-finite input is 0.
fn clamp_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, RATIO_TOTAL).round()
}

/// Set one axis and redistribute the rest proportionally.
///
/// The two other axes keep their relative proportions and share whatever
/// the edited axis leaves over. Rounding drift goes to the first non-edited
/// axis (protein, carbs, fat order), never to the edited one. If the edited
/// axis previously held everything, or now takes everything, the others are
/// zeroed before drift correction.
///
/// `new_value` is clamped to `[0, 100]` and snapped to a whole percent, so
/// a fractional value such as 50.4 is applied as 50. For any triple summing
/// to 100 the result also sums to exactly 100.
pub fn set_axis(current: &RatioTriple, axis: MacroKind, new_value: f64) -> RatioTriple {
    let value = clamp_percent(new_value);
    let remaining = RATIO_TOTAL - value;
    let others_sum = RATIO_TOTAL - current.get(axis);
    let others = axis.others();

    let mut next = *current;
    next.set(axis, value);

    if others_sum <= 0.0 || remaining <= 0.0 {
        debug!(%axis, value, "degenerate ratio edit, zeroing other axes");
        for other in others {
            next.set(other, 0.0);
        }
    } else {
        for other in others {
            let proportion = current.get(other) / others_sum;
            next.set(other, (remaining * proportion).round());
        }
    }

    let diff = RATIO_TOTAL - next.sum();
    if diff != 0.0 {
        let first = others[0];
        trace!(%first, diff, "correcting ratio rounding drift");
        next.set(first, next.get(first) + diff);
    }

    next
}

/// Like [`set_axis`], but first clamps the value to the axis slider range.
pub fn set_axis_within_bounds(current: &RatioTriple, axis: MacroKind, value: f64) -> RatioTriple {
    let bounded = if value.is_finite() {
        axis_bounds(axis).clamp(value)
    } else {
        axis_bounds(axis).min
    };
    set_axis(current, axis, bounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(p: f64, c: f64, f: f64) -> RatioTriple {
        RatioTriple::new(p, c, f)
    }

    #[test]
    fn test_set_protein_redistributes() {
        // carbs 50 * 40/70 = 28.57 -> 29, fat 50 * 30/70 = 21.43 -> 21
        let next = set_axis(&triple(30.0, 40.0, 30.0), MacroKind::Protein, 50.0);
        assert_eq!(next, triple(50.0, 29.0, 21.0));
    }

    #[test]
    fn test_drift_goes_to_first_other_axis() {
        // others 50 / 50 of 100 -> 33.5 each -> 34 + 34 + 33 = 101
        let next = set_axis(&triple(0.0, 50.0, 50.0), MacroKind::Protein, 33.0);
        assert_eq!(next, triple(33.0, 33.0, 34.0));
        assert_eq!(next.sum(), 100.0);
    }

    #[test]
    fn test_drift_skips_edited_axis() {
        // editing carbs: protein is the first non-edited axis
        let next = set_axis(&triple(50.0, 0.0, 50.0), MacroKind::Carbs, 33.0);
        assert_eq!(next, triple(33.0, 33.0, 34.0));
    }

    #[test]
    fn test_axis_to_100_zeroes_others() {
        let next = set_axis(&triple(30.0, 40.0, 30.0), MacroKind::Fat, 100.0);
        assert_eq!(next, triple(0.0, 0.0, 100.0));
    }

    #[test]
    fn test_leaving_full_axis_refills_first_other() {
        // nothing to redistribute proportionally, so the first other takes it all
        let next = set_axis(&triple(100.0, 0.0, 0.0), MacroKind::Protein, 40.0);
        assert_eq!(next, triple(40.0, 60.0, 0.0));
    }

    #[test]
    fn test_value_is_clamped_and_rounded() {
        let current = triple(30.0, 40.0, 30.0);
        assert_eq!(set_axis(&current, MacroKind::Protein, 150.0), triple(100.0, 0.0, 0.0));
        assert_eq!(set_axis(&current, MacroKind::Protein, -20.0).protein, 0.0);
        assert_eq!(set_axis(&current, MacroKind::Protein, f64::NAN).protein, 0.0);
        assert_eq!(set_axis(&current, MacroKind::Protein, 49.6).protein, 50.0);
    }

    #[test]
    fn test_fractional_value_is_snapped() {
        let next = set_axis(&triple(30.0, 40.0, 30.0), MacroKind::Protein, 50.4);
        assert_eq!(next, triple(50.0, 29.0, 21.0));
    }

    #[test]
    fn test_unchanged_value_is_stable() {
        let current = triple(25.0, 55.0, 20.0);
        assert_eq!(set_axis(&current, MacroKind::Carbs, 55.0), current);
    }

    #[test]
    fn test_within_bounds() {
        let current = triple(30.0, 40.0, 30.0);
        assert_eq!(set_axis_within_bounds(&current, MacroKind::Protein, 80.0).protein, 60.0);
        assert_eq!(set_axis_within_bounds(&current, MacroKind::Carbs, 1.0).carbs, 5.0);
        assert_eq!(set_axis_within_bounds(&current, MacroKind::Fat, 90.0).fat, 90.0);
        assert_eq!(set_axis_within_bounds(&current, MacroKind::Protein, f64::NAN).protein, 10.0);
    }
}
