use proptest::prelude::*;

use macro_balance_rs::engine::{RATIO_PRESETS, set_axis, set_axis_within_bounds};
use macro_balance_rs::models::{MacroKind, RatioTriple};

/// Whole-percent triples summing to 100.
fn valid_ratio() -> impl Strategy<Value = RatioTriple> {
    (0u8..=100)
        .prop_flat_map(|p| (Just(p), 0u8..=(100 - p)))
        .prop_map(|(p, c)| RatioTriple::new(p as f64, c as f64, (100 - p - c) as f64))
}

fn any_axis() -> impl Strategy<Value = MacroKind> {
    prop_oneof![
        Just(MacroKind::Protein),
        Just(MacroKind::Carbs),
        Just(MacroKind::Fat),
    ]
}

#[test]
fn test_protein_to_50_from_default() {
    let next = set_axis(&RatioTriple::new(30.0, 40.0, 30.0), MacroKind::Protein, 50.0);
    assert_eq!(next, RatioTriple::new(50.0, 29.0, 21.0));
    assert_eq!(next.sum(), 100.0);
}

#[test]
fn test_fat_to_zero_gives_everything_to_others() {
    let next = set_axis(&RatioTriple::new(25.0, 5.0, 70.0), MacroKind::Fat, 0.0);
    // protein 100 * 25/30 = 83.3 -> 83, carbs 100 * 5/30 = 16.7 -> 17
    assert_eq!(next, RatioTriple::new(83.0, 17.0, 0.0));
}

#[test]
fn test_sequential_edits_stay_complete() {
    let mut ratio = RatioTriple::default();
    for (axis, value) in [
        (MacroKind::Protein, 45.0),
        (MacroKind::Carbs, 12.0),
        (MacroKind::Fat, 63.0),
        (MacroKind::Protein, 10.0),
        (MacroKind::Carbs, 70.0),
    ] {
        ratio = set_axis(&ratio, axis, value);
        assert!(ratio.is_complete(), "{:?} after {} = {}", ratio, axis, value);
        assert_eq!(ratio.get(axis), value);
    }
}

#[test]
fn test_presets_survive_bounded_noop_edit() {
    for preset in &RATIO_PRESETS {
        let next = set_axis_within_bounds(&preset.ratio, MacroKind::Fat, preset.ratio.fat);
        assert_eq!(next, preset.ratio, "{}", preset.name);
    }
}

proptest! {
    #[test]
    fn set_axis_always_sums_to_100(
        current in valid_ratio(),
        axis in any_axis(),
        value in -50.0f64..150.0,
    ) {
        let next = set_axis(&current, axis, value);
        prop_assert_eq!(next.sum(), 100.0);
        prop_assert!(next.is_complete());
    }

    #[test]
    fn set_axis_keeps_edited_value(
        current in valid_ratio(),
        axis in any_axis(),
        value in -50.0f64..150.0,
    ) {
        let next = set_axis(&current, axis, value);
        prop_assert_eq!(next.get(axis), value.clamp(0.0, 100.0).round());
    }

    #[test]
    fn bounded_edit_stays_within_slider_range(
        current in valid_ratio(),
        value in -50.0f64..150.0,
    ) {
        let protein = set_axis_within_bounds(&current, MacroKind::Protein, value);
        prop_assert!((10.0..=60.0).contains(&protein.protein));
        prop_assert!(protein.is_complete());

        let carbs = set_axis_within_bounds(&current, MacroKind::Carbs, value);
        prop_assert!((5.0..=70.0).contains(&carbs.carbs));
        prop_assert!(carbs.is_complete());
    }
}
