use crate::engine::balance::{MacroBalance, calorie_shares};
use crate::engine::config::{BalanceBands, EngineConfig};
use crate::engine::constants::{DELTA_DISPLAY_THRESHOLD, RATIO_PRESETS};
use crate::engine::cooking::CookingAdjustment;
use crate::engine::edit::MacroSnapshot;
use crate::models::{MacroKind, MacroNutrients, RatioTriple};

/// Width of the ratio bar in characters.
const BAR_WIDTH: usize = 40;

/// Badge text for a percentage change, e.g. `+12%`. Empty below the threshold.
pub fn format_delta(percent: f64) -> String {
    if percent.abs() < DELTA_DISPLAY_THRESHOLD {
        return String::new();
    }
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{}{:.0}%", sign, percent)
}

/// Proportional text bar, one letter per macro (P, C, F).
pub fn ratio_bar(ratio: &RatioTriple) -> String {
    let width = |pct: f64| ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let protein = width(ratio.protein);
    let carbs = width(ratio.carbs);
    let fat = BAR_WIDTH.saturating_sub(protein + carbs);
    format!("[{}{}{}]", "P".repeat(protein), "C".repeat(carbs), "F".repeat(fat))
}

/// Display macros with a warning when calories and grams disagree.
pub fn display_macros(m: &MacroNutrients, tolerance: f64) {
    println!();
    println!("=== Macros ===");
    println!("  Calories: {:>8.0} kcal", m.calories);
    for kind in MacroKind::ALL {
        println!("  {:<8}: {:>8.1} {}", capitalize(kind.name()), m.grams(kind), m.unit);
    }

    let drift = m.calorie_drift();
    if !drift.within(tolerance) {
        println!(
            "  Warning: grams imply {:.0} kcal ({:.1}% off the stated {:.0} kcal)",
            drift.computed,
            drift.percent(),
            drift.stated
        );
    }
    println!();
}

/// Display a ratio triple with its bar.
pub fn display_ratio(ratio: &RatioTriple) {
    println!(
        "  Ratio: protein {:.0}% | carbs {:.0}% | fat {:.0}%",
        ratio.protein, ratio.carbs, ratio.fat
    );
    println!("  {}", ratio_bar(ratio));
}

/// Display per-macro verdicts against the bands.
pub fn display_balance(m: &MacroNutrients, bands: &BalanceBands, balance: &MacroBalance) {
    println!();
    println!("=== Balance ===");

    let Some(shares) = calorie_shares(m) else {
        println!("  No calories to evaluate.");
        println!();
        return;
    };

    for kind in MacroKind::ALL {
        let band = bands.band(kind);
        let verdict = if balance.get(kind) { "ok" } else { "out of range" };
        println!(
            "  {:<8} {:>5.1}%  (recommended {:.0}-{:.0}%)  {}",
            capitalize(kind.name()),
            shares.get(kind),
            band.min,
            band.max,
            verdict
        );
    }
    println!();
}

/// Display a cooking adjustment with signed deltas.
pub fn display_cooking(
    method: &str,
    raw: &MacroNutrients,
    weight: f64,
    result: &CookingAdjustment,
    config: &EngineConfig,
) {
    let adjusted = &result.adjusted;
    let report = &result.delta_percent;

    println!();
    println!("=== Cooking: {} ===", method);
    println!("  {:<9} {:>9} {:>9}  {}", "", "raw", "cooked", "change");

    let rows = [
        ("Weight", weight, result.adjusted_weight, report.weight),
        ("Calories", raw.calories, adjusted.calories, report.calories),
        ("Carbs", raw.carbs, adjusted.carbs, report.carbs),
        ("Protein", raw.protein, adjusted.protein, report.protein),
        ("Fat", raw.fat, adjusted.fat, report.fat),
    ];
    for (label, before, after, delta) in rows {
        println!("  {:<9} {:>9.1} {:>9.1}  {}", label, before, after, format_delta(delta));
    }

    let per = result.normalized_per(config.standard_weight);
    println!();
    println!(
        "  Per {:.0} {} cooked: {:.0} kcal, C:{:.1} P:{:.1} F:{:.1}",
        config.standard_weight, adjusted.unit, per.calories, per.carbs, per.protein, per.fat
    );

    let drift = result.retention_drift();
    if !drift.within(config.drift_tolerance) {
        println!(
            "  Note: retention table expects {:.0} kcal, grams give {:.0} kcal ({:.1}% apart)",
            drift.stated,
            drift.computed,
            drift.percent()
        );
    }
    println!();
}

/// Display the full state of an adjustment session.
pub fn display_snapshot(snapshot: &MacroSnapshot, config: &EngineConfig) {
    display_macros(&snapshot.macros, config.drift_tolerance);
    display_ratio(&snapshot.ratio);
}

/// List the named presets.
pub fn display_presets() {
    println!();
    println!("=== Ratio presets ===");
    let width = RATIO_PRESETS.iter().map(|p| p.name.len()).max().unwrap_or(10);
    for preset in &RATIO_PRESETS {
        println!(
            "  {:<width$}  P {:>2.0}% | C {:>2.0}% | F {:>2.0}%",
            preset.name,
            preset.ratio.protein,
            preset.ratio.carbs,
            preset.ratio.fat,
            width = width
        );
    }
    println!();
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
