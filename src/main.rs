use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use macro_balance_rs::cli::{Cli, Command, MacroArgs, RatioArgs};
use macro_balance_rs::engine::{
    EngineConfig, RATIO_PRESETS, apply_cooking, calorie_shares, calories_from_macros, evaluate_with,
    macros_from_calories_and_ratio, meal_totals, ratio_of, scale_to_portion, set_axis,
    set_axis_within_bounds,
};
use macro_balance_rs::error::Result;
use macro_balance_rs::interface::{
    display_balance, display_cooking, display_macros, display_presets, display_ratio,
    prompt_yes_no, resolve_method, resolve_preset, run_adjust_session,
};
use macro_balance_rs::logging::init_logging;
use macro_balance_rs::models::{MacroKind, MacroNutrients, RatioTriple};
use macro_balance_rs::state::{
    AdjusterSession, load_config, load_retention_table, load_seed, save_seed,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    let json = cli.json;

    match cli.command {
        Command::Calories(args) => cmd_calories(&args, &config, json),
        Command::Macros {
            calories,
            ratio,
            unit,
        } => cmd_macros(calories, &ratio, &unit, &config, json),
        Command::Ratio {
            ratio,
            axis,
            value,
            bounded,
        } => cmd_ratio(&ratio, axis.into(), value, bounded, json),
        Command::Cook {
            macros,
            weight,
            table,
            method,
        } => cmd_cook(&macros, weight, &table, &method, &config, json),
        Command::Portion {
            macros,
            per,
            target,
        } => cmd_portion(&macros, per, target, &config, json),
        Command::Totals { seeds } => cmd_totals(&seeds, &config, json),
        Command::Balance(args) => cmd_balance(&args, &config, json),
        Command::Presets => cmd_presets(json),
        Command::Adjust { macros, output } => cmd_adjust(&macros, output, config),
    }
}

/// Build macros from a seed file or the individual flags.
///
/// Missing or zero calories are recomputed from the grams.
fn macros_from_args(args: &MacroArgs) -> Result<MacroNutrients> {
    let macros = match &args.seed {
        Some(path) => {
            info!(path = %path.display(), "loading macro seed");
            load_seed(path)?
        }
        None => MacroNutrients::new(args.calories, args.carbs, args.protein, args.fat)
            .with_unit(args.unit.clone()),
    };
    Ok(macros.sanitized().with_calories_filled())
}

/// Resolve a preset or normalize the explicit percentages.
fn ratio_from_args(args: &RatioArgs) -> Result<RatioTriple> {
    if let Some(name) = &args.preset {
        return Ok(resolve_preset(name)?.ratio);
    }

    let given = RatioTriple::new(args.protein_pct, args.carbs_pct, args.fat_pct);
    let ratio = RatioTriple::normalized(given.protein, given.carbs, given.fat);
    if ratio != given {
        warn!(?given, ?ratio, "ratio did not sum to 100, normalized");
    }
    Ok(ratio)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Compute calories from grams.
fn cmd_calories(args: &MacroArgs, config: &EngineConfig, json: bool) -> Result<()> {
    let input = macros_from_args(args)?;
    let calories = calories_from_macros(&input);
    let ratio = ratio_of(&input);
    let derived = MacroNutrients {
        calories,
        ..input.clone()
    };

    if json {
        return print_json(&json!({
            "calories": calories,
            "ratio": ratio,
            "input_drift": input.calorie_drift(),
        }));
    }

    display_macros(&derived, config.drift_tolerance);
    match ratio {
        Some(ratio) => display_ratio(&ratio),
        None => println!("  No calories, ratio undefined."),
    }
    if input.calories > 0.0 && !input.is_consistent(config.drift_tolerance) {
        println!(
            "  Stated calories were {:.0} kcal ({:.1}% off).",
            input.calories,
            input.calorie_drift().percent()
        );
    }
    Ok(())
}

/// Derive grams from calories and a ratio.
fn cmd_macros(
    calories: f64,
    ratio: &RatioArgs,
    unit: &str,
    config: &EngineConfig,
    json: bool,
) -> Result<()> {
    let ratio = ratio_from_args(ratio)?;
    let macros = macros_from_calories_and_ratio(calories, &ratio, unit);

    if json {
        return print_json(&json!({ "macros": macros, "ratio": ratio }));
    }

    display_macros(&macros, config.drift_tolerance);
    display_ratio(&ratio);
    Ok(())
}

/// Move one axis of a ratio.
fn cmd_ratio(
    ratio: &RatioArgs,
    axis: MacroKind,
    value: f64,
    bounded: bool,
    json: bool,
) -> Result<()> {
    let current = ratio_from_args(ratio)?;
    let next = if bounded {
        set_axis_within_bounds(&current, axis, value)
    } else {
        set_axis(&current, axis, value)
    };

    if json {
        return print_json(&json!({ "before": current, "after": next }));
    }

    println!();
    println!("Before:");
    display_ratio(&current);
    println!("After setting {} to {:.0}%:", axis, next.get(axis));
    display_ratio(&next);
    println!();
    Ok(())
}

/// Apply a cooking method from a retention table.
fn cmd_cook(
    args: &MacroArgs,
    weight: f64,
    table_path: &Path,
    method: &str,
    config: &EngineConfig,
    json: bool,
) -> Result<()> {
    let raw = macros_from_args(args)?;
    let table = load_retention_table(table_path)?;
    info!(methods = table.len(), "retention table loaded");

    let (method, factors) = resolve_method(&table, method)?;
    let result = apply_cooking(&raw, weight, &factors);

    if json {
        return print_json(&json!({
            "method": method,
            "result": result,
            "normalized": result.normalized_per(config.standard_weight),
            "retention_drift": result.retention_drift(),
        }));
    }

    display_cooking(&method, &raw, weight, &result, config);
    Ok(())
}

/// Scale macros from a reference quantity to a portion.
fn cmd_portion(
    args: &MacroArgs,
    per: f64,
    target: f64,
    config: &EngineConfig,
    json: bool,
) -> Result<()> {
    let macros = macros_from_args(args)?;
    let portion = scale_to_portion(&macros, per, target);

    if json {
        return print_json(&portion);
    }

    println!("Portion of {} {} (values stated per {} {})", target, macros.unit, per, macros.unit);
    display_macros(&portion, config.drift_tolerance);
    Ok(())
}

/// Sum ingredient seeds into meal totals.
fn cmd_totals(seeds: &[PathBuf], config: &EngineConfig, json: bool) -> Result<()> {
    let ingredients = seeds
        .iter()
        .map(|path| load_seed(path).map(|m| m.sanitized().with_calories_filled()))
        .collect::<Result<Vec<_>>>()?;
    info!(count = ingredients.len(), "ingredients loaded");
    let totals = meal_totals(&ingredients);

    if json {
        return print_json(&totals);
    }

    display_macros(&totals, config.drift_tolerance);
    if let Some(ratio) = ratio_of(&totals) {
        display_ratio(&ratio);
    }
    Ok(())
}

/// Evaluate calorie shares against the bands.
fn cmd_balance(args: &MacroArgs, config: &EngineConfig, json: bool) -> Result<()> {
    let macros = macros_from_args(args)?;
    let balance = evaluate_with(&macros, &config.bands);

    if json {
        return print_json(&json!({
            "balance": balance,
            "shares": calorie_shares(&macros),
        }));
    }

    display_balance(&macros, &config.bands, &balance);
    Ok(())
}

/// List ratio presets.
fn cmd_presets(json: bool) -> Result<()> {
    if json {
        let presets: Vec<_> = RATIO_PRESETS
            .iter()
            .map(|p| json!({ "name": p.name, "ratio": p.ratio }))
            .collect();
        return print_json(&presets);
    }

    display_presets();
    Ok(())
}

/// Interactive adjustment of a stored meal or ad hoc macros.
fn cmd_adjust(
    args: &MacroArgs,
    output: Option<PathBuf>,
    config: EngineConfig,
) -> Result<()> {
    let seed = macros_from_args(args)?;
    let mut session = AdjusterSession::new(seed, config);

    run_adjust_session(&mut session)?;

    if !session.is_modified() {
        println!("No changes.");
        return Ok(());
    }

    println!("Applied {} edits.", session.edit_count());

    let target = output.or_else(|| args.seed.clone());
    let macros = session.into_macros();
    match target {
        Some(path) => {
            if prompt_yes_no(&format!("Save to {}?", path.display()), true)? {
                save_seed(&path, &macros)?;
                println!("Saved.");
            }
        }
        None => print_json(&macros)?,
    }

    Ok(())
}
