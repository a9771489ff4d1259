use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::MacroKind;

/// macro_balance: keep calories, macro grams and macro percentages consistent.
#[derive(Parser, Debug)]
#[command(name = "macro_balance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Engine settings JSON (tolerance, bands, standard weight).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Macro quantities, given directly or loaded from a seed file.
#[derive(Args, Debug, Clone)]
pub struct MacroArgs {
    /// JSON file holding a stored meal or ingredient.
    #[arg(long, conflicts_with_all = ["calories", "carbs", "protein", "fat"])]
    pub seed: Option<PathBuf>,

    /// Calories (kcal).
    #[arg(long, default_value = "0")]
    pub calories: f64,

    /// Carbohydrates (g).
    #[arg(long, default_value = "0")]
    pub carbs: f64,

    /// Protein (g).
    #[arg(long, default_value = "0")]
    pub protein: f64,

    /// Fat (g).
    #[arg(long, default_value = "0")]
    pub fat: f64,

    /// Display unit tag carried through unchanged.
    #[arg(long, default_value = "g")]
    pub unit: String,
}

/// A protein/carbs/fat split, either explicit or a named preset.
#[derive(Args, Debug, Clone)]
pub struct RatioArgs {
    /// Named preset (e.g. "Balanced", "Ketogenic").
    #[arg(long, conflicts_with_all = ["protein_pct", "carbs_pct", "fat_pct"])]
    pub preset: Option<String>,

    /// Protein share (%).
    #[arg(long = "protein-pct", default_value = "30")]
    pub protein_pct: f64,

    /// Carbs share (%).
    #[arg(long = "carbs-pct", default_value = "40")]
    pub carbs_pct: f64,

    /// Fat share (%).
    #[arg(long = "fat-pct", default_value = "30")]
    pub fat_pct: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Protein,
    Carbs,
    Fat,
}

impl From<Axis> for MacroKind {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Protein => MacroKind::Protein,
            Axis::Carbs => MacroKind::Carbs,
            Axis::Fat => MacroKind::Fat,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute calories from macro grams.
    Calories(MacroArgs),

    /// Derive macro grams from a calorie total and a ratio.
    Macros {
        /// Calorie total (kcal).
        #[arg(long)]
        calories: f64,

        #[command(flatten)]
        ratio: RatioArgs,

        /// Display unit tag.
        #[arg(long, default_value = "g")]
        unit: String,
    },

    /// Move one ratio axis and redistribute the others.
    Ratio {
        #[command(flatten)]
        ratio: RatioArgs,

        /// Axis to change.
        #[arg(long, value_enum)]
        axis: Axis,

        /// New percentage for the axis.
        #[arg(long)]
        value: f64,

        /// Clamp to the axis slider range before redistributing.
        #[arg(long)]
        bounded: bool,
    },

    /// Apply a cooking method's retention factors.
    Cook {
        #[command(flatten)]
        macros: MacroArgs,

        /// Raw weight (g).
        #[arg(long, default_value = "100")]
        weight: f64,

        /// Retention table CSV.
        #[arg(long)]
        table: PathBuf,

        /// Cooking method name from the table.
        #[arg(long)]
        method: String,
    },

    /// Scale macros stated for a reference quantity to a portion.
    Portion {
        #[command(flatten)]
        macros: MacroArgs,

        /// Quantity the macros are stated for (g or ml).
        #[arg(long, default_value = "100")]
        per: f64,

        /// Portion size (g or ml).
        #[arg(long)]
        target: f64,
    },

    /// Sum the macros of several ingredient seed files.
    Totals {
        /// Ingredient JSON files.
        #[arg(required = true)]
        seeds: Vec<PathBuf>,
    },

    /// Check macro calorie shares against the recommended bands.
    Balance(MacroArgs),

    /// List the named ratio presets.
    Presets,

    /// Interactively adjust macros, calories and ratio.
    Adjust {
        #[command(flatten)]
        macros: MacroArgs,

        /// Where to save the result (defaults to the seed file).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
