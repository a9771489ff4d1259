use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::engine::config::EngineConfig;
use crate::error::Result;
use crate::models::{MacroNutrients, RetentionFactors};
use crate::state::table::RetentionTable;

/// Load a macro seed (a stored meal or ingredient) from a JSON file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<MacroNutrients> {
    let content = fs::read_to_string(path)?;
    let macros: MacroNutrients = serde_json::from_str(&content)?;
    Ok(macros)
}

/// Save macros as pretty-printed JSON.
pub fn save_seed<P: AsRef<Path>>(path: P, macros: &MacroNutrients) -> Result<()> {
    let json = serde_json::to_string_pretty(macros)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load engine settings from a JSON file. Missing fields use defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let content = fs::read_to_string(path)?;
    let config: EngineConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[derive(Debug, Deserialize)]
struct RetentionRow {
    method: String,
    weight_factor: f64,
    calorie_factor: f64,
    carbs_factor: f64,
    protein_factor: f64,
    fat_factor: f64,
}

/// Load a retention table from CSV.
///
/// Expected header:
/// `method,weight_factor,calorie_factor,carbs_factor,protein_factor,fat_factor`.
/// Every row is validated before it is accepted.
pub fn load_retention_table<P: AsRef<Path>>(path: P) -> Result<RetentionTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let row: RetentionRow = row?;
        let factors = RetentionFactors {
            weight_factor: row.weight_factor,
            calorie_factor: row.calorie_factor,
            carbs_factor: row.carbs_factor,
            protein_factor: row.protein_factor,
            fat_factor: row.fat_factor,
        };
        factors.validate(&row.method)?;
        entries.push((row.method, factors));
    }

    debug!(methods = entries.len(), "loaded retention table");
    Ok(RetentionTable::new(entries))
}
