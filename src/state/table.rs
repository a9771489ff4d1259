use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{MacroError, Result};
use crate::models::RetentionFactors;

/// Minimum Jaro-Winkler score for a fuzzy method match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Retention factors per cooking method, supplied by an external data source.
///
/// Lookups are case-insensitive; display names keep their original casing.
#[derive(Debug, Clone, Default)]
pub struct RetentionTable {
    entries: HashMap<String, (String, RetentionFactors)>,
}

impl RetentionTable {
    /// Build from (method, factors) pairs. Later duplicates win.
    pub fn new(entries: Vec<(String, RetentionFactors)>) -> Self {
        let mut map = HashMap::new();
        for (name, factors) in entries {
            map.insert(name.to_lowercase(), (name, factors));
        }
        Self { entries: map }
    }

    pub fn get(&self, method: &str) -> Option<&RetentionFactors> {
        self.entries
            .get(&method.trim().to_lowercase())
            .map(|(_, factors)| factors)
    }

    /// Look up a method, failing with `UnknownCookingMethod`.
    pub fn require(&self, method: &str) -> Result<&RetentionFactors> {
        self.get(method)
            .ok_or_else(|| MacroError::UnknownCookingMethod(method.to_string()))
    }

    /// Method names, sorted for stable display.
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable_by_key(|n| n.to_lowercase());
        names
    }

    /// Methods whose names resemble `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        let mut candidates: Vec<(&str, f64)> = self
            .entries
            .iter()
            .map(|(key, (name, _))| (name.as_str(), jaro_winkler(key, &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(name, _)| name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
