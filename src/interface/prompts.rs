use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::constants::{RATIO_PRESETS, find_preset};
use crate::engine::edit::Edit;
use crate::engine::ratio::axis_bounds;
use crate::error::{MacroError, Result};
use crate::interface::render::display_snapshot;
use crate::models::{MacroKind, RatioPreset, RetentionFactors, non_negative};
use crate::state::{AdjusterSession, RetentionTable};

/// What the user wants to do next in an adjust session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustAction {
    Calories,
    MacroGrams,
    RatioAxis,
    Preset,
    Reset,
    Done,
}

const ACTIONS: [(&str, AdjustAction); 6] = [
    ("Set calories", AdjustAction::Calories),
    ("Set macro grams", AdjustAction::MacroGrams),
    ("Move a ratio slider", AdjustAction::RatioAxis),
    ("Apply a ratio preset", AdjustAction::Preset),
    ("Reset to seed", AdjustAction::Reset),
    ("Done", AdjustAction::Done),
];

/// Parse a numeric field the way the UI does: garbage or negatives become 0.
pub fn parse_amount(input: &str) -> f64 {
    non_negative(input.trim().parse::<f64>().unwrap_or(0.0))
}

/// Prompt for a non-negative number with a default.
pub fn prompt_amount(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    Ok(parse_amount(&input))
}

/// Prompt for the next adjust action.
pub fn prompt_action() -> Result<AdjustAction> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("What do you want to change?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ACTIONS
        .get(selection)
        .map(|(_, action)| *action)
        .unwrap_or(AdjustAction::Done))
}

/// Prompt for which macro to edit.
pub fn prompt_macro_kind() -> Result<MacroKind> {
    let labels: Vec<&str> = MacroKind::ALL.iter().map(|k| k.name()).collect();
    let selection = Select::new()
        .with_prompt("Which macro?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MacroKind::ALL
        .get(selection)
        .copied()
        .unwrap_or(MacroKind::Protein))
}

/// Prompt for one of the named presets.
pub fn prompt_preset() -> Result<&'static RatioPreset> {
    let labels: Vec<String> = RATIO_PRESETS
        .iter()
        .map(|p| {
            format!(
                "{} ({:.0}/{:.0}/{:.0})",
                p.name, p.ratio.protein, p.ratio.carbs, p.ratio.fat
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Which preset?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(&RATIO_PRESETS[selection.min(RATIO_PRESETS.len() - 1)])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a preset name, suggesting the closest one on a miss.
pub fn resolve_preset(name: &str) -> Result<&'static RatioPreset> {
    if let Some(preset) = find_preset(name) {
        return Ok(preset);
    }

    let needle = name.trim().to_lowercase();
    let closest = RATIO_PRESETS
        .iter()
        .map(|p| (p.name, jaro_winkler(&p.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    Err(match closest {
        Some((suggestion, _)) => {
            MacroError::UnknownPreset(format!("{} (did you mean '{}'?)", name, suggestion))
        }
        None => MacroError::UnknownPreset(name.to_string()),
    })
}

/// Resolve a cooking method, asking the user when only a fuzzy match exists.
pub fn resolve_method(table: &RetentionTable, name: &str) -> Result<(String, RetentionFactors)> {
    if let Some(factors) = table.get(name) {
        return Ok((name.trim().to_string(), *factors));
    }

    let candidates = table.suggest(name);
    let chosen = match candidates.as_slice() {
        [] => None,
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only), true)?;
            confirm.then_some(*only)
        }
        many => {
            let mut options: Vec<&str> = many.iter().take(5).copied().collect();
            let shown = options.len();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which method did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            (selection < shown).then(|| options[selection])
        }
    };

    let method = chosen.ok_or_else(|| MacroError::UnknownCookingMethod(name.to_string()))?;
    let factors = table.require(method)?;
    Ok((method.to_string(), *factors))
}

/// Run the interactive adjust loop until the user is done.
///
/// Each step builds exactly one tagged edit and hands it to the session.
pub fn run_adjust_session(session: &mut AdjusterSession) -> Result<()> {
    display_snapshot(session.snapshot(), session.config());

    loop {
        let edit = match prompt_action()? {
            AdjustAction::Calories => {
                let calories = prompt_amount("Calories (kcal)", session.macros().calories)?;
                Edit::Calories(calories)
            }
            AdjustAction::MacroGrams => {
                let kind = prompt_macro_kind()?;
                let grams = prompt_amount(
                    &format!("{} ({})", kind, session.macros().unit),
                    session.macros().grams(kind),
                )?;
                Edit::Macro(kind, grams)
            }
            AdjustAction::RatioAxis => {
                let kind = prompt_macro_kind()?;
                let bounds = axis_bounds(kind);
                let percent = prompt_amount(
                    &format!("{} share % ({:.0}-{:.0})", kind, bounds.min, bounds.max),
                    session.ratio().get(kind),
                )?;
                Edit::Ratio(kind, percent)
            }
            AdjustAction::Preset => Edit::Preset(prompt_preset()?.ratio),
            AdjustAction::Reset => {
                session.reset();
                display_snapshot(session.snapshot(), session.config());
                continue;
            }
            AdjustAction::Done => break,
        };

        session.apply(edit);
        display_snapshot(session.snapshot(), session.config());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_normalizes() {
        assert_eq!(parse_amount("42.5"), 42.5);
        assert_eq!(parse_amount("  7 "), 7.0);
        assert_eq!(parse_amount("-3"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_resolve_preset() {
        assert_eq!(resolve_preset("athletic").unwrap().name, "Athletic");

        let err = resolve_preset("ketogenik").unwrap_err();
        assert!(err.to_string().contains("Ketogenic"));

        assert!(matches!(
            resolve_preset("zzz"),
            Err(MacroError::UnknownPreset(name)) if name == "zzz"
        ));
    }

    #[test]
    fn test_resolve_method_exact_match_needs_no_prompt() {
        let table = RetentionTable::new(vec![("Steamed".to_string(), RetentionFactors::identity())]);
        let (name, factors) = resolve_method(&table, "steamed").unwrap();
        assert_eq!(name, "steamed");
        assert_eq!(factors, RetentionFactors::identity());
    }
}
