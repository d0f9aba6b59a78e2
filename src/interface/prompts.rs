use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::dietary::DietaryRequest;
use crate::error::{KitchenError, Result};

/// Minimum similarity for a fuzzy dish-name match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Outcome of matching typed input against known dish names.
#[derive(Debug, Clone, PartialEq)]
pub enum NameMatch {
    /// Case-insensitive exact match.
    Exact(String),
    /// Close matches, best first.
    Fuzzy(Vec<String>),
    None,
}

/// Match `input` against `candidates`: exact (ignoring case) first, then by
/// Jaro-Winkler similarity above the threshold.
pub fn resolve_dish_name(candidates: &[&str], input: &str) -> NameMatch {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return NameMatch::None;
    }

    if let Some(exact) = candidates.iter().find(|c| c.to_lowercase() == wanted) {
        return NameMatch::Exact(exact.to_string());
    }

    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (*c, jaro_winkler(&c.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut names: Vec<String> = Vec::new();
    for (name, _) in scored {
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        NameMatch::None
    } else {
        NameMatch::Fuzzy(names)
    }
}

/// Resolve a dish name, asking the user to confirm or pick when the match
/// is only approximate.
pub fn prompt_dish_name(candidates: &[&str], typed: Option<&str>) -> Result<String> {
    let input = match typed {
        Some(name) => name.to_string(),
        None => Input::new().with_prompt("Dish name").interact_text()?,
    };

    match resolve_dish_name(candidates, &input) {
        NameMatch::Exact(name) => Ok(name),
        NameMatch::Fuzzy(options) if options.len() == 1 => {
            let name = &options[0];
            if prompt_yes_no(&format!("Did you mean '{}'?", name), true)? {
                Ok(name.clone())
            } else {
                Err(KitchenError::DishNotFound(input))
            }
        }
        NameMatch::Fuzzy(options) => {
            let shown: Vec<String> = options.into_iter().take(5).collect();
            let mut items = shown.clone();
            items.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&items)
                .default(0)
                .interact()?;

            shown
                .get(selection)
                .cloned()
                .ok_or(KitchenError::DishNotFound(input))
        }
        NameMatch::None => Err(KitchenError::DishNotFound(input)),
    }
}

/// Ask which dietary accommodations to apply.
pub fn prompt_dietary_request() -> Result<DietaryRequest> {
    let chosen = MultiSelect::new()
        .with_prompt("Select dietary accommodations (space to toggle)")
        .items(&DietaryRequest::FLAG_NAMES)
        .interact()?;

    let mut flags = [false; 6];
    for index in chosen {
        if let Some(flag) = flags.get_mut(index) {
            *flag = true;
        }
    }
    Ok(DietaryRequest::from_flags(flags))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
