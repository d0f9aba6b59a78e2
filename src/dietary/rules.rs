/// Replace the first two ingredients found in `targets` with `substitutes`
/// and drop every later match.
///
/// Returns how many matches were seen.
pub fn substitute_three_tier(
    ingredients: &mut Vec<String>,
    targets: &[&str],
    substitutes: [&str; 2],
) -> usize {
    let mut seen = 0;
    let rewritten = std::mem::take(ingredients)
        .into_iter()
        .filter_map(|ingredient| {
            if !targets.contains(&ingredient.as_str()) {
                return Some(ingredient);
            }
            seen += 1;
            match seen {
                1 => Some(substitutes[0].to_string()),
                2 => Some(substitutes[1].to_string()),
                _ => None,
            }
        })
        .collect();
    *ingredients = rewritten;
    seen
}

/// Remove every ingredient found in `targets`. Returns how many were removed.
pub fn purge(ingredients: &mut Vec<String>, targets: &[&str]) -> usize {
    let before = ingredients.len();
    ingredients.retain(|ingredient| !targets.contains(&ingredient.as_str()));
    before - ingredients.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dietary::constants::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const SUBS: [&str; 2] = [FIRST_SUBSTITUTE, SECOND_SUBSTITUTE];

    #[test]
    fn test_third_match_removed_not_substituted() {
        let mut ingredients = list(&["Meat", "Chicken", "Fish", "Basil"]);
        let seen = substitute_three_tier(&mut ingredients, &NON_VEGETARIAN_INGREDIENTS, SUBS);
        assert_eq!(seen, 3);
        assert_eq!(ingredients, list(&["Beans", "Mushrooms", "Basil"]));
    }

    #[test]
    fn test_adjacent_removals_do_not_skip() {
        let mut ingredients = list(&["Beef", "Pork", "Lamb", "Shrimp", "Bacon", "Rice"]);
        substitute_three_tier(&mut ingredients, &NON_VEGETARIAN_INGREDIENTS, SUBS);
        assert_eq!(ingredients, list(&["Beans", "Mushrooms", "Rice"]));
    }

    #[test]
    fn test_single_match_keeps_order() {
        let mut ingredients = list(&["Rice", "Chicken", "Garlic"]);
        substitute_three_tier(&mut ingredients, &NON_VEGETARIAN_INGREDIENTS, SUBS);
        assert_eq!(ingredients, list(&["Rice", "Beans", "Garlic"]));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mut ingredients = list(&["chicken", "Tofu"]);
        let seen = substitute_three_tier(&mut ingredients, &NON_VEGETARIAN_INGREDIENTS, SUBS);
        assert_eq!(seen, 0);
        assert_eq!(ingredients, list(&["chicken", "Tofu"]));
    }

    #[test]
    fn test_purge_consecutive_matches() {
        let mut ingredients = list(&["Flour", "Wheat", "Sugar", "Crust", "Crust"]);
        let removed = purge(&mut ingredients, &GLUTEN_INGREDIENTS);
        assert_eq!(removed, 4);
        assert_eq!(ingredients, list(&["Sugar"]));
    }

    #[test]
    fn test_purge_is_idempotent() {
        let mut once = list(&["Bread", "Egg", "Oats", "Honey"]);
        purge(&mut once, &GLUTEN_INGREDIENTS);
        let mut twice = once.clone();
        assert_eq!(purge(&mut twice, &GLUTEN_INGREDIENTS), 0);
        assert_eq!(once, twice);
    }
}
