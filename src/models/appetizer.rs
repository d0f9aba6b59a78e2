use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::dietary::{
    purge, substitute_three_tier, DietaryRequest, FIRST_SUBSTITUTE, GLUTEN_INGREDIENTS,
    LOW_SODIUM_SPICE_REDUCTION, NON_VEGETARIAN_INGREDIENTS, SECOND_SUBSTITUTE,
};
use crate::error::KitchenError;
use crate::models::dish::normalize_label;

/// How an appetizer is brought to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServingStyle {
    Plated,
    FamilyStyle,
    Buffet,
}

impl ServingStyle {
    pub const ALL: [ServingStyle; 3] = [
        ServingStyle::Plated,
        ServingStyle::FamilyStyle,
        ServingStyle::Buffet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServingStyle::Plated => "Plated",
            ServingStyle::FamilyStyle => "Family Style",
            ServingStyle::Buffet => "Buffet",
        }
    }
}

impl fmt::Display for ServingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServingStyle {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        ServingStyle::ALL
            .into_iter()
            .find(|style| normalize_label(style.label()) == key)
            .ok_or_else(|| KitchenError::InvalidInput(format!("unknown serving style '{}'", s)))
    }
}

/// Appetizer-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appetizer {
    serving_style: ServingStyle,
    spiciness_level: u32,
    vegetarian: bool,
}

impl Appetizer {
    pub fn new(serving_style: ServingStyle, spiciness_level: u32, vegetarian: bool) -> Self {
        Self {
            serving_style,
            spiciness_level,
            vegetarian,
        }
    }

    pub fn serving_style(&self) -> ServingStyle {
        self.serving_style
    }

    pub fn spiciness_level(&self) -> u32 {
        self.spiciness_level
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    /// Vegetarian substitution first, then the sodium adjustment, then the
    /// gluten purge.
    pub(crate) fn apply_dietary_accommodations(
        &mut self,
        ingredients: &mut Vec<String>,
        request: &DietaryRequest,
    ) {
        if request.vegetarian {
            self.vegetarian = true;
            let replaced = substitute_three_tier(
                ingredients,
                &NON_VEGETARIAN_INGREDIENTS,
                [FIRST_SUBSTITUTE, SECOND_SUBSTITUTE],
            );
            debug!(replaced, "appetizer made vegetarian");
        }

        if request.low_sodium {
            self.spiciness_level = self
                .spiciness_level
                .saturating_sub(LOW_SODIUM_SPICE_REDUCTION);
        }

        if request.gluten_free {
            let removed = purge(ingredients, &GLUTEN_INGREDIENTS);
            debug!(removed, "gluten removed from appetizer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CuisineType, Dish};

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_appetizer(ingredients: &[&str], spiciness: u32) -> Dish {
        Dish::new(
            "Antipasto",
            list(ingredients),
            20,
            8.25,
            CuisineType::Italian,
            Appetizer::new(ServingStyle::FamilyStyle, spiciness, false),
        )
    }

    #[test]
    fn test_vegetarian_sets_flag_and_substitutes() {
        let mut dish = sample_appetizer(&["Meat", "Chicken", "Fish", "Basil"], 3);
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegetarian: true,
            ..Default::default()
        });
        assert_eq!(dish.ingredients(), list(&["Beans", "Mushrooms", "Basil"]).as_slice());
        assert!(dish.as_appetizer().unwrap().is_vegetarian());
    }

    #[test]
    fn test_low_sodium_clamps_at_zero() {
        let mut dish = sample_appetizer(&["Olives"], 1);
        dish.apply_dietary_accommodations(&DietaryRequest {
            low_sodium: true,
            ..Default::default()
        });
        assert_eq!(dish.as_appetizer().unwrap().spiciness_level(), 0);

        let mut spicy = sample_appetizer(&["Chili"], 5);
        spicy.apply_dietary_accommodations(&DietaryRequest {
            low_sodium: true,
            ..Default::default()
        });
        assert_eq!(spicy.as_appetizer().unwrap().spiciness_level(), 3);
    }

    #[test]
    fn test_gluten_free_purges_and_is_idempotent() {
        let request = DietaryRequest {
            gluten_free: true,
            ..Default::default()
        };
        let mut dish = sample_appetizer(&["Bread", "Tomato", "Flour", "Crust", "Garlic"], 0);
        dish.apply_dietary_accommodations(&request);
        assert_eq!(dish.ingredients(), list(&["Tomato", "Garlic"]).as_slice());

        let once = dish.clone();
        dish.apply_dietary_accommodations(&request);
        assert_eq!(dish, once);
    }

    #[test]
    fn test_vegetarian_then_gluten_free_in_one_call() {
        let mut dish = sample_appetizer(&["Bacon", "Bread", "Shrimp", "Pork", "Rye"], 2);
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegetarian: true,
            gluten_free: true,
            low_sodium: true,
            ..Default::default()
        });
        assert_eq!(dish.ingredients(), list(&["Beans", "Mushrooms"]).as_slice());
        assert_eq!(dish.as_appetizer().unwrap().spiciness_level(), 0);
    }

    #[test]
    fn test_ignores_flags_it_does_not_define() {
        let mut dish = sample_appetizer(&["Cheese", "Walnuts"], 2);
        let before = dish.clone();
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegan: true,
            nut_free: true,
            low_sugar: true,
            ..Default::default()
        });
        assert_eq!(dish, before);
    }

    #[test]
    fn test_serving_style_labels() {
        assert_eq!(ServingStyle::FamilyStyle.label(), "Family Style");
        assert_eq!("family style".parse::<ServingStyle>().unwrap(), ServingStyle::FamilyStyle);
        assert_eq!("FAMILY_STYLE".parse::<ServingStyle>().unwrap(), ServingStyle::FamilyStyle);
        assert!("Tapas".parse::<ServingStyle>().is_err());
    }
}
