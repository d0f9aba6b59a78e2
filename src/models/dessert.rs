use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::dietary::{
    purge, DietaryRequest, ANIMAL_PRODUCT_INGREDIENTS, LOW_SUGAR_SWEETNESS_REDUCTION,
    NUT_INGREDIENTS,
};
use crate::error::KitchenError;
use crate::models::dish::normalize_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorProfile {
    Sweet,
    Sour,
    Bitter,
    Salty,
    Umami,
}

impl FlavorProfile {
    pub const ALL: [FlavorProfile; 5] = [
        FlavorProfile::Sweet,
        FlavorProfile::Sour,
        FlavorProfile::Bitter,
        FlavorProfile::Salty,
        FlavorProfile::Umami,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FlavorProfile::Sweet => "Sweet",
            FlavorProfile::Sour => "Sour",
            FlavorProfile::Bitter => "Bitter",
            FlavorProfile::Salty => "Salty",
            FlavorProfile::Umami => "Umami",
        }
    }
}

impl fmt::Display for FlavorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FlavorProfile {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        FlavorProfile::ALL
            .into_iter()
            .find(|flavor| normalize_label(flavor.label()) == key)
            .ok_or_else(|| KitchenError::InvalidInput(format!("unknown flavor profile '{}'", s)))
    }
}

/// Dessert-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dessert {
    flavor_profile: FlavorProfile,
    sweetness_level: u32,
    contains_nuts: bool,
}

impl Dessert {
    pub fn new(flavor_profile: FlavorProfile, sweetness_level: u32, contains_nuts: bool) -> Self {
        Self {
            flavor_profile,
            sweetness_level,
            contains_nuts,
        }
    }

    pub fn flavor_profile(&self) -> FlavorProfile {
        self.flavor_profile
    }

    pub fn sweetness_level(&self) -> u32 {
        self.sweetness_level
    }

    pub fn contains_nuts(&self) -> bool {
        self.contains_nuts
    }

    pub(crate) fn apply_dietary_accommodations(
        &mut self,
        ingredients: &mut Vec<String>,
        request: &DietaryRequest,
    ) {
        if request.nut_free {
            self.contains_nuts = false;
            let removed = purge(ingredients, &NUT_INGREDIENTS);
            debug!(removed, "nuts removed from dessert");
        }

        if request.low_sugar {
            self.sweetness_level = self
                .sweetness_level
                .saturating_sub(LOW_SUGAR_SWEETNESS_REDUCTION);
        }

        if request.vegan {
            let removed = purge(ingredients, &ANIMAL_PRODUCT_INGREDIENTS);
            debug!(removed, "dairy and eggs removed from dessert");
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

    fn sample_dessert(ingredients: &[&str], sweetness: u32) -> Dish {
        Dish::new(
            "Baklava",
            list(ingredients),
            90,
            6.0,
            CuisineType::Other,
            Dessert::new(FlavorProfile::Sweet, sweetness, true),
        )
    }

    #[test]
    fn test_nut_free_clears_flag_and_purges() {
        let mut dish = sample_dessert(&["Walnuts", "Honey", "Pistachios", "Phyllo"], 8);
        dish.apply_dietary_accommodations(&DietaryRequest {
            nut_free: true,
            ..Default::default()
        });
        assert_eq!(dish.ingredients(), list(&["Honey", "Phyllo"]).as_slice());
        assert!(!dish.as_dessert().unwrap().contains_nuts());
    }

    #[test]
    fn test_low_sugar_clamps_at_zero() {
        let mut dish = sample_dessert(&["Sugar"], 2);
        dish.apply_dietary_accommodations(&DietaryRequest {
            low_sugar: true,
            ..Default::default()
        });
        assert_eq!(dish.as_dessert().unwrap().sweetness_level(), 0);

        let mut sweeter = sample_dessert(&["Sugar"], 9);
        sweeter.apply_dietary_accommodations(&DietaryRequest {
            low_sugar: true,
            ..Default::default()
        });
        assert_eq!(sweeter.as_dessert().unwrap().sweetness_level(), 6);
    }

    #[test]
    fn test_vegan_removes_dairy_and_eggs() {
        let mut dish = sample_dessert(&["Milk", "Eggs", "Sugar", "Butter", "Cream", "Vanilla"], 5);
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegan: true,
            ..Default::default()
        });
        assert_eq!(dish.ingredients(), list(&["Sugar", "Vanilla"]).as_slice());
        // Vegan does not touch the nut flag.
        assert!(dish.as_dessert().unwrap().contains_nuts());
    }

    #[test]
    fn test_ignores_flags_it_does_not_define() {
        let mut dish = sample_dessert(&["Bread", "Chicken"], 5);
        let before = dish.clone();
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegetarian: true,
            gluten_free: true,
            low_sodium: true,
            ..Default::default()
        });
        assert_eq!(dish, before);
    }
}
