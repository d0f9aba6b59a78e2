use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::dietary::{
    purge, substitute_three_tier, DietaryRequest, ANIMAL_PRODUCT_INGREDIENTS, FIRST_SUBSTITUTE,
    GLUTEN_SIDE_CATEGORIES, NON_VEGETARIAN_INGREDIENTS, PLANT_PROTEIN, SECOND_SUBSTITUTE,
};
use crate::error::KitchenError;
use crate::models::dish::normalize_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CookingMethod {
    Grilled,
    Raw,
    Steamed,
    Fried,
    Baked,
}

impl CookingMethod {
    pub const ALL: [CookingMethod; 5] = [
        CookingMethod::Grilled,
        CookingMethod::Raw,
        CookingMethod::Steamed,
        CookingMethod::Fried,
        CookingMethod::Baked,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CookingMethod::Grilled => "Grilled",
            CookingMethod::Raw => "Raw",
            CookingMethod::Steamed => "Steamed",
            CookingMethod::Fried => "Fried",
            CookingMethod::Baked => "Baked",
        }
    }
}

impl fmt::Display for CookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CookingMethod {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        CookingMethod::ALL
            .into_iter()
            .find(|method| normalize_label(method.label()) == key)
            .ok_or_else(|| KitchenError::InvalidInput(format!("unknown cooking method '{}'", s)))
    }
}

/// Category of a side dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SideCategory {
    Grain,
    Pasta,
    Legume,
    Bread,
    Salad,
    Soup,
    Starches,
    Vegetable,
}

impl SideCategory {
    pub const ALL: [SideCategory; 8] = [
        SideCategory::Grain,
        SideCategory::Pasta,
        SideCategory::Legume,
        SideCategory::Bread,
        SideCategory::Salad,
        SideCategory::Soup,
        SideCategory::Starches,
        SideCategory::Vegetable,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SideCategory::Grain => "Grain",
            SideCategory::Pasta => "Pasta",
            SideCategory::Legume => "Legume",
            SideCategory::Bread => "Bread",
            SideCategory::Salad => "Salad",
            SideCategory::Soup => "Soup",
            SideCategory::Starches => "Starches",
            SideCategory::Vegetable => "Vegetable",
        }
    }

    pub fn contains_gluten(self) -> bool {
        GLUTEN_SIDE_CATEGORIES.contains(&self)
    }
}

impl fmt::Display for SideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SideCategory {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        SideCategory::ALL
            .into_iter()
            .find(|category| normalize_label(category.label()) == key)
            .ok_or_else(|| KitchenError::InvalidInput(format!("unknown side category '{}'", s)))
    }
}

/// A side served with a main course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideDish {
    pub name: String,
    pub category: SideCategory,
}

impl SideDish {
    pub fn new(name: impl Into<String>, category: SideCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Main-course-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainCourse {
    cooking_method: CookingMethod,
    protein_type: String,
    side_dishes: Vec<SideDish>,
    gluten_free: bool,
}

impl MainCourse {
    pub fn new(
        cooking_method: CookingMethod,
        protein_type: impl Into<String>,
        side_dishes: Vec<SideDish>,
        gluten_free: bool,
    ) -> Self {
        Self {
            cooking_method,
            protein_type: protein_type.into(),
            side_dishes,
            gluten_free,
        }
    }

    pub fn cooking_method(&self) -> CookingMethod {
        self.cooking_method
    }

    pub fn protein_type(&self) -> &str {
        &self.protein_type
    }

    pub fn side_dishes(&self) -> &[SideDish] {
        &self.side_dishes
    }

    pub fn is_gluten_free(&self) -> bool {
        self.gluten_free
    }

    pub(crate) fn apply_dietary_accommodations(
        &mut self,
        ingredients: &mut Vec<String>,
        request: &DietaryRequest,
    ) {
        if request.vegetarian {
            self.protein_type = PLANT_PROTEIN.to_string();
            let replaced = substitute_three_tier(
                ingredients,
                &NON_VEGETARIAN_INGREDIENTS,
                [FIRST_SUBSTITUTE, SECOND_SUBSTITUTE],
            );
            debug!(replaced, "main course made vegetarian");
        }

        if request.vegan {
            self.protein_type = PLANT_PROTEIN.to_string();
            let removed = purge(ingredients, &ANIMAL_PRODUCT_INGREDIENTS);
            debug!(removed, "dairy and eggs removed from main course");
        }

        if request.gluten_free {
            self.gluten_free = true;
            let before = self.side_dishes.len();
            self.side_dishes.retain(|side| !side.category.contains_gluten());
            debug!(removed = before - self.side_dishes.len(), "gluten sides dropped");
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

    fn sample_main(ingredients: &[&str]) -> Dish {
        Dish::new(
            "Surf and Turf",
            list(ingredients),
            75,
            32.0,
            CuisineType::American,
            MainCourse::new(
                CookingMethod::Grilled,
                "Beef",
                vec![
                    SideDish::new("Mashed Potatoes", SideCategory::Starches),
                    SideDish::new("Green Beans", SideCategory::Vegetable),
                    SideDish::new("Garlic Bread", SideCategory::Bread),
                    SideDish::new("Lentil Soup", SideCategory::Soup),
                    SideDish::new("Rice Pilaf", SideCategory::Grain),
                ],
                false,
            ),
        )
    }

    #[test]
    fn test_vegetarian_switches_protein_and_substitutes() {
        let mut dish = sample_main(&["Beef", "Shrimp", "Butter", "Lamb", "Salt"]);
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegetarian: true,
            ..Default::default()
        });
        let main = dish.as_main_course().unwrap();
        assert_eq!(main.protein_type(), "Tofu");
        assert_eq!(
            dish.ingredients(),
            list(&["Beans", "Mushrooms", "Butter", "Salt"]).as_slice()
        );
    }

    #[test]
    fn test_vegan_switches_protein_and_purges_dairy() {
        let mut dish = sample_main(&["Beef", "Cheese", "Butter", "Pepper"]);
        dish.apply_dietary_accommodations(&DietaryRequest {
            vegan: true,
            ..Default::default()
        });
        assert_eq!(dish.as_main_course().unwrap().protein_type(), "Tofu");
        // Vegan alone does not substitute meat.
        assert_eq!(dish.ingredients(), list(&["Beef", "Pepper"]).as_slice());
    }

    #[test]
    fn test_gluten_free_drops_gluten_sides() {
        let mut dish = sample_main(&["Beef"]);
        dish.apply_dietary_accommodations(&DietaryRequest {
            gluten_free: true,
            ..Default::default()
        });
        let main = dish.as_main_course().unwrap();
        assert!(main.is_gluten_free());
        let names: Vec<&str> = main.side_dishes().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Green Beans", "Lentil Soup"]);
        // Ingredients are left alone; only sides change.
        assert_eq!(dish.ingredients(), list(&["Beef"]).as_slice());
    }

    #[test]
    fn test_ignores_flags_it_does_not_define() {
        let mut dish = sample_main(&["Walnuts", "Bread"]);
        let before = dish.clone();
        dish.apply_dietary_accommodations(&DietaryRequest {
            nut_free: true,
            low_sodium: true,
            low_sugar: true,
            ..Default::default()
        });
        assert_eq!(dish, before);
    }

    #[test]
    fn test_side_category_gluten_membership() {
        let gluten: Vec<SideCategory> = SideCategory::ALL
            .into_iter()
            .filter(|c| c.contains_gluten())
            .collect();
        assert_eq!(
            gluten,
            vec![
                SideCategory::Grain,
                SideCategory::Pasta,
                SideCategory::Bread,
                SideCategory::Starches
            ]
        );
    }
}
