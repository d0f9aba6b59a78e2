use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::dietary::DietaryRequest;
use crate::error::KitchenError;
use crate::models::{Appetizer, Dessert, MainCourse};

/// Minimum ingredient count for a dish to count as elaborate.
pub const ELABORATE_MIN_INGREDIENTS: usize = 5;

/// Minimum preparation time (minutes) for a dish to count as elaborate.
pub const ELABORATE_MIN_PREP_TIME: u32 = 60;

/// Cuisine a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    Italian,
    Mexican,
    Chinese,
    Indian,
    American,
    French,
    Other,
}

impl CuisineType {
    /// Every cuisine, in report order.
    pub const ALL: [CuisineType; 7] = [
        CuisineType::Italian,
        CuisineType::Mexican,
        CuisineType::Chinese,
        CuisineType::Indian,
        CuisineType::American,
        CuisineType::French,
        CuisineType::Other,
    ];

    /// Upper-case code used in menus and reports.
    pub fn code(self) -> &'static str {
        match self {
            CuisineType::Italian => "ITALIAN",
            CuisineType::Mexican => "MEXICAN",
            CuisineType::Chinese => "CHINESE",
            CuisineType::Indian => "INDIAN",
            CuisineType::American => "AMERICAN",
            CuisineType::French => "FRENCH",
            CuisineType::Other => "OTHER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Mexican => "Mexican",
            CuisineType::Chinese => "Chinese",
            CuisineType::Indian => "Indian",
            CuisineType::American => "American",
            CuisineType::French => "French",
            CuisineType::Other => "Other",
        }
    }

    /// Parse a cuisine, mapping anything unrecognised to [`CuisineType::Other`].
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!(value = s, "unknown cuisine type, using OTHER");
            CuisineType::Other
        })
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CuisineType {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        CuisineType::ALL
            .into_iter()
            .find(|c| c.code() == key)
            .ok_or_else(|| KitchenError::InvalidInput(format!("unknown cuisine type '{}'", s)))
    }
}

/// Canonical form for label matching: trimmed, upper-case, words joined by `_`.
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}

/// Join ingredients for display ("a, b, c").
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}

/// Variant-specific payload of a dish.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "dish_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DishKind {
    Appetizer(Appetizer),
    Dessert(Dessert),
    MainCourse(MainCourse),
}

impl DishKind {
    pub fn label(&self) -> &'static str {
        match self {
            DishKind::Appetizer(_) => "Appetizer",
            DishKind::Dessert(_) => "Dessert",
            DishKind::MainCourse(_) => "Main Course",
        }
    }
}

impl From<Appetizer> for DishKind {
    fn from(appetizer: Appetizer) -> Self {
        DishKind::Appetizer(appetizer)
    }
}

impl From<Dessert> for DishKind {
    fn from(dessert: Dessert) -> Self {
        DishKind::Dessert(dessert)
    }
}

impl From<MainCourse> for DishKind {
    fn from(main_course: MainCourse) -> Self {
        DishKind::MainCourse(main_course)
    }
}

/// A dish on the menu: common fields plus a variant payload.
///
/// Equality is structural over every field, which is what the kitchen relies
/// on when serving a dish by value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    name: String,
    ingredients: Vec<String>,
    prep_time: u32,
    price: f64,
    cuisine_type: CuisineType,
    kind: DishKind,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        prep_time: u32,
        price: f64,
        cuisine_type: CuisineType,
        kind: impl Into<DishKind>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            prep_time,
            price,
            cuisine_type,
            kind: kind.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Preparation time in minutes.
    pub fn prep_time(&self) -> u32 {
        self.prep_time
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn cuisine_type(&self) -> CuisineType {
        self.cuisine_type
    }

    pub fn kind(&self) -> &DishKind {
        &self.kind
    }

    pub fn as_appetizer(&self) -> Option<&Appetizer> {
        match &self.kind {
            DishKind::Appetizer(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dessert(&self) -> Option<&Dessert> {
        match &self.kind {
            DishKind::Dessert(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_main_course(&self) -> Option<&MainCourse> {
        match &self.kind {
            DishKind::MainCourse(m) => Some(m),
            _ => None,
        }
    }

    /// A dish is elaborate when it has at least five ingredients and takes at
    /// least an hour to prepare.
    pub fn is_elaborate(&self) -> bool {
        self.ingredients.len() >= ELABORATE_MIN_INGREDIENTS
            && self.prep_time >= ELABORATE_MIN_PREP_TIME
    }

    /// Rewrite this dish in place to satisfy `request`.
    ///
    /// Each variant only reads the flags it understands; the rest are ignored.
    pub fn apply_dietary_accommodations(&mut self, request: &DietaryRequest) {
        match &mut self.kind {
            DishKind::Appetizer(a) => a.apply_dietary_accommodations(&mut self.ingredients, request),
            DishKind::Dessert(d) => d.apply_dietary_accommodations(&mut self.ingredients, request),
            DishKind::MainCourse(m) => {
                m.apply_dietary_accommodations(&mut self.ingredients, request)
            }
        }
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingStyle;

    fn ingredients(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_dish(count: usize, prep_time: u32) -> Dish {
        let names: Vec<String> = (0..count).map(|i| format!("Ingredient {}", i)).collect();
        Dish::new(
            "Sampler",
            names,
            prep_time,
            9.5,
            CuisineType::French,
            Appetizer::new(ServingStyle::Plated, 1, false),
        )
    }

    #[test]
    fn test_is_elaborate_boundaries() {
        assert!(sample_dish(5, 60).is_elaborate());
        assert!(!sample_dish(4, 60).is_elaborate());
        assert!(!sample_dish(5, 59).is_elaborate());
        assert!(sample_dish(8, 180).is_elaborate());
    }

    #[test]
    fn test_cuisine_parse_accepts_code_and_label() {
        assert_eq!("ITALIAN".parse::<CuisineType>().unwrap(), CuisineType::Italian);
        assert_eq!("mexican".parse::<CuisineType>().unwrap(), CuisineType::Mexican);
        assert_eq!(" French ".parse::<CuisineType>().unwrap(), CuisineType::French);
        assert!("Martian".parse::<CuisineType>().is_err());
    }

    #[test]
    fn test_cuisine_parse_lenient_falls_back_to_other() {
        assert_eq!(CuisineType::parse_lenient("Martian"), CuisineType::Other);
        assert_eq!(CuisineType::parse_lenient("indian"), CuisineType::Indian);
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Family Style"), "FAMILY_STYLE");
        assert_eq!(normalize_label("family-style"), "FAMILY_STYLE");
        assert_eq!(normalize_label("  main  course "), "MAIN_COURSE");
    }

    #[test]
    fn test_join_ingredients() {
        assert_eq!(join_ingredients(&ingredients(&["Tomato", "Basil"])), "Tomato, Basil");
        assert_eq!(join_ingredients(&[]), "");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = sample_dish(5, 60);
        let mut b = sample_dish(5, 60);
        assert_eq!(a, b);

        b.apply_dietary_accommodations(&DietaryRequest {
            low_sodium: true,
            ..Default::default()
        });
        assert_ne!(a, b);
    }
}
