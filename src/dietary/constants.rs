use crate::models::SideCategory;

/// Ingredients a vegetarian request replaces or drops.
pub const NON_VEGETARIAN_INGREDIENTS: [&str; 8] = [
    "Meat", "Chicken", "Fish", "Beef", "Pork", "Lamb", "Shrimp", "Bacon",
];

/// Replacement for the first non-vegetarian ingredient.
pub const FIRST_SUBSTITUTE: &str = "Beans";

/// Replacement for the second non-vegetarian ingredient.
pub const SECOND_SUBSTITUTE: &str = "Mushrooms";

pub const GLUTEN_INGREDIENTS: [&str; 8] = [
    "Wheat", "Flour", "Bread", "Pasta", "Barley", "Rye", "Oats", "Crust",
];

pub const NUT_INGREDIENTS: [&str; 7] = [
    "Almonds",
    "Walnuts",
    "Pecans",
    "Hazelnuts",
    "Peanuts",
    "Cashews",
    "Pistachios",
];

/// Dairy and egg ingredients removed for vegan requests.
pub const ANIMAL_PRODUCT_INGREDIENTS: [&str; 6] =
    ["Milk", "Eggs", "Cheese", "Butter", "Cream", "Yogurt"];

/// Side dish categories dropped from gluten-free main courses.
pub const GLUTEN_SIDE_CATEGORIES: [SideCategory; 4] = [
    SideCategory::Grain,
    SideCategory::Pasta,
    SideCategory::Bread,
    SideCategory::Starches,
];

/// Protein used for vegetarian and vegan main courses.
pub const PLANT_PROTEIN: &str = "Tofu";

/// Spiciness reduction for a low-sodium appetizer.
pub const LOW_SODIUM_SPICE_REDUCTION: u32 = 2;

/// Sweetness reduction for a low-sugar dessert.
pub const LOW_SUGAR_SWEETNESS_REDUCTION: u32 = 3;
