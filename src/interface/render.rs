use crate::kitchen::{Kitchen, KitchenReport};
use crate::models::{join_ingredients, Dish, DishKind, SideDish};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Side dishes as "name (Category: Label), ...".
pub fn format_side_dishes(sides: &[SideDish]) -> String {
    sides
        .iter()
        .map(|side| format!("{} (Category: {})", side.name, side.category.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render every field of a dish, one per line.
pub fn render_dish(dish: &Dish) -> String {
    let mut lines = vec![
        format!("Dish Name: {}", dish.name()),
        format!("Ingredients: {}", join_ingredients(dish.ingredients())),
        format!("Preparation Time: {} minutes", dish.prep_time()),
        format!("Price: ${:.2}", dish.price()),
        format!("Cuisine Type: {}", dish.cuisine_type().code()),
    ];

    match dish.kind() {
        DishKind::Appetizer(a) => lines.extend([
            format!("Serving Style: {}", a.serving_style().label()),
            format!("Spiciness Level: {}", a.spiciness_level()),
            format!("Vegetarian: {}", yes_no(a.is_vegetarian())),
        ]),
        DishKind::Dessert(d) => lines.extend([
            format!("Flavor Profile: {}", d.flavor_profile().label()),
            format!("Sweetness Level: {}", d.sweetness_level()),
            format!("Contains Nuts: {}", yes_no(d.contains_nuts())),
        ]),
        DishKind::MainCourse(m) => lines.extend([
            format!("Cooking Method: {}", m.cooking_method().label()),
            format!("Protein Type: {}", m.protein_type()),
            format!("Side Dishes: {}", format_side_dishes(m.side_dishes())),
            format!("Gluten-Free: {}", yes_no(m.is_gluten_free())),
        ]),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn display_dish(dish: &Dish) {
    print!("{}", render_dish(dish));
}

/// Display every dish held by the kitchen.
pub fn display_kitchen(kitchen: &Kitchen) {
    if kitchen.is_empty() {
        println!("Kitchen is empty.");
        return;
    }

    println!();
    println!(
        "=== Kitchen ({} of {} slots) ===",
        kitchen.len(),
        kitchen.capacity()
    );
    println!();

    for dish in kitchen.dishes() {
        println!("[{}]", dish.kind().label());
        display_dish(dish);
        println!();
    }
}

pub fn display_kitchen_report(report: &KitchenReport) {
    println!("{}", report);
}
