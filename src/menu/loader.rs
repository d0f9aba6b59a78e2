use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{KitchenError, Result};
use crate::kitchen::Kitchen;
use crate::models::dish::normalize_label;
use crate::models::{
    Appetizer, CookingMethod, CuisineType, Dessert, Dish, DishKind, FlavorProfile, MainCourse,
    ServingStyle, SideCategory, SideDish,
};

/// One row of a menu CSV file.
///
/// `ingredients` and `attributes` are `;`-separated lists. Attributes depend
/// on `dish_type`:
///
/// - `APPETIZER`: `serving_style;spiciness_level;vegetarian`
/// - `DESSERT`: `flavor_profile;sweetness_level;contains_nuts`
/// - `MAINCOURSE`: `cooking_method;protein_type;side_dishes;gluten_free`, with
///   side dishes written as `name:CATEGORY` pairs separated by `|`.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuRecord {
    pub dish_type: String,
    pub name: String,
    pub ingredients: String,
    pub prep_time: u32,
    pub price: f64,
    pub cuisine_type: String,
    pub attributes: String,
}

/// Load every dish from a menu CSV file.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    let dishes = read_records(reader)?;
    debug!(path = %path.as_ref().display(), count = dishes.len(), "menu loaded");
    Ok(dishes)
}

/// Load dishes from any CSV source with a header row.
pub fn load_menu_from_reader<R: Read>(source: R) -> Result<Vec<Dish>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Dish>> {
    let mut dishes = Vec::new();
    for record in reader.deserialize::<MenuRecord>() {
        dishes.push(parse_record(&record?)?);
    }
    Ok(dishes)
}

/// Order every dish from a menu file into `kitchen`.
///
/// Returns how many dishes were turned away because the kitchen was full.
pub fn load_menu_into<P: AsRef<Path>>(kitchen: &mut Kitchen, path: P) -> Result<usize> {
    Ok(stock_kitchen(kitchen, &load_menu(path)?))
}

/// Order a copy of every menu dish into `kitchen`, returning the rejected count.
pub fn stock_kitchen(kitchen: &mut Kitchen, menu: &[Dish]) -> usize {
    let rejected = menu
        .iter()
        .map(|dish| kitchen.new_order(dish.clone()))
        .filter(|added| !added)
        .count();
    if rejected > 0 {
        warn!(rejected, "kitchen filled up while loading menu");
    }
    rejected
}

/// Build a dish from one CSV row.
pub fn parse_record(record: &MenuRecord) -> Result<Dish> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(KitchenError::InvalidInput("dish name is empty".to_string()));
    }
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(invalid(name, format!("price {} is not valid", record.price)));
    }

    let ingredients = split_list(&record.ingredients, ';');
    let attributes: Vec<String> = record
        .attributes
        .split(';')
        .map(|part| part.trim().to_string())
        .collect();
    let kind = parse_kind(name, &record.dish_type, &attributes)?;

    Ok(Dish::new(
        name,
        ingredients,
        record.prep_time,
        record.price,
        CuisineType::parse_lenient(&record.cuisine_type),
        kind,
    ))
}

fn parse_kind(name: &str, dish_type: &str, attributes: &[String]) -> Result<DishKind> {
    let kind: DishKind = match normalize_label(dish_type).replace('_', "").as_str() {
        "APPETIZER" => {
            let [style, spiciness, vegetarian] = expect_attributes::<3>(name, attributes)?;
            Appetizer::new(
                style.parse::<ServingStyle>()?,
                parse_level(name, spiciness)?,
                parse_bool(name, vegetarian)?,
            )
            .into()
        }
        "DESSERT" => {
            let [flavor, sweetness, nuts] = expect_attributes::<3>(name, attributes)?;
            Dessert::new(
                flavor.parse::<FlavorProfile>()?,
                parse_level(name, sweetness)?,
                parse_bool(name, nuts)?,
            )
            .into()
        }
        "MAINCOURSE" => {
            let [method, protein, sides, gluten_free] = expect_attributes::<4>(name, attributes)?;
            MainCourse::new(
                method.parse::<CookingMethod>()?,
                protein.as_str(),
                parse_side_dishes(name, sides)?,
                parse_bool(name, gluten_free)?,
            )
            .into()
        }
        _ => return Err(invalid(name, format!("unknown dish type '{}'", dish_type))),
    };
    Ok(kind)
}

fn expect_attributes<'a, const N: usize>(
    name: &str,
    attributes: &'a [String],
) -> Result<[&'a String; N]> {
    let refs: Vec<&String> = attributes.iter().collect();
    refs.try_into().map_err(|found: Vec<&String>| {
        invalid(
            name,
            format!("expected {} attributes, found {}", N, found.len()),
        )
    })
}

/// Side dishes as `name:CATEGORY|name:CATEGORY`. An empty field means none.
fn parse_side_dishes(name: &str, field: &str) -> Result<Vec<SideDish>> {
    split_list(field, '|')
        .iter()
        .map(|entry| {
            let (side_name, category) = entry
                .rsplit_once(':')
                .ok_or_else(|| invalid(name, format!("side dish '{}' has no category", entry)))?;
            Ok(SideDish::new(
                side_name.trim(),
                category.parse::<SideCategory>()?,
            ))
        })
        .collect()
}

fn parse_level(name: &str, value: &str) -> Result<u32> {
    // Negative levels are clamped to zero rather than rejected.
    value
        .trim()
        .parse::<i64>()
        .map(|level| level.clamp(0, i64::from(u32::MAX)) as u32)
        .map_err(|_| invalid(name, format!("'{}' is not a level", value)))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(invalid(name, format!("'{}' is not a yes/no value", other))),
    }
}

fn split_list(field: &str, separator: char) -> Vec<String> {
    field
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn invalid(name: &str, detail: String) -> KitchenError {
    KitchenError::InvalidInput(format!("{}: {}", name, detail))
}
