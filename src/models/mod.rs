pub mod appetizer;
pub mod dessert;
pub mod dish;
pub mod main_course;

pub use appetizer::{Appetizer, ServingStyle};
pub use dessert::{Dessert, FlavorProfile};
pub use dish::{join_ingredients, CuisineType, Dish, DishKind};
pub use main_course::{CookingMethod, MainCourse, SideCategory, SideDish};
