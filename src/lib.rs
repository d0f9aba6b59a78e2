pub mod bag;
pub mod cli;
pub mod dietary;
pub mod error;
pub mod interface;
pub mod kitchen;
pub mod menu;
pub mod models;
pub mod simulation;

pub use bag::ArrayBag;
pub use dietary::DietaryRequest;
pub use error::{KitchenError, Result};
pub use kitchen::{Kitchen, KitchenReport};
pub use models::{Dish, DishKind};
