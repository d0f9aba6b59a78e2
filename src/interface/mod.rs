pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_dietary_request, prompt_dish_name, prompt_yes_no, resolve_dish_name, NameMatch,
};
pub use render::{
    display_dish, display_kitchen, display_kitchen_report, format_side_dishes, render_dish,
};
