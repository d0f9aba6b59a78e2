mod loader;

pub use loader::{
    load_menu, load_menu_from_reader, load_menu_into, parse_record, stock_kitchen,
    MenuRecord,
};
