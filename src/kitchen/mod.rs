mod manager;
mod report;

pub use manager::Kitchen;
pub use report::KitchenReport;
