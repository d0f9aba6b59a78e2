use std::fmt;

use serde::Serialize;

use crate::models::CuisineType;

/// Point-in-time statistics for a kitchen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KitchenReport {
    /// One entry per cuisine, in [`CuisineType::ALL`] order.
    pub cuisine_tallies: Vec<(CuisineType, usize)>,
    pub total_dishes: usize,
    pub average_prep_time: u32,
    pub elaborate_percentage: f64,
}

impl KitchenReport {
    pub fn tally(&self, cuisine: CuisineType) -> usize {
        self.cuisine_tallies
            .iter()
            .find(|(c, _)| *c == cuisine)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl fmt::Display for KitchenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cuisine, count) in &self.cuisine_tallies {
            writeln!(f, "{}: {}", cuisine.code(), count)?;
        }
        writeln!(f)?;
        writeln!(f, "AVERAGE PREP TIME: {}", self.average_prep_time)?;
        write!(f, "ELABORATE DISHES: {}%", self.elaborate_percentage)
    }
}
