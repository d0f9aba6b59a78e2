pub mod constants;
pub mod rules;

use serde::Serialize;

pub use constants::*;
pub use rules::{purge, substitute_three_tier};

/// Dietary flags a guest can ask for.
///
/// Flags are independent. Each dish variant reads only the ones it defines:
/// appetizers use `vegetarian`, `low_sodium` and `gluten_free`; desserts use
/// `nut_free`, `low_sugar` and `vegan`; main courses use `vegetarian`, `vegan`
/// and `gluten_free`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DietaryRequest {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub nut_free: bool,
    pub low_sodium: bool,
    pub low_sugar: bool,
}

impl DietaryRequest {
    /// Names of the flags, in the order used by prompts and summaries.
    pub const FLAG_NAMES: [&'static str; 6] = [
        "Vegetarian",
        "Vegan",
        "Gluten-free",
        "Nut-free",
        "Low sodium",
        "Low sugar",
    ];

    /// Build a request from flags listed in [`Self::FLAG_NAMES`] order.
    pub fn from_flags(flags: [bool; 6]) -> Self {
        let [vegetarian, vegan, gluten_free, nut_free, low_sodium, low_sugar] = flags;
        Self {
            vegetarian,
            vegan,
            gluten_free,
            nut_free,
            low_sodium,
            low_sugar,
        }
    }

    pub fn flags(&self) -> [bool; 6] {
        [
            self.vegetarian,
            self.vegan,
            self.gluten_free,
            self.nut_free,
            self.low_sodium,
            self.low_sugar,
        ]
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        !self.flags().contains(&true)
    }

    /// Comma-separated names of the set flags, or "none".
    pub fn summary(&self) -> String {
        let names: Vec<&str> = Self::FLAG_NAMES
            .iter()
            .zip(self.flags())
            .filter(|(_, set)| *set)
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    }
}
