use clap::{Args, Parser, Subcommand};

use crate::bag::DEFAULT_CAPACITY;
use crate::dietary::DietaryRequest;

/// Kitchen: track dish orders, prep-time statistics, and dietary accommodations.
#[derive(Parser, Debug)]
#[command(name = "kitchen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV file.
    #[arg(short, long, default_value = "menu.csv")]
    pub file: String,

    /// Maximum number of dishes the kitchen holds.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show cuisine tallies, average prep time, and elaborate-dish share.
    #[default]
    Report,

    /// List every dish in the kitchen.
    List,

    /// Serve (remove) a dish by name.
    Serve {
        /// Dish name; prompted for when omitted.
        name: Option<String>,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Apply dietary accommodations to a dish.
    Accommodate {
        /// Dish name; prompted for when omitted.
        name: Option<String>,

        #[command(flatten)]
        flags: DietaryFlags,
    },

    /// Serve every dish matching a prep-time or cuisine filter.
    Release {
        /// Release dishes that take fewer than this many minutes.
        #[arg(long, conflicts_with = "cuisine", required_unless_present = "cuisine")]
        below: Option<u32>,

        /// Release every dish of this cuisine (e.g. ITALIAN).
        #[arg(long)]
        cuisine: Option<String>,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Run a seeded random service against the kitchen.
    Simulate {
        /// Number of order/serve steps.
        #[arg(long, default_value = "50")]
        steps: usize,

        /// Probability that a step serves a dish instead of ordering one.
        #[arg(long, default_value = "0.3")]
        serve_ratio: f64,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "123")]
        seed: u64,
    },
}

/// Dietary accommodation switches.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct DietaryFlags {
    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub vegan: bool,

    #[arg(long)]
    pub gluten_free: bool,

    #[arg(long)]
    pub nut_free: bool,

    #[arg(long)]
    pub low_sodium: bool,

    #[arg(long)]
    pub low_sugar: bool,
}

impl From<DietaryFlags> for DietaryRequest {
    fn from(flags: DietaryFlags) -> Self {
        DietaryRequest {
            vegetarian: flags.vegetarian,
            vegan: flags.vegan,
            gluten_free: flags.gluten_free,
            nut_free: flags.nut_free,
            low_sodium: flags.low_sodium,
            low_sugar: flags.low_sugar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_report() {
        let cli = Cli::try_parse_from(["kitchen"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, "menu.csv");
        assert_eq!(cli.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_accommodate_flags() {
        let cli = Cli::try_parse_from([
            "kitchen",
            "accommodate",
            "Pad Thai",
            "--vegetarian",
            "--gluten-free",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Accommodate { name, flags }) => {
                assert_eq!(name.as_deref(), Some("Pad Thai"));
                let request = DietaryRequest::from(flags);
                assert!(request.vegetarian && request.gluten_free);
                assert!(!request.vegan);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_release_needs_one_filter() {
        assert!(Cli::try_parse_from(["kitchen", "release"]).is_err());
        assert!(Cli::try_parse_from(["kitchen", "release", "--below", "30", "--cuisine", "FRENCH"]).is_err());
        assert!(Cli::try_parse_from(["kitchen", "release", "--cuisine", "FRENCH"]).is_ok());
    }
}
