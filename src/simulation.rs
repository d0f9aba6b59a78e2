use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::kitchen::Kitchen;
use crate::models::Dish;

/// Parameters for a simulated service.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of steps; each step either places or serves one dish.
    pub steps: usize,
    /// Probability that a step serves a held dish instead of ordering.
    pub serve_ratio: f64,
    /// Seed for reproducible runs.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 50,
            serve_ratio: 0.3,
            seed: 123,
        }
    }
}

/// What happened during a simulated service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub placed: usize,
    /// Orders turned away because the kitchen was full.
    pub rejected: usize,
    pub served: usize,
}

/// Run a random service against `kitchen`, ordering dishes from `menu`.
pub fn simulate(kitchen: &mut Kitchen, menu: &[Dish], config: &SimulationConfig) -> SimulationSummary {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let serve_ratio = if config.serve_ratio.is_nan() {
        0.0
    } else {
        config.serve_ratio.clamp(0.0, 1.0)
    };
    let mut summary = SimulationSummary::default();

    for step in 0..config.steps {
        let serve = !kitchen.is_empty() && rng.gen_bool(serve_ratio);

        if serve {
            let held: Vec<&Dish> = kitchen.dishes().collect();
            let Some(dish) = held.choose(&mut rng).map(|d| (*d).clone()) else {
                continue;
            };
            if kitchen.serve_dish(&dish) {
                summary.served += 1;
                debug!(step, dish = %dish.name(), "simulated serve");
            }
        } else if let Some(dish) = menu.choose(&mut rng) {
            if kitchen.new_order(dish.clone()) {
                summary.placed += 1;
            } else {
                summary.rejected += 1;
            }
        }
    }

    info!(
        placed = summary.placed,
        rejected = summary.rejected,
        served = summary.served,
        "simulation finished"
    );
    summary
}
