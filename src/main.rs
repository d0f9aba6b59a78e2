use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kitchen_inventory_rs::cli::{Cli, Command};
use kitchen_inventory_rs::dietary::DietaryRequest;
use kitchen_inventory_rs::error::{KitchenError, Result};
use kitchen_inventory_rs::interface::{
    display_dish, display_kitchen, display_kitchen_report, prompt_dietary_request,
    prompt_dish_name, prompt_yes_no,
};
use kitchen_inventory_rs::kitchen::Kitchen;
use kitchen_inventory_rs::menu::{load_menu, stock_kitchen};
use kitchen_inventory_rs::models::{CuisineType, Dish};
use kitchen_inventory_rs::simulation::{simulate, SimulationConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let path = Path::new(&cli.file);
    if !path.exists() {
        eprintln!("Menu file not found: {}", cli.file);
        eprintln!("Please ensure menu.csv exists in the current directory.");
        return Ok(());
    }

    let menu = load_menu(path)?;
    let mut kitchen = Kitchen::with_capacity(cli.capacity);
    let rejected = stock_kitchen(&mut kitchen, &menu);
    info!(loaded = kitchen.len(), rejected, "kitchen stocked from menu");
    if rejected > 0 {
        eprintln!(
            "Kitchen is full: {} of {} dishes were not ordered.",
            rejected,
            menu.len()
        );
    }

    match command {
        Command::Report => cmd_report(&kitchen, cli.json),
        Command::List => cmd_list(&kitchen, cli.json),
        Command::Serve { name, yes } => cmd_serve(&mut kitchen, name.as_deref(), yes, cli.json),
        Command::Accommodate { name, flags } => {
            cmd_accommodate(&mut kitchen, name.as_deref(), flags.into(), cli.json)
        }
        Command::Release {
            below,
            cuisine,
            yes,
        } => cmd_release(&mut kitchen, below, cuisine.as_deref(), yes, cli.json),
        Command::Simulate {
            steps,
            serve_ratio,
            seed,
        } => {
            let config = SimulationConfig {
                steps,
                serve_ratio,
                seed,
            };
            cmd_simulate(&mut kitchen, &menu, &config, cli.json)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable status. Goes to stderr under `--json` so stdout stays
/// a single JSON document.
fn status(json: bool, message: &str) {
    if json {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

/// Print kitchen statistics.
fn cmd_report(kitchen: &Kitchen, json: bool) -> Result<()> {
    let report = kitchen.kitchen_report();
    if json {
        return print_json(&report);
    }
    display_kitchen_report(&report);
    Ok(())
}

fn cmd_list(kitchen: &Kitchen, json: bool) -> Result<()> {
    if json {
        let dishes: Vec<&Dish> = kitchen.dishes().collect();
        return print_json(&dishes);
    }
    display_kitchen(kitchen);
    Ok(())
}

/// Look up a held dish by (possibly approximate) name.
fn select_dish(kitchen: &Kitchen, typed: Option<&str>) -> Result<Dish> {
    let names: Vec<&str> = kitchen.dishes().map(|d| d.name()).collect();
    let name = prompt_dish_name(&names, typed)?;
    kitchen
        .find_by_name(&name)
        .cloned()
        .ok_or(KitchenError::DishNotFound(name))
}

fn cmd_serve(kitchen: &mut Kitchen, typed: Option<&str>, yes: bool, json: bool) -> Result<()> {
    if kitchen.is_empty() {
        status(json, "Kitchen is empty; nothing to serve.");
        return Ok(());
    }

    let dish = select_dish(kitchen, typed)?;
    if !yes && !prompt_yes_no(&format!("Serve '{}'?", dish.name()), true)? {
        return Ok(());
    }

    let served = kitchen.serve_dish(&dish);
    if json {
        return print_json(&json!({
            "dish": dish.name(),
            "served": served,
            "report": kitchen.kitchen_report(),
        }));
    }

    if served {
        println!("Served {}.", dish.name());
    } else {
        println!("Could not serve {}.", dish.name());
    }
    cmd_report(kitchen, false)
}

fn cmd_accommodate(
    kitchen: &mut Kitchen,
    typed: Option<&str>,
    request: DietaryRequest,
    json: bool,
) -> Result<()> {
    if kitchen.is_empty() {
        status(json, "Kitchen is empty; nothing to accommodate.");
        return Ok(());
    }

    let dish = select_dish(kitchen, typed)?;
    let request = if request.is_empty() {
        prompt_dietary_request()?
    } else {
        request
    };

    let updated = kitchen
        .accommodate_dish(&dish, &request)
        .ok_or_else(|| KitchenError::DishNotFound(dish.name().to_string()))?;
    if json {
        return print_json(&json!({
            "applied": request,
            "dish": updated,
        }));
    }

    println!("Applied: {}", request.summary());
    println!();
    display_dish(updated);
    Ok(())
}

fn cmd_release(
    kitchen: &mut Kitchen,
    below: Option<u32>,
    cuisine: Option<&str>,
    yes: bool,
    json: bool,
) -> Result<()> {
    let (description, released) = match (below, cuisine) {
        (Some(threshold), _) => {
            let description = format!("dishes under {} minutes", threshold);
            if !yes && !prompt_yes_no(&format!("Release all {}?", description), false)? {
                return Ok(());
            }
            (description, kitchen.release_dishes_below_prep_time(threshold))
        }
        (None, Some(label)) => {
            let cuisine: CuisineType = label.parse()?;
            let description = format!("{} dishes", cuisine.code());
            if !yes && !prompt_yes_no(&format!("Release all {}?", description), false)? {
                return Ok(());
            }
            (description, kitchen.release_dishes_of_cuisine_type(cuisine))
        }
        (None, None) => {
            return Err(KitchenError::InvalidInput(
                "release needs --below or --cuisine".to_string(),
            ));
        }
    };

    if json {
        return print_json(&json!({
            "released": released,
            "filter": description,
            "report": kitchen.kitchen_report(),
        }));
    }

    println!("Released {} {}.", released, description);
    cmd_report(kitchen, false)
}

fn cmd_simulate(
    kitchen: &mut Kitchen,
    menu: &[Dish],
    config: &SimulationConfig,
    json: bool,
) -> Result<()> {
    let summary = simulate(kitchen, menu, config);
    if json {
        return print_json(&json!({
            "simulation": summary,
            "report": kitchen.kitchen_report(),
        }));
    }

    println!(
        "Simulated {} steps: {} placed, {} rejected, {} served.",
        config.steps, summary.placed, summary.rejected, summary.served
    );
    println!();
    cmd_report(kitchen, false)
}
