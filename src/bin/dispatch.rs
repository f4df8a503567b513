//! Dispatch planner CLI.
//!
//! Reads a problem file (`loadNumber pickup dropoff` per line), builds a
//! dispatch plan, and prints one route per line as the original load
//! numbers in visitation order. `--json` emits the plan as JSON instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use load_dispatch::config::{
    SolverConfig, DEFAULT_FIXED_COST_PER_ROUTE, DEFAULT_MAX_ROUTE_MINUTES,
    DEFAULT_MINUTES_PER_DISTANCE_UNIT,
};
use load_dispatch::{input, solver};

#[derive(Debug, Parser)]
#[command(name = "dispatch", about = "Savings-based dispatch planner")]
struct Args {
    /// Path to the problem file.
    path_to_problem: PathBuf,

    /// Maximum driving time for a single route, in minutes.
    #[arg(long, default_value_t = DEFAULT_MAX_ROUTE_MINUTES)]
    max_route_minutes: f64,

    /// Fixed cost attributed to each additional driver.
    #[arg(long, default_value_t = DEFAULT_FIXED_COST_PER_ROUTE)]
    fixed_cost_per_route: f64,

    /// Minutes of driving time per unit of Euclidean distance.
    #[arg(long, default_value_t = DEFAULT_MINUTES_PER_DISTANCE_UNIT)]
    minutes_per_distance_unit: f64,

    /// Emit the plan as JSON instead of one route per line.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PlanOutput {
    routes: Vec<Vec<u64>>,
    num_routes: usize,
    total_cost: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match SolverConfig::new(
        args.max_route_minutes,
        args.fixed_cost_per_route,
        args.minutes_per_distance_unit,
    ) {
        Some(config) => config,
        None => {
            eprintln!(
                "invalid configuration: budget and unit conversion must be positive, \
                 fixed cost non-negative, all finite"
            );
            return ExitCode::FAILURE;
        }
    };

    let loads = match input::read_loads(&args.path_to_problem) {
        Ok(loads) => loads,
        Err(err) => {
            eprintln!("{}: {err}", args.path_to_problem.display());
            return ExitCode::FAILURE;
        }
    };

    let plan = solver::solve(&loads, &config);

    if args.json {
        let output = PlanOutput {
            routes: plan
                .routes()
                .iter()
                .map(|route| route.load_numbers(&loads))
                .collect(),
            num_routes: plan.num_routes(),
            total_cost: plan.total_cost(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("cannot serialize plan: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for route in plan.routes() {
            let numbers: Vec<String> = route
                .load_numbers(&loads)
                .iter()
                .map(u64::to_string)
                .collect();
            println!("[{}]", numbers.join(", "));
        }
    }

    ExitCode::SUCCESS
}
