//! Simulate Binary
//!
//! Monte Carlo estimates for the Trips and Diamonds side bets.
//!
//! Options: --trials, --tasks, --seed, --json

use clap::Parser;
use colored::Colorize;
use ultimatum::simulation::Diamonds;
use ultimatum::simulation::Estimator;
use ultimatum::simulation::Trips;
use ultimatum::simulation::run;
use ultimatum::simulation::seeded;
use ultimatum::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// deals to sample per side bet
    #[arg(long, default_value_t = 100_000)]
    trials: usize,
    /// worker threads, all cores when omitted
    #[arg(long)]
    tasks: Option<usize>,
    /// fixed rng seed, runs single threaded and reproducible
    #[arg(long)]
    seed: Option<u64>,
    /// emit the report as json
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.trials > 0, "trials must be positive");
    if !args.json {
        log();
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.tasks.unwrap_or_else(num_cpus::get))
        .build_global()?;
    let (trips, diamonds): (Trips, Diamonds) = match args.seed {
        Some(seed) => (
            seeded(args.trials, seed),
            seeded(args.trials, seed.wrapping_add(1)),
        ),
        None => (run(args.trials), run(args.trials)),
    };
    if args.json {
        let report = serde_json::json!({
            "trials": args.trials,
            "trips": {
                "expectation": trips.expectation(),
                "counts": trips.counts(),
            },
            "diamonds": {
                "expectation": diamonds.expectation(),
                "counts": diamonds.counts(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", "trips".bold());
        println!("{}", trips);
        println!();
        println!("{}", "diamonds".bold());
        println!("{}", diamonds);
    }
    Ok(())
}
