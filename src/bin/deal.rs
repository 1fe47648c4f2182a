//! Deal Binary
//!
//! Seats a table, runs the board out to the river, and prints the
//! showdown with every category each seat realized.
//!
//! Options: --players, --hole, --seed

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ultimatum::cards::card::Card;
use ultimatum::gameplay::table::Table;
use ultimatum::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// number of seats to deal in
    #[arg(long, default_value_t = 4)]
    players: usize,
    /// force the first seat's hole cards, like "Ah Kh"
    #[arg(long)]
    hole: Option<String>,
    /// fixed shuffle seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

const NAMES: [&str; 7] = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace"];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        (1..=10).contains(&args.players),
        "players must be between 1 and 10"
    );
    log();
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let names = (0..args.players)
        .map(|i| match NAMES.get(i) {
            Some(name) => name.to_string(),
            None => format!("Seat {}", i + 1),
        })
        .collect::<Vec<String>>();
    let mut table = Table::sit(names, rng);
    if let Some(ref hole) = args.hole {
        let cards = hole
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        anyhow::ensure!(cards.len() == 2, "hole must name exactly two cards");
        anyhow::ensure!(
            !(cards[0].rank() == cards[1].rank() && cards[0].suit() == cards[1].suit()),
            "hole cards must be distinct"
        );
        table.rig(0, cards);
    }
    table.deal_holes();
    table.run_out();
    println!("{}", table);
    let results = table.showdown()?;
    let top = results
        .iter()
        .map(|(_, evaluation)| evaluation.best())
        .max()
        .expect("at least one seat");
    for (name, evaluation) in results {
        let headline = format!("{:<12} {}", name, evaluation.best());
        match evaluation.best() == top {
            true => println!("{}", headline.green().bold()),
            false => println!("{}", headline),
        }
        println!("{}", evaluation);
    }
    Ok(())
}
