//! Dice Conquest - Entry Point
//!
//! Builds a scenario (the built-in two-territory opening by default, or one
//! loaded from JSON), resolves a single attack, checks the mission, and
//! prints the report.

use std::path::PathBuf;

use clap::Parser;

use dice_conquest::core::error::Result;
use dice_conquest::scenario::{run, ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "dice-conquest", about = "Dice-based territorial conquest simulator")]
struct Args {
    /// RNG seed for reproducible battles (overrides the scenario's seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Load a scenario from a JSON file instead of the built-in one
    #[arg(long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dice_conquest=debug")
        .init();

    let args = Args::parse();

    let mut config = match &args.scenario {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    tracing::info!("Dice Conquest starting...");

    println!("\n=== DICE CONQUEST ===");
    println!("{} attacks {} (seed {})", config.attacker, config.defender, config.seed);
    println!();

    let report = run(config)?;
    println!("{}", report.summary());

    Ok(())
}
