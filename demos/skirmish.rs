//! Run a custom skirmish and dump the report as text and JSON

use dice_conquest::board::Territory;
use dice_conquest::core::types::Faction;
use dice_conquest::mission::Mission;
use dice_conquest::scenario::{run, ScenarioConfig};

fn main() {
    let config = ScenarioConfig {
        seed: 42,
        territories: vec![
            Territory::new("Peru", Faction::new("Verde"), 8),
            Territory::new("Chile", Faction::new("Azul"), 1),
        ],
        attacker: "Peru".to_string(),
        defender: "Chile".to_string(),
        mission: Some(Mission::eliminate_faction(Faction::new("Azul"))),
    };

    println!(
        "Skirmish: {} attacks {} (seed {})\n",
        config.attacker, config.defender, config.seed
    );

    match run(config) {
        Ok(report) => {
            println!("{}", report.summary());
            match report.to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("report serialization failed: {err}"),
            }
        }
        Err(err) => eprintln!("scenario failed: {err}"),
    }
}
