//! Scenario runner: build the registry, resolve one attack, check the mission

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::registry::Registry;
use crate::board::territory::Territory;
use crate::combat::resolution::resolve_attack;
use crate::core::error::{GameError, Result};
use crate::core::types::Faction;
use crate::mission::{self, Mission};
use crate::scenario::report::{AttackResolution, ScenarioReport};

/// Configuration for a single-attack scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub seed: u64,
    pub territories: Vec<Territory>,
    /// Name of the attacking territory
    pub attacker: String,
    /// Name of the defending territory
    pub defender: String,
    pub mission: Option<Mission>,
}

impl Default for ScenarioConfig {
    /// The classic two-territory opening: Verde holds Brasil with five
    /// troops, Azul holds Argentina with three, and Verde's mission is to
    /// eliminate Azul.
    fn default() -> Self {
        Self {
            seed: 12345,
            territories: vec![
                Territory::new("Brasil", Faction::new("Verde"), 5),
                Territory::new("Argentina", Faction::new("Azul"), 3),
            ],
            attacker: "Brasil".to_string(),
            defender: "Argentina".to_string(),
            mission: Some(Mission::eliminate_faction(Faction::new("Azul"))),
        }
    }
}

/// Run one attack and one mission check over a fresh registry.
///
/// An invalid attack is part of the report, not a process failure; only
/// misconfiguration (unknown territory names, aliased pair) errors out.
pub fn run(config: ScenarioConfig) -> Result<ScenarioReport> {
    let mut registry = Registry::new(config.territories);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    info!(territories = registry.len(), "registry built");

    let attacker_idx = registry
        .find(&config.attacker)
        .ok_or_else(|| GameError::UnknownTerritory(config.attacker.clone()))?;
    let defender_idx = registry
        .find(&config.defender)
        .ok_or_else(|| GameError::UnknownTerritory(config.defender.clone()))?;

    let (attacker, defender) = registry.pair_mut(attacker_idx, defender_idx)?;
    info!(attacker = %attacker.name, defender = %defender.name, seed = config.seed, "resolving attack");

    let attack = match resolve_attack(attacker, defender, &mut rng) {
        Ok(outcome) => {
            if outcome.conquered {
                info!(
                    territory = %config.defender,
                    troops_moved = outcome.troops_moved,
                    "territory conquered"
                );
            }
            AttackResolution::Resolved(outcome)
        }
        Err(rejection) => {
            info!(%rejection, "attack rejected");
            AttackResolution::Rejected(rejection)
        }
    };

    let mission_accomplished = mission::evaluate(config.mission.as_ref(), &registry);
    info!(mission_accomplished, "mission evaluated");

    Ok(ScenarioReport {
        attack,
        territories: registry.iter().cloned().collect(),
        mission: config.mission.map(|m| m.description),
        mission_accomplished,
    })
}
