//! Scenario report rendering and serialization

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::board::territory::Territory;
use crate::combat::resolution::AttackOutcome;
use crate::core::error::{InvalidAttack, Result};

/// How the single attack of the scenario ended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResolution {
    Resolved(AttackOutcome),
    Rejected(InvalidAttack),
}

/// Complete scenario output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub attack: AttackResolution,
    /// Registry state after resolution, in original order
    pub territories: Vec<Territory>,
    /// Description of the checked mission, if one was assigned
    pub mission: Option<String>,
    pub mission_accomplished: bool,
}

impl ScenarioReport {
    pub fn summary(&self) -> String {
        let mut out = String::new();

        match &self.attack {
            AttackResolution::Resolved(outcome) => {
                let _ = writeln!(
                    out,
                    "Attacker rolled {:?}, defender rolled {:?}",
                    outcome.attacker_dice, outcome.defender_dice
                );
                let _ = writeln!(
                    out,
                    "Losses: attacker {}, defender {}",
                    outcome.attacker_losses, outcome.defender_losses
                );
                if outcome.conquered {
                    let _ = writeln!(
                        out,
                        "Conquest! {} troops occupy the territory",
                        outcome.troops_moved
                    );
                }
            }
            AttackResolution::Rejected(rejection) => {
                let _ = writeln!(out, "Attack rejected: {rejection}");
            }
        }

        let _ = writeln!(out, "\nBoard:");
        for territory in &self.territories {
            let _ = writeln!(
                out,
                "  {}: {} ({} troops)",
                territory.name, territory.owner, territory.troops
            );
        }

        if let Some(mission) = &self.mission {
            let status = if self.mission_accomplished {
                "ACCOMPLISHED"
            } else {
                "not accomplished"
            };
            let _ = writeln!(out, "\nMission \"{mission}\": {status}");
        }

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
