//! Victory missions evaluated against the territory registry

use serde::{Deserialize, Serialize};

use crate::board::registry::Registry;
use crate::core::types::Faction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    /// Wipe every territory of a faction off the board
    EliminateFaction,
    /// Hold a number of territories. Declared for mission cards that use
    /// it, but no evaluation rule is defined yet.
    OccupyCount,
}

/// A victory predicate assigned to a player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub kind: MissionKind,
    pub target_faction: Faction,
    /// Reserved for `OccupyCount`
    pub target_count: u32,
    pub description: String,
}

impl Mission {
    pub fn eliminate_faction(target: Faction) -> Self {
        let description = format!("Destroy all armies of the {target} faction");
        Self {
            kind: MissionKind::EliminateFaction,
            target_faction: target,
            target_count: 0,
            description,
        }
    }
}

/// Check a mission against the current registry.
///
/// Pure read: the registry is never mutated, and evaluating twice without
/// mutating it yields the same answer. A player with no mission has simply
/// not won.
pub fn evaluate(mission: Option<&Mission>, registry: &Registry) -> bool {
    let Some(mission) = mission else {
        return false;
    };

    match mission.kind {
        // Satisfied when the target faction holds nothing, including the
        // degenerate empty board
        MissionKind::EliminateFaction => registry
            .iter()
            .all(|territory| territory.owner != mission.target_faction),
        // No satisfaction rule defined; never satisfied until one is
        MissionKind::OccupyCount => false,
    }
}
