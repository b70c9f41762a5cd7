//! Territory - a named holding with a controlling faction and a troop count

use serde::{Deserialize, Serialize};

use crate::core::types::Faction;

/// A single territory on the board
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Unique within the registry
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            troops,
        }
    }
}
