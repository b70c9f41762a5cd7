use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Faction;

/// A rejected attack.
///
/// Validation runs before any mutation, so a rejected attack leaves both
/// territories exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidAttack {
    #[error("attacker has {troops} troops and must keep one behind the lines")]
    InsufficientTroops { troops: u32 },

    #[error("attacker and defender both belong to {owner}")]
    SameOwner { owner: Faction },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    InvalidAttack(#[from] InvalidAttack),

    #[error("Unknown territory: {0}")]
    UnknownTerritory(String),

    #[error("Territory index out of range: {0}")]
    TerritoryIndex(usize),

    #[error("Attacker and defender must be distinct territories")]
    AliasedTerritories,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
