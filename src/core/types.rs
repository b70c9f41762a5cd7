//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a controlling side.
///
/// In the classic board scenario factions are color labels ("Verde",
/// "Azul"). Owned text with no fixed capacity; validate length only at
/// external-input boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Faction(String);

impl Faction {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Faction {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}
