//! Flat territory collection - the single source of truth for ownership

use serde::{Deserialize, Serialize};

use crate::board::territory::Territory;
use crate::core::error::{GameError, Result};

/// All territories in play, in caller-supplied order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    pub fn new(territories: Vec<Territory>) -> Self {
        Self { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Index of the territory with the given name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.territories.iter().position(|t| t.name == name)
    }

    /// Disjoint mutable access to an (attacker, defender) pair.
    ///
    /// Refuses `attacker == defender` so a resolution can never see the
    /// same territory on both sides.
    pub fn pair_mut(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> Result<(&mut Territory, &mut Territory)> {
        if attacker == defender {
            return Err(GameError::AliasedTerritories);
        }
        let len = self.territories.len();
        if attacker >= len || defender >= len {
            return Err(GameError::TerritoryIndex(attacker.max(defender)));
        }

        if attacker < defender {
            let (head, tail) = self.territories.split_at_mut(defender);
            Ok((&mut head[attacker], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(attacker);
            Ok((&mut tail[0], &mut head[defender]))
        }
    }
}
