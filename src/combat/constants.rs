//! Combat rule constants - the fixed dice table of the classic game
//!
//! These are game rules, not tunables. Changing them changes the game.

/// Most dice an attacker may commit to one battle
pub const MAX_ATTACKER_DICE: u32 = 3;

/// Most dice a defender may commit
pub const MAX_DEFENDER_DICE: u32 = 2;

/// Lowest face of a die
pub const DIE_MIN: u8 = 1;

/// Highest face of a die
pub const DIE_MAX: u8 = 6;
