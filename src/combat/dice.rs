//! Dice allocation and rolling
//!
//! The allocation table maps current troop counts to dice counts. It is
//! fixed by the game rules; both counts are always strictly positive.

use rand::Rng;

use crate::combat::constants::{DIE_MAX, DIE_MIN, MAX_ATTACKER_DICE, MAX_DEFENDER_DICE};

/// Dice the attacker commits: one per troop beyond the garrison, capped.
///
/// Callers must have validated `troops > 1` first.
pub fn attacker_dice_count(troops: u32) -> u32 {
    MAX_ATTACKER_DICE.min(troops.saturating_sub(1))
}

/// Dice the defender commits: two when the territory can spare them
pub fn defender_dice_count(troops: u32) -> u32 {
    if troops > 1 {
        MAX_DEFENDER_DICE
    } else {
        1
    }
}

/// Roll `count` dice, returned in roll order
pub fn roll_dice(count: u32, rng: &mut impl Rng) -> Vec<u8> {
    (0..count).map(|_| rng.gen_range(DIE_MIN..=DIE_MAX)).collect()
}

/// Descending copy of a roll, the order used for pairwise comparison
pub fn ranked_descending(dice: &[u8]) -> Vec<u8> {
    let mut ranked = dice.to_vec();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    ranked
}
