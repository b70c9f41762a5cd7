//! Attack resolution
//!
//! One attack: allocate dice from the pre-battle troop counts, roll,
//! compare the ranked dice pairwise, apply losses, and transfer the
//! territory when the defender is wiped out. Ties go to the defender.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::territory::Territory;
use crate::combat::dice::{
    attacker_dice_count, defender_dice_count, ranked_descending, roll_dice,
};
use crate::core::error::InvalidAttack;

/// Result of one resolved attack
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Attacker dice in roll order, before ranking
    pub attacker_dice: Vec<u8>,
    /// Defender dice in roll order, before ranking
    pub defender_dice: Vec<u8>,
    pub attacker_losses: u32,
    pub defender_losses: u32,
    /// Did the defender's territory change hands?
    pub conquered: bool,
    /// Troops that moved into the conquered territory (0 when no conquest)
    pub troops_moved: u32,
}

/// Resolve a single attack between two territories.
///
/// Validation runs first and a rejected attack mutates nothing. The random
/// source is injected so a seeded generator makes the whole resolution
/// deterministic.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, InvalidAttack> {
    // Step 1: validate before touching anything
    if attacker.troops <= 1 {
        return Err(InvalidAttack::InsufficientTroops {
            troops: attacker.troops,
        });
    }
    if attacker.owner == defender.owner {
        return Err(InvalidAttack::SameOwner {
            owner: attacker.owner.clone(),
        });
    }

    // Step 2: allocate and roll from the pre-battle troop counts
    let attacker_dice = roll_dice(attacker_dice_count(attacker.troops), rng);
    let defender_dice = roll_dice(defender_dice_count(defender.troops), rng);
    debug!(?attacker_dice, ?defender_dice, "dice rolled");

    Ok(resolve_with_dice(attacker, defender, attacker_dice, defender_dice))
}

/// Deterministic core of the resolution.
///
/// Dice counts must already follow the allocation table for the given
/// troop counts; `resolve_attack` is the only production caller.
pub(crate) fn resolve_with_dice(
    attacker: &mut Territory,
    defender: &mut Territory,
    attacker_dice: Vec<u8>,
    defender_dice: Vec<u8>,
) -> AttackOutcome {
    // Step 3: rank descending and compare pairwise; the defender wins ties.
    // Extra attacker dice beyond the defender's count compare against nothing.
    let attacker_ranked = ranked_descending(&attacker_dice);
    let defender_ranked = ranked_descending(&defender_dice);

    let mut attacker_losses = 0u32;
    let mut defender_losses = 0u32;
    for (attack_die, defense_die) in attacker_ranked.iter().zip(defender_ranked.iter()) {
        if defense_die >= attack_die {
            attacker_losses += 1;
        } else {
            defender_losses += 1;
        }
    }

    // Step 4: both totals are final before either territory is touched.
    // A defender driven past zero saturates; conquest overwrites the count
    // before it can be observed. An undefended territory still rolls its
    // die, and the attack always ends in conquest.
    attacker.troops -= attacker_losses;
    defender.troops = defender.troops.saturating_sub(defender_losses);
    debug!(attacker_losses, defender_losses, "losses applied");

    // Step 5: conquest - owner and troops transfer as one atomic pair.
    // The occupying force is the dice the attacker committed.
    let mut conquered = false;
    let mut troops_moved = 0;
    if defender.troops == 0 {
        troops_moved = attacker_dice.len() as u32;
        debug_assert!(attacker.troops >= troops_moved);
        defender.owner = attacker.owner.clone();
        defender.troops = troops_moved;
        attacker.troops -= troops_moved;
        conquered = true;
        debug!(new_owner = %defender.owner, troops_moved, "territory conquered");
    }

    AttackOutcome {
        attacker_dice,
        defender_dice,
        attacker_losses,
        defender_losses,
        conquered,
        troops_moved,
    }
}
