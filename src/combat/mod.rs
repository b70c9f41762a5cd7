//! Dice-based combat resolution

pub mod constants;
pub mod dice;
pub mod resolution;

pub use resolution::{resolve_attack, AttackOutcome};
