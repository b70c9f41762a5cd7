//! Dice Conquest - Turn-Based Territorial Conflict Simulator

pub mod board;
pub mod combat;
pub mod core;
pub mod mission;
pub mod scenario;
