//! Scenario assembly: configuration, runner, and report

pub mod report;
pub mod run;

pub use report::{AttackResolution, ScenarioReport};
pub use run::{run, ScenarioConfig};
