//! End-to-end scenario tests: registry construction, one attack, one
//! mission check, report rendering.

use dice_conquest::board::{Registry, Territory};
use dice_conquest::core::error::InvalidAttack;
use dice_conquest::core::types::Faction;
use dice_conquest::mission::{self, Mission};
use dice_conquest::scenario::{run, AttackResolution, ScenarioConfig};

#[test]
fn test_reference_scenario_produces_a_report() {
    let report = run(ScenarioConfig::default()).unwrap();

    match &report.attack {
        AttackResolution::Resolved(outcome) => {
            assert!((1..=3).contains(&outcome.attacker_dice.len()));
            assert!((1..=2).contains(&outcome.defender_dice.len()));
        }
        AttackResolution::Rejected(rejection) => {
            panic!("reference attack should be legal, got: {rejection}")
        }
    }

    assert_eq!(report.territories.len(), 2);
    // Troops never appear out of thin air
    let total: u32 = report.territories.iter().map(|t| t.troops).sum();
    assert!(total <= 8);
    for territory in &report.territories {
        assert!(territory.troops >= 1);
    }
    assert!(!report.summary().is_empty());
}

#[test]
fn test_reference_scenario_is_reproducible() {
    let first = run(ScenarioConfig::default()).unwrap();
    let second = run(ScenarioConfig::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rejected_attack_is_reported_not_fatal() {
    let config = ScenarioConfig {
        territories: vec![
            Territory::new("Brasil", Faction::new("Verde"), 1),
            Territory::new("Argentina", Faction::new("Azul"), 3),
        ],
        ..Default::default()
    };

    let report = run(config).unwrap();

    assert!(matches!(
        report.attack,
        AttackResolution::Rejected(InvalidAttack::InsufficientTroops { troops: 1 })
    ));
    assert_eq!(report.territories[0].troops, 1);
    assert_eq!(report.territories[1].troops, 3);
    assert!(!report.mission_accomplished);
}

#[test]
fn test_unknown_territory_is_a_config_error() {
    let config = ScenarioConfig {
        attacker: "Atlantis".to_string(),
        ..Default::default()
    };
    assert!(run(config).is_err());
}

#[test]
fn test_attacking_yourself_is_a_config_error() {
    let config = ScenarioConfig {
        defender: "Brasil".to_string(),
        ..Default::default()
    };
    assert!(run(config).is_err());
}

#[test]
fn test_mission_evaluation_is_idempotent() {
    let registry = Registry::new(vec![
        Territory::new("Brasil", Faction::new("Verde"), 5),
        Territory::new("Argentina", Faction::new("Verde"), 3),
    ]);
    let eliminate_azul = Mission::eliminate_faction(Faction::new("Azul"));

    assert!(mission::evaluate(Some(&eliminate_azul), &registry));
    assert!(mission::evaluate(Some(&eliminate_azul), &registry));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run(ScenarioConfig::default()).unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("mission_accomplished"));
    assert!(json.contains("Brasil"));
}
