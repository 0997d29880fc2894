//! Built-in scenario and scenario file tests.

use std::io::Write;

use unit_core::prelude::*;
use unit_demo::builtin;
use unit_demo::loader::{load_scenario, LoadError};
use unit_test_utils::capture::NarrationCapture;

fn run_builtin(name: &str) -> ScenarioReport {
    builtin::find(name).unwrap().unwrap().run().unwrap()
}

// =============================================================================
// Built-in scenarios
// =============================================================================

#[test]
fn base_scenario_final_state() {
    let report = run_builtin("base");

    assert_eq!(report.survivor("clap1").unwrap().energy_points, 9);

    let clap2 = report.survivor("clap2").unwrap();
    assert_eq!((clap2.hit_points, clap2.energy_points), (8, 9));

    let clap3 = report.survivor("clap3").unwrap();
    assert_eq!((clap3.hit_points, clap3.energy_points), (10, 0));

    let clap4 = report.survivor("clap4").unwrap();
    assert_eq!((clap4.hit_points, clap4.energy_points), (0, 10));

    let clap7 = report.survivor("clap7").unwrap();
    assert_eq!(clap7, &UnitSnapshot::fresh(UnitKind::Base, "ORIGINAL"));

    // 11th attack + repair on ENERGY-TEST, attack + repair on HP-TEST
    assert_eq!(report.rejections(), 4);
}

#[test]
fn defense_scenario_guard_survives_exhaustion() {
    let report = run_builtin("defense");

    assert_eq!(report.survivors.len(), 1);
    let energy = report.survivor("energy").unwrap();
    assert_eq!(energy.energy_points, 0);
    assert_eq!(report.rejections(), 1);

    let last = report.narrations.last().unwrap();
    assert_eq!(last.event(), "guard_gate");
    assert_eq!(last.name(), "ENERGY-TEST");
}

#[test]
fn defense_scenario_disposes_scoped_units_early() {
    let scenario = builtin::find("defense").unwrap().unwrap();
    let capture = NarrationCapture::new();
    capture.run(|| scenario.run().unwrap());

    let disposed: Vec<_> = capture
        .records()
        .into_iter()
        .filter(|r| r.event == "disposed" && r.kind == "ScavTrap")
        .map(|r| r.unit)
        .collect();
    // ASSIGNED took GUARDIAN's name on assignment
    assert_eq!(
        disposed,
        vec!["SC4V-TP", "GUARDIAN", "GUARDIAN", "GUARDIAN", "ENERGY-TEST"]
    );
}

#[test]
fn offense_scenario_final_state() {
    let report = run_builtin("offense");

    let frag = report.survivor("frag").unwrap();
    assert_eq!((frag.hit_points, frag.energy_points), (70, 98));

    let frag4 = report.survivor("frag4").unwrap();
    assert_eq!(frag4, &UnitSnapshot::fresh(UnitKind::HeavyOffense, "FRAGMENT"));

    let energy = report.survivor("energy").unwrap();
    assert_eq!(energy.energy_points, 0);
    assert_eq!(report.rejections(), 1);
    assert_eq!(report.narrations.last().unwrap().event(), "high_fives");
}

// =============================================================================
// Scenario files
// =============================================================================

#[test]
fn load_scenario_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"ScenarioData(
            name: "from_file",
            steps: [
                Spawn(slot: "f", kind: HeavyOffense, name: Some("FR4G-TP")),
                TakeDamage(slot: "f", amount: 30),
                Repair(slot: "f", amount: 20),
            ],
        )"#
    )
    .unwrap();

    let scenario = load_scenario(file.path()).unwrap();
    let report = scenario.run().unwrap();
    let frag = report.survivor("f").unwrap();
    assert_eq!((frag.hit_points, frag.energy_points), (90, 99));
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_scenario(dir.path().join("missing.ron")).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
}

#[test]
fn load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "ScenarioData(name: \"broken\", steps: [Fly(slot: \"x\")])").unwrap();
    let err = load_scenario(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::ParseError(_)));
}

#[test]
fn report_serializes_to_json() {
    let report = run_builtin("offense");
    let json = serde_json::to_string(&report).unwrap();
    let back: ScenarioReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
