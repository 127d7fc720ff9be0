use std::fs;
use std::path::PathBuf;

use launch_vehicle_estimator::analysis::{AnalysisError, analyze};
use launch_vehicle_estimator::config::{load_propellants, load_vehicle};
use tempfile::TempDir;

const VEHICLE_YAML: &str = r#"
name: demo two-stage vehicle
stage_order: [booster, upper, payload]
g_range: [0.5, 5.0]
stages:
  booster:
    wet_mass_kg: 120000.0
    dry_mass_kg: 9000.0
    isp_s: 300.0
    mixture: lox-rp1
  upper:
    wet_mass_kg: 30000.0
    dry_mass_kg: 3500.0
    isp_s: 450.0
    mixture: lox-lh2
  payload:
    wet_mass_kg: 5000.0
    dry_mass_kg: 5000.0
"#;

const PROPELLANTS_YAML: &str = r#"
mixtures:
  lox-lh2:
    name: LOX/hydrogen
    components: [LOX, LH2]
    ofr: 8.0
    isp_vac_s: 450.0
  lox-rp1:
    name: LOX/kerosene
    components: [LOX, RP1]
    ofr: 2.56
    isp_sl_s: 282.0
    isp_vac_s: 311.0
materials:
  LOX:
    liquid_density_kg_l: 1.141
    boiling_point_k: 90.19
  LH2:
    liquid_density_kg_l: 0.068
    boiling_point_k: 20.0
  RP1:
    liquid_density_kg_l: 0.81
"#;

fn write_fixtures(dir: &TempDir, vehicle_yaml: &str) -> (PathBuf, PathBuf) {
    let vehicle_path = dir.path().join("vehicle.yaml");
    let propellant_path = dir.path().join("propellants.yaml");
    fs::write(&vehicle_path, vehicle_yaml).unwrap();
    fs::write(&propellant_path, PROPELLANTS_YAML).unwrap();
    (vehicle_path, propellant_path)
}

#[test]
fn full_analysis_covers_every_stage_in_firing_order() {
    let dir = TempDir::new().unwrap();
    let (vehicle_path, propellant_path) = write_fixtures(&dir, VEHICLE_YAML);
    let vehicle = load_vehicle(&vehicle_path).unwrap();
    let db = load_propellants(&propellant_path).unwrap();

    let analysis = analyze(&vehicle, Some(&db)).unwrap();

    let names: Vec<&str> = analysis.stages.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["booster", "upper", "payload"]);

    let summed: f64 = analysis
        .stages
        .iter()
        .map(|s| s.performance.delta_v_m_s)
        .sum();
    assert!((analysis.total_delta_v_m_s - summed).abs() < 1e-9);
    assert_eq!(analysis.total_wet_mass_kg, 155_000.0);
    assert_eq!(analysis.total_dry_mass_kg, 17_500.0);
}

#[test]
fn propulsive_stages_carry_propellant_and_flow_results() {
    let dir = TempDir::new().unwrap();
    let (vehicle_path, propellant_path) = write_fixtures(&dir, VEHICLE_YAML);
    let vehicle = load_vehicle(&vehicle_path).unwrap();
    let db = load_propellants(&propellant_path).unwrap();

    let analysis = analyze(&vehicle, Some(&db)).unwrap();

    let booster = &analysis.stages[0];
    let split = booster.propellant.as_ref().unwrap();
    assert_eq!(split.mixture, "lox-rp1");
    assert!(
        (split.total_mass_kg() - booster.performance.propellant_mass_kg()).abs() < 1e-6
    );
    let flows = booster.flows.as_ref().unwrap();
    assert_eq!(
        flows.thrust_design_n,
        flows.thrust_ignition_n.min(flows.thrust_burnout_n)
    );

    let payload = &analysis.stages[2];
    assert!(payload.propellant.is_none());
    assert!(payload.flows.is_none());
}

#[test]
fn inert_stages_are_skipped_without_a_database_too() {
    let dir = TempDir::new().unwrap();
    let (vehicle_path, _) = write_fixtures(&dir, VEHICLE_YAML);
    let vehicle = load_vehicle(&vehicle_path).unwrap();

    let analysis = analyze(&vehicle, None).unwrap();
    assert!(analysis.stages.iter().all(|s| s.propellant.is_none()));
    assert!(analysis.total_delta_v_m_s > 0.0);
}

#[test]
fn max_g_fallback_sizes_constant_thrust_at_burnout() {
    let vehicle_yaml = VEHICLE_YAML.replace("g_range: [0.5, 5.0]", "max_g: 5.0");
    let dir = TempDir::new().unwrap();
    let (vehicle_path, propellant_path) = write_fixtures(&dir, &vehicle_yaml);
    let vehicle = load_vehicle(&vehicle_path).unwrap();
    let db = load_propellants(&propellant_path).unwrap();

    let analysis = analyze(&vehicle, Some(&db)).unwrap();
    let upper = &analysis.stages[1];
    let flows = upper.flows.as_ref().unwrap();
    assert_eq!(flows.thrust_design_n, flows.thrust_burnout_n);
    assert!((flows.g_burnout - 5.0).abs() < 1e-12);
}

#[test]
fn propulsive_stage_without_mixture_is_an_error() {
    let vehicle_yaml = VEHICLE_YAML.replace("    mixture: lox-lh2\n", "");
    let dir = TempDir::new().unwrap();
    let (vehicle_path, propellant_path) = write_fixtures(&dir, &vehicle_yaml);
    let vehicle = load_vehicle(&vehicle_path).unwrap();
    let db = load_propellants(&propellant_path).unwrap();

    let err = analyze(&vehicle, Some(&db)).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingMixture(stage) if stage == "upper"));
}

#[test]
fn version_is_exposed_for_smoke_tests() {
    assert!(!launch_vehicle_estimator::version().is_empty());
}
