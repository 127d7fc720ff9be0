use std::collections::BTreeMap;

use launch_vehicle_estimator::config::{MaterialConfig, MixtureConfig, PropellantDb};
use launch_vehicle_estimator::propellant::{PropellantError, deduce};

fn mixture(components: &[&str], ofr: Option<f64>) -> MixtureConfig {
    MixtureConfig {
        name: None,
        components: components.iter().map(|c| c.to_string()).collect(),
        ofr,
        isp_s: None,
        isp_sl_s: None,
        isp_vac_s: None,
    }
}

fn material(liquid_density_kg_l: f64) -> MaterialConfig {
    MaterialConfig {
        liquid_density_kg_l,
        boiling_point_k: None,
    }
}

fn sample_db() -> PropellantDb {
    let mut mixtures = BTreeMap::new();
    mixtures.insert("lox-lh2".to_string(), mixture(&["LOX", "LH2"], Some(8.0)));
    mixtures.insert("hydrazine".to_string(), mixture(&["N2H4"], None));

    let mut materials = BTreeMap::new();
    materials.insert("LOX".to_string(), material(1.141));
    materials.insert("LH2".to_string(), material(0.068));
    materials.insert("N2H4".to_string(), material(1.004));

    PropellantDb {
        mixtures,
        materials,
    }
}

#[test]
fn lox_lh2_split_matches_reference_values() {
    let split = deduce(&sample_db(), "lox-lh2", 100.0).unwrap();
    assert_eq!(split.components.len(), 2);

    let lox = &split.components[0];
    let lh2 = &split.components[1];
    assert_eq!(lox.material, "LOX");
    assert_eq!(lh2.material, "LH2");
    assert!((lox.mass_kg - 88.9).abs() < 0.1, "LOX mass = {}", lox.mass_kg);
    assert!((lh2.mass_kg - 11.1).abs() < 0.1, "LH2 mass = {}", lh2.mass_kg);
    assert!(
        (lox.volume_l - 77.9).abs() < 0.1,
        "LOX volume = {}",
        lox.volume_l
    );
    assert!(
        (lh2.volume_l - 163.4).abs() < 0.1,
        "LH2 volume = {}",
        lh2.volume_l
    );
    assert!((lox.density_kg_l - 1.141).abs() < 1e-9);
    assert!((lh2.density_kg_l - 0.068).abs() < 1e-9);
}

#[test]
fn component_masses_and_fractions_sum_exactly() {
    let total = 26_500.0;
    let split = deduce(&sample_db(), "lox-lh2", total).unwrap();

    let mass_sum: f64 = split.components.iter().map(|c| c.mass_kg).sum();
    assert!(
        (mass_sum - total).abs() / total < 1e-9,
        "mass sum = {mass_sum}"
    );

    let fraction_sum: f64 = split.components.iter().map(|c| c.mass_fraction).sum();
    assert!(
        (fraction_sum - 1.0).abs() < 1e-12,
        "fraction sum = {fraction_sum}"
    );
    assert!((split.total_mass_kg() - total).abs() / total < 1e-9);
}

#[test]
fn oxidizer_fraction_follows_the_mass_ratio() {
    let split = deduce(&sample_db(), "lox-lh2", 100.0).unwrap();
    let expected = 8.0 / 9.0;
    assert!((split.components[0].mass_fraction - expected).abs() < 1e-12);
}

#[test]
fn monopropellant_binds_its_single_material() {
    let split = deduce(&sample_db(), "hydrazine", 100.0).unwrap();
    assert_eq!(split.components.len(), 1);
    let only = &split.components[0];
    assert_eq!(only.material, "N2H4");
    assert_eq!(only.mass_fraction, 1.0);
    assert_eq!(only.mass_kg, 100.0);
    assert!((only.volume_l - 100.0 / 1.004).abs() < 1e-9);
}

#[test]
fn unknown_mixture_is_an_error() {
    let err = deduce(&sample_db(), "lox-lch4", 100.0).unwrap_err();
    assert!(matches!(err, PropellantError::UnknownMixture(id) if id == "lox-lch4"));
}

#[test]
fn unknown_material_is_an_error() {
    let mut db = sample_db();
    db.materials.remove("LH2");
    let err = deduce(&db, "lox-lh2", 100.0).unwrap_err();
    assert!(matches!(err, PropellantError::UnknownMaterial { material, .. } if material == "LH2"));
}

#[test]
fn three_component_mixture_is_unsupported() {
    let mut db = sample_db();
    db.mixtures.insert(
        "triple".to_string(),
        mixture(&["LOX", "LH2", "N2H4"], Some(2.0)),
    );
    let err = deduce(&db, "triple", 100.0).unwrap_err();
    assert!(matches!(err, PropellantError::ComponentCount { count: 3, .. }));
}

#[test]
fn bipropellant_without_ratio_is_an_error() {
    let mut db = sample_db();
    db.mixtures
        .insert("lox-lh2-bad".to_string(), mixture(&["LOX", "LH2"], None));
    let err = deduce(&db, "lox-lh2-bad", 100.0).unwrap_err();
    assert!(matches!(err, PropellantError::MissingMixtureRatio(_)));
}

#[test]
fn non_positive_mass_is_an_error() {
    let err = deduce(&sample_db(), "lox-lh2", 0.0).unwrap_err();
    assert!(matches!(err, PropellantError::NonPositiveMass(_)));
}
