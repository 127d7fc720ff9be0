use launch_vehicle_estimator::transfer::{EARTH, SuperSyncConfig, plan_super_sync};

fn reference_config() -> SuperSyncConfig {
    SuperSyncConfig {
        leo_altitude_km: 295.0,
        transfer_apoapsis_altitude_km: 90_000.0,
        leo_inclination_deg: 22.5,
    }
}

fn assert_rel(want: f64, got: f64, tol: f64) {
    assert!(
        ((want - got) / want).abs() < tol,
        "want {want}, got {got}"
    );
}

#[test]
fn sequence_orbits_share_the_expected_apsides() {
    let plan = plan_super_sync(&EARTH, &reference_config()).unwrap();
    let leo_radius = EARTH.equatorial_radius_km + 295.0;
    let transfer_apoapsis = EARTH.equatorial_radius_km + 90_000.0;

    assert_eq!(plan.leo.periapsis_km, leo_radius);
    assert_eq!(plan.ito.periapsis_km, leo_radius);
    assert_eq!(plan.ito.apoapsis_km, transfer_apoapsis);
    assert_eq!(plan.sto.apoapsis_km, transfer_apoapsis);
    assert_eq!(plan.sto.periapsis_km, EARTH.synchronous_radius_km);
    assert_eq!(plan.geo.apoapsis_km, EARTH.synchronous_radius_km);
}

#[test]
fn reference_periods_are_reproduced() {
    let plan = plan_super_sync(&EARTH, &reference_config()).unwrap();
    assert_rel(5_425.03357, plan.leo.period_s, 1e-5);
    assert_rel(116_398.013, plan.ito.period_s, 1e-5);
}

#[test]
fn velocities_follow_vis_viva() {
    let plan = plan_super_sync(&EARTH, &reference_config()).unwrap();
    let leo_radius = EARTH.equatorial_radius_km + 295.0;

    // Circular speeds come straight from mu/r.
    assert_rel(
        (EARTH.mu_km3_s2 / leo_radius).sqrt(),
        plan.velocities.leo_km_s,
        1e-12,
    );
    assert_rel(
        (EARTH.mu_km3_s2 / EARTH.synchronous_radius_km).sqrt(),
        plan.velocities.geo_km_s,
        1e-12,
    );
    // The transfer orbit is fastest at its periapsis.
    assert!(plan.velocities.ito_periapsis_km_s > plan.velocities.leo_km_s);
    assert!(plan.velocities.ito_periapsis_km_s > plan.velocities.ito_apoapsis_km_s);
}

#[test]
fn tangential_legs_are_absolute_speed_differences() {
    let plan = plan_super_sync(&EARTH, &reference_config()).unwrap();
    let v = &plan.velocities;
    let dv = &plan.delta_vs;

    assert_rel(
        (v.ito_periapsis_km_s - v.leo_km_s).abs(),
        dv.leo_to_ito_km_s,
        1e-12,
    );
    assert_rel(
        (v.geo_km_s - v.sto_periapsis_km_s).abs(),
        dv.sto_to_geo_km_s,
        1e-12,
    );
    assert_rel(
        dv.leo_to_ito_km_s + dv.ito_to_sto_km_s + dv.sto_to_geo_km_s,
        dv.total_km_s(),
        1e-12,
    );
}

#[test]
fn plane_change_leg_matches_reference() {
    let plan = plan_super_sync(&EARTH, &reference_config()).unwrap();
    assert_rel(0.95257, plan.delta_vs.ito_to_sto_km_s, 1e-5);
}

#[test]
fn zero_inclination_still_costs_the_apsis_speed_difference() {
    let mut config = reference_config();
    config.leo_inclination_deg = 0.0;
    let plan = plan_super_sync(&EARTH, &config).unwrap();
    let expected =
        (plan.velocities.sto_apoapsis_km_s - plan.velocities.ito_apoapsis_km_s).abs();
    assert_rel(expected, plan.delta_vs.ito_to_sto_km_s, 1e-9);
}
