//! Report section assembly shared by the estimator binaries.
//!
//! Each builder turns computed results into labeled rows; rendering is
//! left entirely to the `report` writers. Key quantities carry both
//! metric and imperial columns, matching the audience of vehicle
//! performance reports.

use launch_vehicle_estimator::analysis::{StageAnalysis, VehicleAnalysis};
use launch_vehicle_estimator::report::{NumFmt, Row, Section, Value};
use launch_vehicle_estimator::time::s_to_hms;
use launch_vehicle_estimator::transfer::SuperSyncPlan;
use launch_vehicle_estimator::units::{kg_to_lbm, m_to_ft, n_to_lbf};

const WIDE: NumFmt = NumFmt::fixed(11, 4);
const NARROW: NumFmt = NumFmt::fixed(7, 3);
const SPEED: NumFmt = NumFmt::fixed(8, 5);

/// Stage masses and delta-V, one section per stage plus the vehicle total.
pub fn performance_sections(analysis: &VehicleAnalysis) -> Vec<Section> {
    let mut sections = vec![Section::new("Mass and deltaV:", Vec::new())];
    for stage in &analysis.stages {
        let perf = &stage.performance;
        sections.push(Section::new(
            format!("Stage: {}", stage.name),
            vec![
                Row::numeric(
                    "Mignite (kg, lbm)",
                    WIDE,
                    &[perf.ignition_mass_kg, kg_to_lbm(perf.ignition_mass_kg)],
                ),
                Row::numeric(
                    "Mburnout (kg, lbm)",
                    WIDE,
                    &[perf.burnout_mass_kg, kg_to_lbm(perf.burnout_mass_kg)],
                ),
                Row::numeric(
                    "deltaV (m/s, ft/s)",
                    WIDE,
                    &[perf.delta_v_m_s, m_to_ft(perf.delta_v_m_s)],
                ),
            ],
        ));
    }
    sections.push(Section::new(
        "Total deltaV:",
        vec![Row::numeric(
            "Total deltaV (m/s, ft/s)",
            WIDE,
            &[
                analysis.total_delta_v_m_s,
                m_to_ft(analysis.total_delta_v_m_s),
            ],
        )],
    ));
    sections
}

/// Propellant split and flow/thrust rows for every propulsive stage.
pub fn propellant_sections(analysis: &VehicleAnalysis) -> Vec<Section> {
    analysis
        .stages
        .iter()
        .filter(|stage| stage.propellant.is_some())
        .map(propellant_section)
        .collect()
}

fn propellant_section(stage: &StageAnalysis) -> Section {
    let mut rows = Vec::new();
    if let Some(split) = &stage.propellant {
        let mut names: Vec<Value> = split
            .components
            .iter()
            .map(|c| c.material.as_str().into())
            .collect();
        names.push("[sum]".into());
        rows.push(Row::new("matl names", NARROW, names));
        rows.push(Row::numeric(
            "liqdens (kg/l)",
            NARROW,
            &split
                .components
                .iter()
                .map(|c| c.density_kg_l)
                .collect::<Vec<_>>(),
        ));
        rows.push(with_sum(
            "masses (kg)",
            NARROW,
            split.components.iter().map(|c| c.mass_kg).collect(),
        ));
        rows.push(with_sum(
            "volume (l)",
            NARROW,
            split.components.iter().map(|c| c.volume_l).collect(),
        ));
        rows.push(Row::numeric(
            "avg dens (kg/l)",
            WIDE,
            &[split.mean_density_kg_l()],
        ));
    }
    if let Some(flows) = &stage.flows {
        let perf = &stage.performance;
        rows.push(with_total(
            "massflow (kg/s)",
            NARROW,
            &flows.component_mass_flows_kg_s,
            flows.mass_flow_kg_s,
        ));
        rows.push(with_total(
            "massflow (lbm/s)",
            NARROW,
            &flows.component_mass_flows_lbm_s,
            flows.mass_flow_lbm_s,
        ));
        rows.push(Row::numeric(
            "massflow max (kg/s)",
            NARROW,
            &[flows.mass_flow_max_kg_s],
        ));
        rows.push(with_total(
            "volflow (l/s)",
            NARROW,
            &flows.component_volume_flows_l_s,
            flows.volume_flow_l_s,
        ));
        rows.push(Row::numeric(
            "burn time min (s)",
            WIDE,
            &[flows.burn_time_min_s],
        ));
        rows.push(Row::numeric(
            "burn time max (s)",
            WIDE,
            &[flows.burn_time_max_s],
        ));
        rows.push(Row::numeric(
            "G (ignite, burnout)",
            NARROW,
            &[flows.g_ignition, flows.g_burnout],
        ));
        rows.push(Row::numeric(
            "thrust ignite (N, lbf)",
            WIDE,
            &[flows.thrust_ignition_n, n_to_lbf(flows.thrust_ignition_n)],
        ));
        rows.push(Row::numeric(
            "thrust burnout (N, lbf)",
            WIDE,
            &[flows.thrust_burnout_n, n_to_lbf(flows.thrust_burnout_n)],
        ));
        rows.push(Row::numeric(
            "thrust design (N, lbf)",
            WIDE,
            &[flows.thrust_design_n, n_to_lbf(flows.thrust_design_n)],
        ));
        rows.push(Row::numeric(
            "wt ignite (N, lbf)",
            WIDE,
            &[flows.weight_ignition_n, n_to_lbf(flows.weight_ignition_n)],
        ));
        rows.push(Row::numeric(
            "wt burnout (N, lbf)",
            WIDE,
            &[flows.weight_burnout_n, n_to_lbf(flows.weight_burnout_n)],
        ));
        rows.push(Row::numeric(
            "wet mass (kg, lbm)",
            WIDE,
            &[perf.ignition_mass_kg, kg_to_lbm(perf.ignition_mass_kg)],
        ));
        rows.push(Row::numeric(
            "dry mass (kg, lbm)",
            WIDE,
            &[perf.burnout_mass_kg, kg_to_lbm(perf.burnout_mass_kg)],
        ));
    }
    Section::new(format!("Propellants, stage: {}", stage.name), rows)
}

/// Vehicle mass totals.
pub fn totals_section(analysis: &VehicleAnalysis) -> Section {
    Section::new(
        "Totals:",
        vec![
            Row::numeric(
                "wet mass (kg, lbm)",
                WIDE,
                &[
                    analysis.total_wet_mass_kg,
                    kg_to_lbm(analysis.total_wet_mass_kg),
                ],
            ),
            Row::numeric(
                "dry mass (kg, lbm)",
                WIDE,
                &[
                    analysis.total_dry_mass_kg,
                    kg_to_lbm(analysis.total_dry_mass_kg),
                ],
            ),
        ],
    )
}

/// The super-synchronous maneuver report: periods, shapes, velocities,
/// and the delta-V budget.
pub fn super_sync_sections(plan: &SuperSyncPlan) -> Vec<Section> {
    let orbits = [
        ("LEO", &plan.leo),
        ("ITO", &plan.ito),
        ("STO", &plan.sto),
        ("GEO", &plan.geo),
    ];

    let period_rows = orbits
        .iter()
        .map(|(name, orbit)| {
            let (h, m, s) = s_to_hms(orbit.period_s);
            Row::new(
                format!("{name} period (s)"),
                NumFmt::fixed(11, 1),
                vec![
                    orbit.period_s.into(),
                    format!("{h}h {m}m {s:.1}s").as_str().into(),
                ],
            )
        })
        .collect();

    let shape_rows = orbits
        .iter()
        .flat_map(|(name, orbit)| {
            [
                Row::numeric(
                    format!("{name} smj (km), ecc"),
                    NumFmt::fixed(11, 3),
                    &[orbit.semimajor_km, orbit.eccentricity],
                ),
                Row::numeric(
                    format!("{name} apo, peri (km)"),
                    NumFmt::fixed(11, 1),
                    &[orbit.apoapsis_km, orbit.periapsis_km],
                ),
            ]
        })
        .collect();

    let v = &plan.velocities;
    let velocity_rows = [
        ("LEO", plan.leo.periapsis_km, v.leo_km_s),
        ("ITO", plan.ito.periapsis_km, v.ito_periapsis_km_s),
        ("ITO", plan.ito.apoapsis_km, v.ito_apoapsis_km_s),
        ("STO", plan.sto.apoapsis_km, v.sto_apoapsis_km_s),
        ("STO", plan.sto.periapsis_km, v.sto_periapsis_km_s),
        ("GEO", plan.geo.periapsis_km, v.geo_km_s),
    ]
    .into_iter()
    .map(|(name, radius_km, speed)| {
        Row::numeric(
            format!("{name} velo at {radius_km:.0} km"),
            SPEED,
            &[speed],
        )
    })
    .collect();

    let dv = &plan.delta_vs;
    let delta_v_rows = vec![
        Row::numeric(
            format!("LEO->ITO dv at {:.0} km", plan.ito.periapsis_km),
            SPEED,
            &[dv.leo_to_ito_km_s],
        ),
        Row::numeric(
            format!("ITO->STO dv at {:.0} km", plan.ito.apoapsis_km),
            SPEED,
            &[dv.ito_to_sto_km_s],
        ),
        Row::numeric(
            format!("STO->GEO dv at {:.0} km", plan.geo.semimajor_km),
            SPEED,
            &[dv.sto_to_geo_km_s],
        ),
        Row::numeric("total dv (km/s)", SPEED, &[dv.total_km_s()]),
    ];

    vec![
        Section::new("Periods:", period_rows),
        Section::new("Orbit shapes:", shape_rows),
        Section::new("Velocities (km/s):", velocity_rows),
        Section::new("Delta-V budget (km/s):", delta_v_rows),
    ]
}

fn with_sum(label: &str, fmt: NumFmt, mut values: Vec<f64>) -> Row {
    let total: f64 = values.iter().sum();
    values.push(total);
    Row::numeric(label, fmt, &values)
}

fn with_total(label: &str, fmt: NumFmt, components: &[f64], total: f64) -> Row {
    let mut values = components.to_vec();
    values.push(total);
    Row::numeric(label, fmt, &values)
}
