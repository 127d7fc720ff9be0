//! Multi-stage vehicle performance: mass accounting and the rocket
//! equation applied per stage over a firing order.

use std::collections::BTreeMap;

use lv_config::StageConfig;
use lv_core::constants::G0;
use thiserror::Error;

/// Errors surfaced by staging computations.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("stage '{0}' is not defined in the vehicle description")]
    UnknownStage(String),
    #[error("stage '{stage}': wet mass {wet_mass_kg} kg is below dry mass {dry_mass_kg} kg")]
    NegativePropellant {
        stage: String,
        wet_mass_kg: f64,
        dry_mass_kg: f64,
    },
    #[error("stage '{0}': masses must be positive")]
    NonPositiveMass(String),
}

/// Which stored mass attribute to sum in [`total_mass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassKind {
    Wet,
    Dry,
}

/// Derived performance numbers for one stage burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagePerformance {
    /// Mass of this stage plus everything still attached above it (kg).
    pub ignition_mass_kg: f64,
    /// Ignition mass less the active stage's propellant (kg).
    pub burnout_mass_kg: f64,
    /// Specific impulse of the active stage (s); zero for inert stages.
    pub isp_s: f64,
    /// Velocity change imparted by the burn (m/s).
    pub delta_v_m_s: f64,
}

impl StagePerformance {
    /// Propellant consumed by the burn (kilograms).
    pub fn propellant_mass_kg(&self) -> f64 {
        self.ignition_mass_kg - self.burnout_mass_kg
    }
}

/// Whole-vehicle performance over a firing order.
#[derive(Debug, Clone, PartialEq)]
pub struct VehiclePerformance {
    /// Per-stage results keyed by stage name.
    pub stages: BTreeMap<String, StagePerformance>,
    /// Sum of per-stage delta-V over the firing order (m/s).
    pub total_delta_v_m_s: f64,
}

/// Tsiolkovsky rocket equation: delta-V from effective exhaust velocity and
/// the ignition/burnout mass ratio.
pub fn rocket_equation(
    exhaust_velocity_m_s: f64,
    ignition_mass_kg: f64,
    burnout_mass_kg: f64,
) -> f64 {
    exhaust_velocity_m_s * (ignition_mass_kg / burnout_mass_kg).ln()
}

/// Inverse rocket equation: the burnout mass that yields `delta_v_m_s` from
/// `ignition_mass_kg` at the given effective exhaust velocity.
pub fn burnout_mass_for_delta_v(
    delta_v_m_s: f64,
    exhaust_velocity_m_s: f64,
    ignition_mass_kg: f64,
) -> f64 {
    ignition_mass_kg * (-delta_v_m_s / exhaust_velocity_m_s).exp()
}

/// Sum a stored mass attribute over the given stage order (kilograms).
pub fn total_mass(
    stage_order: &[String],
    stages: &BTreeMap<String, StageConfig>,
    kind: MassKind,
) -> Result<f64, StagingError> {
    let mut total = 0.0;
    for name in stage_order {
        let stage = lookup(stages, name)?;
        total += match kind {
            MassKind::Wet => stage.wet_mass_kg,
            MassKind::Dry => stage.dry_mass_kg,
        };
    }
    Ok(total)
}

/// Compute per-stage and aggregate performance for the given firing order.
///
/// For stage `i`, the sub-stack `stage_order[i..]` is still attached:
/// ignition mass is its wet-mass sum, burnout mass subtracts the active
/// stage's propellant, and delta-V follows from the rocket equation with
/// effective exhaust velocity `isp_s * G0`. Inert stages (Isp zero)
/// contribute mass and zero delta-V; callers doing propulsion-specific
/// work must skip them explicitly.
pub fn vehicle_performance(
    stage_order: &[String],
    stages: &BTreeMap<String, StageConfig>,
) -> Result<VehiclePerformance, StagingError> {
    let mut results = BTreeMap::new();
    let mut total_delta_v = 0.0;

    for (index, name) in stage_order.iter().enumerate() {
        let active = lookup(stages, name)?;
        if active.wet_mass_kg <= 0.0 || active.dry_mass_kg <= 0.0 {
            return Err(StagingError::NonPositiveMass(name.clone()));
        }
        if active.wet_mass_kg < active.dry_mass_kg {
            return Err(StagingError::NegativePropellant {
                stage: name.clone(),
                wet_mass_kg: active.wet_mass_kg,
                dry_mass_kg: active.dry_mass_kg,
            });
        }

        let ignition_mass_kg = total_mass(&stage_order[index..], stages, MassKind::Wet)?;
        let burnout_mass_kg = ignition_mass_kg - active.propellant_mass_kg();
        let delta_v_m_s = rocket_equation(active.isp_s * G0, ignition_mass_kg, burnout_mass_kg);

        total_delta_v += delta_v_m_s;
        results.insert(
            name.clone(),
            StagePerformance {
                ignition_mass_kg,
                burnout_mass_kg,
                isp_s: active.isp_s,
                delta_v_m_s,
            },
        );
    }

    Ok(VehiclePerformance {
        stages: results,
        total_delta_v_m_s: total_delta_v,
    })
}

fn lookup<'a>(
    stages: &'a BTreeMap<String, StageConfig>,
    name: &str,
) -> Result<&'a StageConfig, StagingError> {
    stages
        .get(name)
        .ok_or_else(|| StagingError::UnknownStage(name.to_string()))
}
