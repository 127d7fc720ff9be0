//! Per-vehicle analysis orchestrator: staging performance first, then
//! propellant deduction and flow derivation for each propulsive stage.

use lv_config::{PropellantDb, StageConfig, VehicleConfig};
use lv_propellant::flows::{FlowError, GRange, StageFlows};
use lv_propellant::{PropellantError, PropellantSplit};
use lv_staging::{MassKind, StagePerformance, StagingError};

/// Top-level analysis error, composed from the stage-wise computations.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("staging analysis failed: {0}")]
    Staging(#[from] StagingError),
    #[error("propellant analysis failed: {0}")]
    Propellant(#[from] PropellantError),
    #[error("flow analysis failed: {0}")]
    Flow(#[from] FlowError),
    #[error("stage '{0}' is propulsive but names no propellant mixture")]
    MissingMixture(String),
}

/// Everything derived for one stage. Propellant and flow results are
/// absent for inert stages, and flows additionally require an
/// acceleration limit to size thrust against.
#[derive(Debug, Clone)]
pub struct StageAnalysis {
    pub name: String,
    pub performance: StagePerformance,
    pub propellant: Option<PropellantSplit>,
    pub flows: Option<StageFlows>,
}

/// Whole-vehicle analysis in firing order.
#[derive(Debug, Clone)]
pub struct VehicleAnalysis {
    pub stages: Vec<StageAnalysis>,
    pub total_delta_v_m_s: f64,
    pub total_wet_mass_kg: f64,
    pub total_dry_mass_kg: f64,
}

/// Run the full analysis chain over a validated vehicle description.
///
/// The Stage Performance Engine runs over every stage; the propellant and
/// flow derivations then run per propulsive stage when a propellant
/// database is supplied. A propulsive stage that names no mixture is an
/// eager error in that case. The acceleration limit for a stage resolves
/// stage `g_range`, then vehicle `g_range`, then a constant-thrust band at
/// the vehicle `max_g`; with none of those set, flow derivation is
/// skipped.
pub fn analyze(
    vehicle: &VehicleConfig,
    propellants: Option<&PropellantDb>,
) -> Result<VehicleAnalysis, AnalysisError> {
    let performance = lv_staging::vehicle_performance(&vehicle.stage_order, &vehicle.stages)?;

    let mut stages = Vec::with_capacity(vehicle.stage_order.len());
    for name in &vehicle.stage_order {
        let stage = vehicle
            .stages
            .get(name)
            .ok_or_else(|| StagingError::UnknownStage(name.clone()))?;
        let stage_performance = *performance
            .stages
            .get(name)
            .ok_or_else(|| StagingError::UnknownStage(name.clone()))?;

        let (propellant, flows) = match propellants {
            Some(db) if stage.is_propulsive() => {
                let mixture = stage
                    .mixture
                    .as_deref()
                    .ok_or_else(|| AnalysisError::MissingMixture(name.clone()))?;
                let split = lv_propellant::deduce(
                    db,
                    mixture,
                    stage_performance.propellant_mass_kg(),
                )?;
                let flows = match resolve_g_range(stage, vehicle)? {
                    Some(g_range) => Some(lv_propellant::flows::flows(
                        &split,
                        &stage_performance,
                        &g_range,
                    )?),
                    None => None,
                };
                (Some(split), flows)
            }
            _ => (None, None),
        };

        stages.push(StageAnalysis {
            name: name.clone(),
            performance: stage_performance,
            propellant,
            flows,
        });
    }

    Ok(VehicleAnalysis {
        stages,
        total_delta_v_m_s: performance.total_delta_v_m_s,
        total_wet_mass_kg: lv_staging::total_mass(
            &vehicle.stage_order,
            &vehicle.stages,
            MassKind::Wet,
        )?,
        total_dry_mass_kg: lv_staging::total_mass(
            &vehicle.stage_order,
            &vehicle.stages,
            MassKind::Dry,
        )?,
    })
}

fn resolve_g_range(
    stage: &StageConfig,
    vehicle: &VehicleConfig,
) -> Result<Option<GRange>, FlowError> {
    if let Some([min_g, max_g]) = stage.g_range.or(vehicle.g_range) {
        return GRange::new(min_g, max_g).map(Some);
    }
    if let Some(max_g) = vehicle.max_g {
        return GRange::constant(max_g).map(Some);
    }
    Ok(None)
}
