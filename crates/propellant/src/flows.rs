//! Flow and thrust derivation for a stage burn under acceleration limits.
//!
//! Thrust is modeled as constant over the burn. The ignition-sized thrust
//! (ignition mass at the minimum G) and the burnout-sized thrust (burnout
//! mass at the maximum G) bracket the admissible range; the smaller of the
//! two governs, since it is the one that can be held for the whole burn
//! without leaving the G-range at either end.

use lv_core::constants::G0;
use lv_core::units::kg_to_lbm;
use lv_staging::StagePerformance;
use thiserror::Error;

use crate::PropellantSplit;

/// Errors surfaced while deriving flow properties.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("flow analysis needs a propulsive stage; specific impulse was {0} s")]
    NonPositiveIsp(f64),
    #[error("acceleration limits must be positive and ordered, got [{min_g}, {max_g}]")]
    InvalidGRange { min_g: f64, max_g: f64 },
}

/// Admissible acceleration band in units of standard gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GRange {
    pub min_g: f64,
    pub max_g: f64,
}

impl GRange {
    /// Build a validated range: both bounds positive, minimum not above
    /// maximum.
    pub fn new(min_g: f64, max_g: f64) -> Result<Self, FlowError> {
        if min_g <= 0.0 || max_g <= 0.0 || min_g > max_g {
            return Err(FlowError::InvalidGRange { min_g, max_g });
        }
        Ok(Self { min_g, max_g })
    }

    /// Degenerate range for constant-thrust sizing at a single G limit.
    pub fn constant(g: f64) -> Result<Self, FlowError> {
        Self::new(g, g)
    }
}

/// Derived flow, thrust, and burn-time properties for one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageFlows {
    /// Total mass flow under the design thrust (kg/s).
    pub mass_flow_kg_s: f64,
    /// Per-component mass flows under the design thrust (kg/s), ordered as
    /// in the propellant split.
    pub component_mass_flows_kg_s: Vec<f64>,
    /// Total mass flow under the design thrust (lbm/s).
    pub mass_flow_lbm_s: f64,
    /// Per-component mass flows under the design thrust (lbm/s).
    pub component_mass_flows_lbm_s: Vec<f64>,
    /// Total mass flow at the larger of the two thrust bounds (kg/s);
    /// sets the burn-time lower bound.
    pub mass_flow_max_kg_s: f64,
    /// Total volumetric flow (l/s).
    pub volume_flow_l_s: f64,
    /// Per-component volumetric flows (l/s).
    pub component_volume_flows_l_s: Vec<f64>,
    /// Burn duration at the larger thrust bound (s).
    pub burn_time_min_s: f64,
    /// Burn duration at the design thrust (s).
    pub burn_time_max_s: f64,
    /// Acceleration at ignition under the design thrust, in G.
    pub g_ignition: f64,
    /// Acceleration at burnout under the design thrust, in G.
    pub g_burnout: f64,
    /// Ignition-sized thrust: ignition weight at the minimum G (N).
    pub thrust_ignition_n: f64,
    /// Burnout-sized thrust: burnout weight at the maximum G (N).
    pub thrust_burnout_n: f64,
    /// Governing thrust, the smaller of the two bounds (N).
    pub thrust_design_n: f64,
    /// Vehicle weight at ignition (N).
    pub weight_ignition_n: f64,
    /// Vehicle weight at burnout (N).
    pub weight_burnout_n: f64,
}

/// Derive flow properties from a propellant split, the stage performance
/// numbers, and the admissible G-range.
pub fn flows(
    split: &PropellantSplit,
    performance: &StagePerformance,
    g_range: &GRange,
) -> Result<StageFlows, FlowError> {
    if performance.isp_s <= 0.0 {
        return Err(FlowError::NonPositiveIsp(performance.isp_s));
    }
    if g_range.min_g <= 0.0 || g_range.max_g <= 0.0 || g_range.min_g > g_range.max_g {
        return Err(FlowError::InvalidGRange {
            min_g: g_range.min_g,
            max_g: g_range.max_g,
        });
    }

    let thrust_ignition_n = performance.ignition_mass_kg * G0 * g_range.min_g;
    let thrust_burnout_n = performance.burnout_mass_kg * G0 * g_range.max_g;
    let thrust_design_n = thrust_ignition_n.min(thrust_burnout_n);
    let thrust_max_n = thrust_ignition_n.max(thrust_burnout_n);

    let exhaust_velocity_m_s = performance.isp_s * G0;
    let mass_flow_kg_s = thrust_design_n / exhaust_velocity_m_s;
    let mass_flow_max_kg_s = thrust_max_n / exhaust_velocity_m_s;

    let component_mass_flows_kg_s: Vec<f64> = split
        .components
        .iter()
        .map(|c| c.mass_fraction * mass_flow_kg_s)
        .collect();
    let component_mass_flows_lbm_s: Vec<f64> = component_mass_flows_kg_s
        .iter()
        .map(|&f| kg_to_lbm(f))
        .collect();
    let component_volume_flows_l_s: Vec<f64> = split
        .components
        .iter()
        .zip(&component_mass_flows_kg_s)
        .map(|(c, &f)| f / c.density_kg_l)
        .collect();
    let volume_flow_l_s = component_volume_flows_l_s.iter().sum();

    let propellant_mass_kg = performance.propellant_mass_kg();
    let weight_ignition_n = performance.ignition_mass_kg * G0;
    let weight_burnout_n = performance.burnout_mass_kg * G0;

    Ok(StageFlows {
        mass_flow_kg_s,
        component_mass_flows_kg_s,
        mass_flow_lbm_s: kg_to_lbm(mass_flow_kg_s),
        component_mass_flows_lbm_s,
        mass_flow_max_kg_s,
        volume_flow_l_s,
        component_volume_flows_l_s,
        burn_time_min_s: propellant_mass_kg / mass_flow_max_kg_s,
        burn_time_max_s: propellant_mass_kg / mass_flow_kg_s,
        g_ignition: thrust_design_n / weight_ignition_n,
        g_burnout: thrust_design_n / weight_burnout_n,
        thrust_ignition_n,
        thrust_burnout_n,
        thrust_design_n,
        weight_ignition_n,
        weight_burnout_n,
    })
}
