//! Super-synchronous transfer sequencing: LEO to geostationary orbit via
//! an intermediate and a super-synchronous transfer orbit.
//!
//! The sequence is LEO -> ITO -> STO -> GEO. The first and last burns are
//! tangential at a shared radius; the middle burn is a plane change at the
//! apoapsis the two transfer orbits share, absorbing the initial LEO
//! inclination.

use lv_orbits::{Elliptical, OrbitError, OrbitSpec};
use thiserror::Error;

/// Central-body constants for the sequencer, kilometre domain. Passed as a
/// value so tests can substitute alternates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Gravitational parameter, km³/s².
    pub mu_km3_s2: f64,
    pub equatorial_radius_km: f64,
    /// Radius of the synchronous (stationary) circular orbit, km.
    pub synchronous_radius_km: f64,
}

/// Earth, the only body shipped with the estimator.
pub const EARTH: Body = Body {
    mu_km3_s2: 398_600.4418,
    equatorial_radius_km: 6_378.1,
    synchronous_radius_km: 42_164.0,
};

/// Inputs for the super-synchronous sequence. Altitudes are above the
/// surface; the inclination is the initial LEO inclination to the equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperSyncConfig {
    pub leo_altitude_km: f64,
    pub transfer_apoapsis_altitude_km: f64,
    pub leo_inclination_deg: f64,
}

/// Errors surfaced while sequencing the maneuver.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("orbit construction failed: {0}")]
    Orbit(#[from] OrbitError),
}

/// Speeds at the interesting points of the sequence (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceVelocities {
    pub leo_km_s: f64,
    pub ito_periapsis_km_s: f64,
    pub ito_apoapsis_km_s: f64,
    pub sto_apoapsis_km_s: f64,
    pub sto_periapsis_km_s: f64,
    pub geo_km_s: f64,
}

/// Delta-v budget across the three burns (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceDeltaVs {
    /// Tangential burn at the LEO radius onto the intermediate transfer orbit.
    pub leo_to_ito_km_s: f64,
    /// Plane change at the shared transfer apoapsis.
    pub ito_to_sto_km_s: f64,
    /// Tangential burn at the synchronous radius to circularize.
    pub sto_to_geo_km_s: f64,
}

impl SequenceDeltaVs {
    /// Sum of the three burns (km/s).
    pub fn total_km_s(&self) -> f64 {
        self.leo_to_ito_km_s + self.ito_to_sto_km_s + self.sto_to_geo_km_s
    }
}

/// The four orbits of the sequence plus derived speeds and delta-vs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperSyncPlan {
    pub leo: Elliptical,
    pub ito: Elliptical,
    pub sto: Elliptical,
    pub geo: Elliptical,
    pub velocities: SequenceVelocities,
    pub delta_vs: SequenceDeltaVs,
}

/// Characterize the LEO -> ITO -> STO -> GEO sequence around `body`.
///
/// All non-plane-change burns are assumed coplanar, co-apsidal, and
/// tangential, so their delta-v is the absolute speed difference at the
/// burn radius.
pub fn plan_super_sync(
    body: &Body,
    config: &SuperSyncConfig,
) -> Result<SuperSyncPlan, TransferError> {
    let leo_radius_km = body.equatorial_radius_km + config.leo_altitude_km;
    let transfer_apoapsis_km = body.equatorial_radius_km + config.transfer_apoapsis_altitude_km;
    let inclination_rad = config.leo_inclination_deg.to_radians();

    let leo = OrbitSpec::new(body.mu_km3_s2)
        .circular(leo_radius_km)
        .resolve()?;
    let ito = OrbitSpec::new(body.mu_km3_s2)
        .apsides(leo_radius_km, transfer_apoapsis_km)
        .resolve()?;
    let sto = OrbitSpec::new(body.mu_km3_s2)
        .apsides(body.synchronous_radius_km, transfer_apoapsis_km)
        .resolve()?;
    let geo = OrbitSpec::new(body.mu_km3_s2)
        .circular(body.synchronous_radius_km)
        .resolve()?;

    let velocities = SequenceVelocities {
        leo_km_s: leo.speed_at_km_s(leo_radius_km),
        ito_periapsis_km_s: ito.speed_at_km_s(leo_radius_km),
        ito_apoapsis_km_s: ito.speed_at_km_s(transfer_apoapsis_km),
        sto_apoapsis_km_s: sto.speed_at_km_s(transfer_apoapsis_km),
        sto_periapsis_km_s: sto.speed_at_km_s(body.synchronous_radius_km),
        geo_km_s: geo.speed_at_km_s(body.synchronous_radius_km),
    };

    let delta_vs = SequenceDeltaVs {
        leo_to_ito_km_s: (velocities.ito_periapsis_km_s - velocities.leo_km_s).abs(),
        ito_to_sto_km_s: ito.plane_change_delta_v_km_s(&sto, inclination_rad)?,
        sto_to_geo_km_s: (velocities.geo_km_s - velocities.sto_periapsis_km_s).abs(),
    };

    Ok(SuperSyncPlan {
        leo,
        ito,
        sto,
        geo,
        velocities,
        delta_vs,
    })
}
