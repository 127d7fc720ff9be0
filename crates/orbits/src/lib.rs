//! Elliptical orbit characterization in the kilometre domain: shape and
//! period from apsides, vis-viva speeds, and plane-change delta-v.

use std::f64::consts::PI;

use thiserror::Error;

/// Relative tolerance for matching apoapsis radii in plane-change requests.
const APSIS_MATCH_TOLERANCE: f64 = 1.0e-4;

/// Errors surfaced by orbit construction and maneuver checks.
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("orbit element '{0}' is required but was not supplied")]
    MissingElement(&'static str),
    #[error("apoapsis {apoapsis_km} km must be at least periapsis {periapsis_km} km, both positive")]
    InvalidApsides { apoapsis_km: f64, periapsis_km: f64 },
    #[error("gravitational parameter must be positive, got {0} km^3/s^2")]
    NonPositiveMu(f64),
    #[error("apoapsis radii do not agree: {this_km} km vs {other_km} km")]
    ApsisMismatch { this_km: f64, other_km: f64 },
}

/// Partially specified orbit elements. Radii are measured from the body
/// center, not the surface. Call [`OrbitSpec::resolve`] to validate and
/// derive the remaining parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitSpec {
    pub apoapsis_km: Option<f64>,
    pub periapsis_km: Option<f64>,
    pub mu_km3_s2: Option<f64>,
}

impl OrbitSpec {
    /// Start a spec with the central body's gravitational parameter.
    pub fn new(mu_km3_s2: f64) -> Self {
        Self {
            mu_km3_s2: Some(mu_km3_s2),
            ..Self::default()
        }
    }

    /// Set both apsides to the given radius (circular orbit).
    pub fn circular(mut self, radius_km: f64) -> Self {
        self.apoapsis_km = Some(radius_km);
        self.periapsis_km = Some(radius_km);
        self
    }

    /// Set the apsis radii.
    pub fn apsides(mut self, periapsis_km: f64, apoapsis_km: f64) -> Self {
        self.periapsis_km = Some(periapsis_km);
        self.apoapsis_km = Some(apoapsis_km);
        self
    }

    /// Validate the supplied elements and derive semimajor axis,
    /// eccentricity, and period. Missing prerequisites are an error, never
    /// a silently unset field.
    pub fn resolve(self) -> Result<Elliptical, OrbitError> {
        let mu_km3_s2 = self
            .mu_km3_s2
            .ok_or(OrbitError::MissingElement("mu_km3_s2"))?;
        let apoapsis_km = self
            .apoapsis_km
            .ok_or(OrbitError::MissingElement("apoapsis_km"))?;
        let periapsis_km = self
            .periapsis_km
            .ok_or(OrbitError::MissingElement("periapsis_km"))?;

        if mu_km3_s2 <= 0.0 {
            return Err(OrbitError::NonPositiveMu(mu_km3_s2));
        }
        if periapsis_km <= 0.0 || apoapsis_km < periapsis_km {
            return Err(OrbitError::InvalidApsides {
                apoapsis_km,
                periapsis_km,
            });
        }

        let semimajor_km = (apoapsis_km + periapsis_km) / 2.0;
        Ok(Elliptical {
            apoapsis_km,
            periapsis_km,
            mu_km3_s2,
            semimajor_km,
            eccentricity: (apoapsis_km - periapsis_km) / (apoapsis_km + periapsis_km),
            period_s: 2.0 * PI * (semimajor_km.powi(3) / mu_km3_s2).sqrt(),
        })
    }
}

/// Fully characterized elliptical orbit; circular is the degenerate case
/// with equal apsides and zero eccentricity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elliptical {
    pub apoapsis_km: f64,
    pub periapsis_km: f64,
    pub mu_km3_s2: f64,
    pub semimajor_km: f64,
    pub eccentricity: f64,
    /// Orbital period, seconds.
    pub period_s: f64,
}

impl Elliptical {
    /// Speed at the given radial distance along the orbit (vis-viva).
    ///
    /// The distance must lie on the orbit; apsis radii are always valid.
    pub fn speed_at_km_s(&self, radius_km: f64) -> f64 {
        (self.mu_km3_s2 * (2.0 / radius_km - 1.0 / self.semimajor_km)).sqrt()
    }

    /// Delta-v for a plane change into `other`, performed at the shared
    /// apoapsis, by the law of cosines over the two apoapsis speeds.
    ///
    /// The apoapsis radii must agree within relative tolerance 1e-4; the
    /// maneuver is assumed to happen exactly there.
    pub fn plane_change_delta_v_km_s(
        &self,
        other: &Elliptical,
        angle_rad: f64,
    ) -> Result<f64, OrbitError> {
        let mismatch = (self.apoapsis_km - other.apoapsis_km).abs() / other.apoapsis_km;
        if mismatch > APSIS_MATCH_TOLERANCE {
            return Err(OrbitError::ApsisMismatch {
                this_km: self.apoapsis_km,
                other_km: other.apoapsis_km,
            });
        }

        let v1 = self.speed_at_km_s(self.apoapsis_km);
        let v2 = other.speed_at_km_s(other.apoapsis_km);
        let c2 = v1 * v1 + v2 * v2 - 2.0 * v1 * v2 * angle_rad.cos();
        Ok(c2.max(0.0).sqrt())
    }
}
