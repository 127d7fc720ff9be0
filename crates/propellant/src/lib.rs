//! Propellant mixture deduction: split a propellant load into component
//! masses, densities, and volumes from the mixture's oxidizer-to-fuel
//! ratio and the material properties table.

pub mod flows;

use lv_config::PropellantDb;
use thiserror::Error;

/// Errors surfaced while deducing propellant properties.
#[derive(Debug, Error)]
pub enum PropellantError {
    #[error("propellant mixture '{0}' not found in database")]
    UnknownMixture(String),
    #[error("material '{material}' referenced by mixture '{mixture}' not found in database")]
    UnknownMaterial { mixture: String, material: String },
    #[error("mixture '{mixture}' declares {count} components; one or two are supported")]
    ComponentCount { mixture: String, count: usize },
    #[error("mixture '{0}' has two components but no positive oxidizer-to-fuel ratio")]
    MissingMixtureRatio(String),
    #[error("propellant mass must be positive, got {0} kg")]
    NonPositiveMass(f64),
}

/// One propellant component with its share of the load.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSplit {
    /// Material name as keyed in the properties table.
    pub material: String,
    /// Share of the total propellant mass; all shares sum to 1.0.
    pub mass_fraction: f64,
    pub mass_kg: f64,
    /// Liquid density, kg/l.
    pub density_kg_l: f64,
    pub volume_l: f64,
}

/// Deduced propellant properties for one stage load.
///
/// Components are ordered oxidizer first for bipropellants; a
/// monopropellant carries a single component with fraction 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellantSplit {
    /// Mixture id this split was deduced from.
    pub mixture: String,
    pub components: Vec<ComponentSplit>,
    /// Reference specific impulse, seconds.
    pub isp_s: Option<f64>,
    /// Sea-level specific impulse variant, seconds.
    pub isp_sl_s: Option<f64>,
    /// Vacuum specific impulse variant, seconds.
    pub isp_vac_s: Option<f64>,
}

impl PropellantSplit {
    /// Total mass over all components (kilograms).
    pub fn total_mass_kg(&self) -> f64 {
        self.components.iter().map(|c| c.mass_kg).sum()
    }

    /// Total volume over all components (litres).
    pub fn total_volume_l(&self) -> f64 {
        self.components.iter().map(|c| c.volume_l).sum()
    }

    /// Bulk density of the mixed load, kg/l.
    pub fn mean_density_kg_l(&self) -> f64 {
        self.total_mass_kg() / self.total_volume_l()
    }
}

/// Deduce component masses, densities, and volumes for `total_mass_kg` of
/// the named mixture.
///
/// Two-component mixtures split by the oxidizer-to-fuel mass ratio:
/// oxidizer fraction = OFR / (OFR + 1). Single-component mixtures bind
/// the whole load to their one named material, so density and volume are
/// populated the same way.
pub fn deduce(
    db: &PropellantDb,
    mixture_id: &str,
    total_mass_kg: f64,
) -> Result<PropellantSplit, PropellantError> {
    if total_mass_kg <= 0.0 {
        return Err(PropellantError::NonPositiveMass(total_mass_kg));
    }
    let mixture = db
        .mixtures
        .get(mixture_id)
        .ok_or_else(|| PropellantError::UnknownMixture(mixture_id.to_string()))?;

    let fractions: Vec<f64> = match mixture.components.len() {
        1 => vec![1.0],
        2 => {
            let ofr = mixture
                .ofr
                .filter(|&ofr| ofr > 0.0)
                .ok_or_else(|| PropellantError::MissingMixtureRatio(mixture_id.to_string()))?;
            let oxidizer_fraction = ofr / (ofr + 1.0);
            vec![oxidizer_fraction, 1.0 - oxidizer_fraction]
        }
        count => {
            return Err(PropellantError::ComponentCount {
                mixture: mixture_id.to_string(),
                count,
            });
        }
    };

    let mut components = Vec::with_capacity(fractions.len());
    for (material, mass_fraction) in mixture.components.iter().zip(fractions) {
        let properties =
            db.materials
                .get(material)
                .ok_or_else(|| PropellantError::UnknownMaterial {
                    mixture: mixture_id.to_string(),
                    material: material.clone(),
                })?;
        let mass_kg = mass_fraction * total_mass_kg;
        components.push(ComponentSplit {
            material: material.clone(),
            mass_fraction,
            mass_kg,
            density_kg_l: properties.liquid_density_kg_l,
            volume_l: mass_kg / properties.liquid_density_kg_l,
        });
    }

    Ok(PropellantSplit {
        mixture: mixture_id.to_string(),
        components,
        isp_s: mixture.isp_s,
        isp_sl_s: mixture.isp_sl_s,
        isp_vac_s: mixture.isp_vac_s,
    })
}
