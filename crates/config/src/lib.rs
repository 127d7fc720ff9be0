//! Configuration models and loaders for vehicle descriptions and the
//! propellant database.
//!
//! Both file kinds load from YAML by default; a `.toml` extension switches
//! the parser. Validation is eager: a file that loads is internally
//! consistent, so downstream crates can assume names resolve and masses
//! are ordered.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Stage entry in a vehicle description. Masses are in kilograms.
#[derive(Debug, Deserialize, Clone)]
pub struct StageConfig {
    pub wet_mass_kg: f64,
    pub dry_mass_kg: f64,
    /// Specific impulse in seconds. Zero or absent marks an inert
    /// payload/structure stage.
    #[serde(default)]
    pub isp_s: f64,
    /// Propellant mixture id in the propellant database.
    #[serde(default)]
    pub mixture: Option<String>,
    /// Per-stage acceleration limits in units of standard gravity.
    #[serde(default)]
    pub g_range: Option<[f64; 2]>,
}

impl StageConfig {
    /// Propellant load carried by this stage (kilograms).
    pub fn propellant_mass_kg(&self) -> f64 {
        self.wet_mass_kg - self.dry_mass_kg
    }

    /// Whether this stage produces thrust.
    pub fn is_propulsive(&self) -> bool {
        self.isp_s > 0.0
    }
}

/// Vehicle description parsed from a scenario file.
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Ignition sequence, first-fired stage first. Need not match the
    /// storage order of `stages`.
    pub stage_order: Vec<String>,
    pub stages: BTreeMap<String, StageConfig>,
    /// Vehicle-wide acceleration limits in units of standard gravity.
    #[serde(default)]
    pub g_range: Option<[f64; 2]>,
    /// Upper acceleration limit; used to size a constant-thrust profile
    /// when no `g_range` is given.
    #[serde(default)]
    pub max_g: Option<f64>,
}

/// Mixture entry in the propellant database.
#[derive(Debug, Deserialize, Clone)]
pub struct MixtureConfig {
    /// Human-readable mixture name for reports.
    #[serde(default)]
    pub name: Option<String>,
    /// Component material names, oxidizer first. A single entry marks a
    /// monopropellant.
    pub components: Vec<String>,
    /// Oxidizer-to-fuel mass ratio; required for two-component mixtures.
    #[serde(default)]
    pub ofr: Option<f64>,
    /// Reference specific impulse, seconds.
    #[serde(default)]
    pub isp_s: Option<f64>,
    /// Sea-level specific impulse variant, seconds.
    #[serde(default)]
    pub isp_sl_s: Option<f64>,
    /// Vacuum specific impulse variant, seconds.
    #[serde(default)]
    pub isp_vac_s: Option<f64>,
}

/// Material properties entry in the propellant database.
#[derive(Debug, Deserialize, Clone)]
pub struct MaterialConfig {
    /// Liquid density at storage conditions, kg/l.
    pub liquid_density_kg_l: f64,
    /// Normal boiling point, kelvin.
    #[serde(default)]
    pub boiling_point_k: Option<f64>,
}

/// Propellant database: mixture definitions plus a material properties table.
#[derive(Debug, Deserialize, Clone)]
pub struct PropellantDb {
    pub mixtures: BTreeMap<String, MixtureConfig>,
    pub materials: BTreeMap<String, MaterialConfig>,
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("stage '{0}' listed in stage_order is not defined under stages")]
    UnknownStage(String),
    #[error("stage '{stage}': wet mass {wet_mass_kg} kg is below dry mass {dry_mass_kg} kg")]
    InvertedMasses {
        stage: String,
        wet_mass_kg: f64,
        dry_mass_kg: f64,
    },
    #[error("stage '{0}': masses must be positive")]
    NonPositiveMass(String),
    #[error("acceleration limits must be positive and ordered, got [{0}, {1}]")]
    InvalidGRange(f64, f64),
    #[error("mixture '{mixture}' declares {count} components; one or two are supported")]
    ComponentCount { mixture: String, count: usize },
    #[error("mixture '{0}' has two components but no positive oxidizer-to-fuel ratio")]
    MissingMixtureRatio(String),
    #[error("material '{material}' referenced by mixture '{mixture}' is not in the materials table")]
    UnknownMaterial { mixture: String, material: String },
    #[error("material '{0}': liquid density must be positive")]
    NonPositiveDensity(String),
}

impl VehicleConfig {
    /// Check internal consistency: every ordered stage exists, masses are
    /// positive and ordered, and acceleration limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.stage_order {
            if !self.stages.contains_key(name) {
                return Err(ConfigError::UnknownStage(name.clone()));
            }
        }
        for (name, stage) in &self.stages {
            if stage.dry_mass_kg <= 0.0 || stage.wet_mass_kg <= 0.0 {
                return Err(ConfigError::NonPositiveMass(name.clone()));
            }
            if stage.wet_mass_kg < stage.dry_mass_kg {
                return Err(ConfigError::InvertedMasses {
                    stage: name.clone(),
                    wet_mass_kg: stage.wet_mass_kg,
                    dry_mass_kg: stage.dry_mass_kg,
                });
            }
            if let Some(range) = stage.g_range {
                check_g_range(range)?;
            }
        }
        if let Some(range) = self.g_range {
            check_g_range(range)?;
        }
        if let Some(max_g) = self.max_g {
            if max_g <= 0.0 {
                return Err(ConfigError::InvalidGRange(max_g, max_g));
            }
        }
        Ok(())
    }
}

impl PropellantDb {
    /// Check internal consistency: component counts, ratio presence, and
    /// material references.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, mixture) in &self.mixtures {
            let count = mixture.components.len();
            if count == 0 || count > 2 {
                return Err(ConfigError::ComponentCount {
                    mixture: id.clone(),
                    count,
                });
            }
            if count == 2 && mixture.ofr.map_or(true, |ofr| ofr <= 0.0) {
                return Err(ConfigError::MissingMixtureRatio(id.clone()));
            }
            for component in &mixture.components {
                if !self.materials.contains_key(component) {
                    return Err(ConfigError::UnknownMaterial {
                        mixture: id.clone(),
                        material: component.clone(),
                    });
                }
            }
        }
        for (name, material) in &self.materials {
            if material.liquid_density_kg_l <= 0.0 {
                return Err(ConfigError::NonPositiveDensity(name.clone()));
            }
        }
        Ok(())
    }
}

/// Load and validate a vehicle description from a YAML or TOML file.
pub fn load_vehicle<P: AsRef<Path>>(path: P) -> Result<VehicleConfig, ConfigError> {
    let config: VehicleConfig = load_record(path)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a propellant database from a YAML or TOML file.
pub fn load_propellants<P: AsRef<Path>>(path: P) -> Result<PropellantDb, ConfigError> {
    let db: PropellantDb = load_record(path)?;
    db.validate()?;
    Ok(db)
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn check_g_range(range: [f64; 2]) -> Result<(), ConfigError> {
    let [min_g, max_g] = range;
    if min_g <= 0.0 || max_g <= 0.0 || min_g > max_g {
        return Err(ConfigError::InvalidGRange(min_g, max_g));
    }
    Ok(())
}
