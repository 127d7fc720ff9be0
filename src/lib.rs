//! Basic performance and propulsion estimates for multi-stage launch
//! vehicles, plus orbital-transfer characterization.
//!
//! The numerical work lives in the member crates; this façade re-exports
//! them under stable module paths and hosts the per-vehicle analysis
//! orchestrator shared by the command-line front-ends.

pub mod analysis;

pub use lv_core::{constants, time, units};

pub use lv_config as config;
pub use lv_orbits as orbits;
pub use lv_propellant as propellant;
pub use lv_report as report;
pub use lv_staging as staging;
pub use lv_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
