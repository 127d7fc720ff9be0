//! Describe a super-synchronous maneuver to geostationary orbit: LEO to
//! intermediate transfer orbit to super-synchronous transfer orbit to GEO,
//! with the plane change absorbed at the shared transfer apoapsis.

use std::io;

use clap::Parser;
use launch_vehicle_estimator::report::TextWriter;
use launch_vehicle_estimator::transfer::{self, SuperSyncConfig};
use lv_cli::output;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Super-synchronous transfer maneuver report (LEO -> ITO -> STO -> GEO)"
)]
struct Cli {
    /// LEO altitude above the surface (km), e.g. 295.0
    leo_altitude_km: f64,

    /// Transfer-orbit apoapsis altitude above the surface (km), e.g. 90000.0
    transfer_apoapsis_altitude_km: f64,

    /// Initial LEO inclination to the equator (degrees), e.g. 22.5
    inclination_deg: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let plan = transfer::plan_super_sync(
        &transfer::EARTH,
        &SuperSyncConfig {
            leo_altitude_km: cli.leo_altitude_km,
            transfer_apoapsis_altitude_km: cli.transfer_apoapsis_altitude_km,
            leo_inclination_deg: cli.inclination_deg,
        },
    )?;

    let sections = output::super_sync_sections(&plan);
    TextWriter::new(io::stdout().lock()).put_sections(&sections)?;
    Ok(())
}
