//! Basic launch vehicle analysis: stage masses and delta-V only, no
//! propellant database required.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use launch_vehicle_estimator::report::TextWriter;
use launch_vehicle_estimator::{analysis, config};
use lv_cli::output;

#[derive(Parser)]
#[command(author, version, about = "Stage masses and deltaV for a multi-stage rocket")]
struct Cli {
    /// Vehicle description file (YAML, or TOML by extension)
    vehicle: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let vehicle = config::load_vehicle(&cli.vehicle)?;

    let analysis = analysis::analyze(&vehicle, None)?;

    let mut sections = output::performance_sections(&analysis);
    sections.push(output::totals_section(&analysis));

    TextWriter::new(io::stdout().lock()).put_sections(&sections)?;
    Ok(())
}
