//! Launch vehicle propulsion estimator: full performance and propellant
//! report for a multi-stage vehicle.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use launch_vehicle_estimator::{analysis, config, report};
use lv_cli::output;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Basic performance and propulsion analysis for a multi-stage rocket"
)]
struct Cli {
    /// Vehicle description file (YAML, or TOML by extension)
    vehicle: PathBuf,

    /// Propellant database file (YAML, or TOML by extension)
    propellants: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report destination; `-` writes to stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let vehicle = config::load_vehicle(&cli.vehicle)?;
    let propellants = config::load_propellants(&cli.propellants)?;

    let analysis = analysis::analyze(&vehicle, Some(&propellants))?;

    let mut sections = output::performance_sections(&analysis);
    sections.extend(output::propellant_sections(&analysis));
    sections.push(output::totals_section(&analysis));

    let writer = report::writer_for_path(&cli.output)?;
    match cli.format {
        Format::Text => report::TextWriter::new(writer).put_sections(&sections)?,
        Format::Csv => report::write_csv(writer, &sections)?,
        Format::Json => report::write_json(writer, &sections)?,
    }
    Ok(())
}
