//! Radiometry worksheet report
//!
//! Evaluates the worksheet parts and prints their labeled results. With no
//! arguments all nine parts are written to stdout as plain text.
//!
//! Usage:
//!   cargo run --bin radiometry_report -- [--part N] [--format text|json] [--output PATH]

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use radiometry::parts::{run_all, run_part};
use radiometry::{OutputFormat, Report};

/// Radiometry worksheet report
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes radiometric and photometric worksheet quantities",
    long_about = None
)]
struct Args {
    /// Only evaluate this part (1-9)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=9))]
    part: Option<u8>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout carries only the report
    env_logger::init();

    let args = Args::parse();

    let report = match args.part {
        Some(number) => {
            log::info!("Evaluating part {number}");
            Report::new(vec![run_part(number)?])
        }
        None => {
            log::info!("Evaluating all parts");
            run_all()?
        }
    };

    match &args.output {
        Some(path) => report.save(path, args.format)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.render(args.format)?.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
