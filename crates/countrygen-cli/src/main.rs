//! countrygen: regenerates the country data files
//!
//! Reads the canonical dataset and the per-country overlays from the source
//! directory and writes one YAML and one JSON file per country (and per
//! country's subdivisions) into the dist directory.
//!
//! Usage examples
//! --------------
//!
//! - Regenerate everything from ./src into ./dist
//!   $ countrygen create
//!
//! - Use other locations
//!   $ countrygen --src data/src --dist public/data create
//!
//! - More detail (per-country progress)
//!   $ RUST_LOG=debug countrygen create
//!
//! Missing or broken overlays and unwritable files are logged as warnings.
//! An unreadable `countries.json` aborts the run with an error message.
//! Neither changes the exit status.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(CliArgs::parse())
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let paths = args.paths();

    match args.command {
        Commands::Create => match countrygen_core::create(&paths) {
            Ok(summary) => {
                for warning in &summary.warnings {
                    tracing::warn!(kind = %warning.kind, subject = %warning.subject, "{}", warning.message);
                }
                println!("Created data files:");
                println!("  Countries: {}", summary.countries);
                println!("  Country files: {}", summary.country_files);
                println!("  Subdivision files: {}", summary.subdivision_files);
                println!("  Warnings: {}", summary.warnings.len());
            }
            Err(e) => {
                // The run is aborted, the exit status stays 0.
                let err = anyhow::Error::new(e);
                tracing::error!("{err:#}");
            }
        },

        Commands::Import => {
            tracing::info!("import is handled by the external data importer; nothing to do");
        }
    }

    Ok(())
}
