//! geoset — Command-line interface for geoset-core
//!
//! Cuts a world-countries GeoJSON down to the Schengen area (or any other
//! set of countries) and answers point lookups against the result.
//!
//! Usage examples
//! --------------
//!
//! - Write the Schengen countries to data/schengen.geojson
//!   $ geoset filter ne_110m_admin_0_countries.geojson
//!
//! - Custom output, extra and removed countries (case-insensitive)
//!   $ geoset filter countries.geojson -o out/eu.geojson --include ie cy --exclude no is li ch
//!
//! - Show the effective target set
//!   $ geoset targets --include GB
//!
//! - Is a coordinate inside the written region?
//!   $ geoset contains 47.37 8.54
//!   $ SCHENGEN_GEOJSON_PATH=out/eu.geojson geoset contains 53.35 -6.26
//!
//! Logging goes to stderr and is controlled with `RUST_LOG` (default `warn`).
mod args;

use crate::args::{CliArgs, CodeArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoset_core::loader::default_output_path;
use geoset_core::{filter_file, RegionIndex, TargetSet};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Filter {
            input,
            output,
            codes,
        } => {
            let output = output.unwrap_or_else(default_output_path);
            let target = target_set(&codes);
            tracing::debug!(targets = target.len(), "computed target set");

            let summary = filter_file(&input, &output, &target)
                .with_context(|| format!("Failed to filter {}", input.display()))?;
            println!("{}", summary_line(summary.written, &output));
        }

        Commands::Targets { codes } => {
            for code in target_set(&codes).iter() {
                println!("{code}");
            }
        }

        Commands::Contains { lat, lng, region } => {
            let inside = match region {
                Some(path) => RegionIndex::load_from_path(&path)
                    .with_context(|| format!("Failed to load region {}", path.display()))?
                    .contains(lat, lng),
                None => RegionIndex::load()
                    .context("Failed to load the default region")?
                    .contains(lat, lng),
            };
            println!("{}", inside_label(inside));
        }
    }

    Ok(())
}

fn target_set(codes: &CodeArgs) -> TargetSet {
    TargetSet::schengen(&codes.include, &codes.exclude)
}

fn summary_line(written: usize, output: &Path) -> String {
    format!("Wrote {written} features to {}", output.display())
}

fn inside_label(inside: bool) -> &'static str {
    if inside {
        "inside"
    } else {
        "outside"
    }
}
