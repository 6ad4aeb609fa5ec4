use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geoset
#[derive(Debug, Parser)]
#[command(
    name = "geoset",
    version,
    about = "Filter a world-countries GeoJSON down to Schengen (or any set of countries)"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the features of the target countries to a new FeatureCollection
    Filter {
        /// Path to countries.geojson (or .geojson.gz)
        input: PathBuf,

        /// Output path (default: data/schengen.geojson)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        #[command(flatten)]
        codes: CodeArgs,
    },

    /// Print the target set, one code per line
    Targets {
        #[command(flatten)]
        codes: CodeArgs,
    },

    /// Check whether a coordinate lies inside a filtered region file
    Contains {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Region GeoJSON written by `filter` (default: data/schengen.geojson)
        #[arg(short = 'r', long = "region", env = "SCHENGEN_GEOJSON_PATH")]
        region: Option<PathBuf>,
    },
}

/// Adjustments to the default Schengen set.
#[derive(Debug, Args)]
pub struct CodeArgs {
    /// Extra ISO A2 codes to include (space-separated, e.g. --include GB IE)
    #[arg(long = "include", num_args = 0.., value_name = "CODE")]
    pub include: Vec<String>,

    /// ISO A2 codes to exclude (space-separated); wins over --include
    #[arg(long = "exclude", num_args = 0.., value_name = "CODE")]
    pub exclude: Vec<String>,
}
