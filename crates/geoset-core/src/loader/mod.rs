// crates/geoset-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) around the pure filter:
//! read the input document, run [`filter_collection_with_summary`], write
//! the result atomically.

use crate::error::{GeoSetError, Result};
use crate::filter::{filter_collection_with_summary, FilterSummary, TargetSet};
use crate::model::FeatureCollection;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod common_io;
mod writer;

pub use writer::write_json_atomic;

/// Where `filter` writes when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "data/schengen.geojson";

pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

/// Reads and parses a JSON document (plain or `.gz`).
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let reader = common_io::open_stream(path.as_ref())?;
    serde_json::from_reader(reader).map_err(GeoSetError::Json)
}

/// Writes a filtered collection to `path`; see [`write_json_atomic`].
pub fn write_collection(path: impl AsRef<Path>, collection: &FeatureCollection) -> Result<()> {
    write_json_atomic(path.as_ref(), collection)
}

/// **Full pipeline:** read `input`, filter against `target`, write `output`.
///
/// Nothing is written when the input is rejected or nothing matches.
pub fn filter_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    target: &TargetSet,
) -> Result<FilterSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let doc = read_document(input)?;
    let (collection, summary) = filter_collection_with_summary(doc, target)?;
    write_collection(output, &collection)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        written = summary.written,
        "wrote filtered collection"
    );
    Ok(summary)
}
