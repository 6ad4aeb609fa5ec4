// crates/geoset-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a run of the filter (or a region lookup) fail.
///
/// Per-feature irregularities are not errors: a feature without usable
/// properties or without a resolvable code is simply skipped.
#[derive(Debug, Error)]
pub enum GeoSetError {
    /// Top-level `type` of the input document is not `FeatureCollection`.
    /// `found` holds the offending `type` value, or the JSON kind of a
    /// document that is not an object at all.
    #[error(
        "Input GeoJSON must be a FeatureCollection (found {})",
        found.as_deref().unwrap_or("no type")
    )]
    NotFeatureCollection { found: Option<String> },

    /// Filtering kept zero features.
    #[error("No features matched the target set. Check the input schema.")]
    NoFeaturesMatched,

    #[error("{0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Region file {} has no features", .0.display())]
    EmptyRegion(PathBuf),

    #[error("Region file {} has no polygon coordinates", .0.display())]
    NoPolygons(PathBuf),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoSetError>;
