// crates/geoset-core/src/lib.rs

//! # geoset-core
//!
//! Reduces a world-countries GeoJSON `FeatureCollection` to a chosen set of
//! countries (Schengen by default).
//!
//! Real-world country datasets disagree on where the ISO code lives
//! (`ISO_A2`, `iso2`, `ADM0_A3`, ...) and some leave it as `"-99"`.
//! [`resolve_code`] folds those schemas into one canonical alpha-2
//! [`CountryCode`]; [`filter_collection`] keeps the features whose code is
//! in a [`TargetSet`] and projects each to `{type, properties: {iso_a2}, geometry}`.
//!
//! ```rust
//! use geoset_core::prelude::*;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "type": "FeatureCollection",
//!     "features": [
//!         {"type": "Feature", "properties": {"ISO_A2": "-99", "ISO_A3": "FRA"}, "geometry": null},
//!         {"type": "Feature", "properties": {"ISO_A2": "GB"}, "geometry": null}
//!     ]
//! });
//! let fc = filter_collection(doc, &TargetSet::default()).unwrap();
//! assert_eq!(fc.features[0].properties.iso_a2.as_str(), "FR");
//! assert_eq!(fc.len(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codes;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod region;
pub mod resolve;

// Re-exports
pub use crate::codes::CountryCode;
pub use crate::error::{GeoSetError, Result};
pub use crate::filter::{filter_collection, filter_collection_with_summary, FilterSummary, TargetSet};
pub use crate::loader::{filter_file, read_document, write_collection, DEFAULT_OUTPUT_PATH};
pub use crate::model::{Feature, FeatureCollection, FeatureProperties};
pub use crate::region::RegionIndex;
pub use crate::resolve::{resolve_code, resolve_properties};
