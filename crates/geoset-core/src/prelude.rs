// crates/geoset-core/src/prelude.rs

pub use crate::codes::{CountryCode, SCHENGEN_ISO_A2};
pub use crate::error::{GeoSetError, Result};
pub use crate::filter::{filter_collection, FilterSummary, TargetSet};
pub use crate::loader::{filter_file, read_document, write_collection};
pub use crate::model::{Feature, FeatureCollection};
pub use crate::region::RegionIndex;
pub use crate::resolve::resolve_code;
