// crates/geoset-core/src/model.rs

//! Output GeoJSON shapes.
//!
//! Only what the filter emits is modelled here. Input documents stay as
//! [`serde_json::Value`] so unknown members and geometries pass through
//! without a schema.

use crate::codes::CountryCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reduced `FeatureCollection`: `{"type": "FeatureCollection", "features": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A projected feature carrying only its code and the untouched geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub iso_a2: CountryCode,
}

impl Feature {
    pub fn new(code: CountryCode, geometry: Value) -> Self {
        Feature {
            properties: FeatureProperties { iso_a2: code },
            geometry,
        }
    }

    pub fn code(&self) -> &CountryCode {
        &self.properties.iso_a2
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Codes in output order. Repeats are kept; input duplicates are not merged.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.features.iter().map(Feature::code)
    }
}
