// crates/geoset-core/src/region.rs

//! # Region Lookup
//!
//! Answers "is this coordinate inside the filtered region?" against a
//! collection produced by the filter. Only outer rings are considered, so
//! enclaves cut out of a country polygon still count as inside.

use crate::error::{GeoSetError, Result};
use crate::loader::{read_document, DEFAULT_OUTPUT_PATH};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides [`RegionIndex::default_path`].
pub const REGION_PATH_ENV: &str = "SCHENGEN_GEOJSON_PATH";

static REGION_CACHE: OnceCell<RegionIndex> = OnceCell::new();

/// A closed ring of `[lng, lat]` positions.
type Ring = Vec<[f64; 2]>;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionIndex {
    rings: Vec<Ring>,
}

impl RegionIndex {
    /// `$SCHENGEN_GEOJSON_PATH`, or `data/schengen.geojson`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(REGION_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    /// **Cached Loader:** the index at [`Self::default_path`], read once per process.
    pub fn load() -> Result<&'static RegionIndex> {
        REGION_CACHE.get_or_try_init(|| Self::load_from_path(Self::default_path()))
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeoSetError::NotFound(format!(
                "Region file is missing: {}",
                path.display()
            )));
        }
        let doc = read_document(path)?;
        Self::from_collection_value(&doc).map_err(|e| match e {
            GeoSetError::EmptyRegion(_) => GeoSetError::EmptyRegion(path.to_path_buf()),
            GeoSetError::NoPolygons(_) => GeoSetError::NoPolygons(path.to_path_buf()),
            other => other,
        })
    }

    /// Collects the outer ring of every `Polygon` and `MultiPolygon` member.
    pub fn from_collection_value(doc: &Value) -> Result<Self> {
        let features = doc
            .get("features")
            .and_then(Value::as_array)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| GeoSetError::EmptyRegion(PathBuf::new()))?;

        let mut rings = Vec::new();
        for feature in features {
            let Some(geometry) = feature.get("geometry") else {
                continue;
            };
            let coords = geometry.get("coordinates");
            match geometry.get("type").and_then(Value::as_str) {
                Some("Polygon") => {
                    rings.extend(coords.and_then(outer_ring));
                }
                Some("MultiPolygon") => {
                    let polygons = coords.and_then(Value::as_array).into_iter().flatten();
                    rings.extend(polygons.filter_map(outer_ring));
                }
                other => debug!(geometry_type = ?other, "ignoring non-polygon geometry"),
            }
        }

        if rings.is_empty() {
            return Err(GeoSetError::NoPolygons(PathBuf::new()));
        }
        Ok(RegionIndex { rings })
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// True if the point lies inside any ring.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        self.rings.iter().any(|ring| point_in_ring(lat, lng, ring))
    }
}

/// First ring of a polygon's coordinate array. Malformed positions are skipped.
fn outer_ring(polygon: &Value) -> Option<Ring> {
    let ring: Ring = polygon
        .as_array()?
        .first()?
        .as_array()?
        .iter()
        .filter_map(|pos| {
            let pos = pos.as_array()?;
            Some([pos.first()?.as_f64()?, pos.get(1)?.as_f64()?])
        })
        .collect();
    (!ring.is_empty()).then_some(ring)
}

/// Even-odd ray casting with x = longitude, y = latitude.
fn point_in_ring(lat: f64, lng: f64, ring: &[[f64; 2]]) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > lat) != (yj > lat) && lng < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
