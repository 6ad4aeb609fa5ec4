// crates/geoset-core/src/filter.rs

//! # Set Filter & Projector
//!
//! Computes the target set for a run and reduces an input
//! `FeatureCollection` to the features whose resolved code is in it.

use crate::codes::{schengen_codes, CountryCode};
use crate::error::{GeoSetError, Result};
use crate::model::{Feature, FeatureCollection};
use crate::resolve::resolve_properties;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

// -----------------------------------------------------------------------------
// TARGET SET
// -----------------------------------------------------------------------------

/// `(default ∪ include) − exclude`, fixed at construction.
///
/// Exclusion always wins. Codes that no feature will ever carry are kept
/// as given; they simply never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    codes: BTreeSet<CountryCode>,
}

impl TargetSet {
    pub fn new<D, I, E>(default: D, include: I, exclude: E) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let exclude = normalize(exclude);
        let codes = normalize(default)
            .into_iter()
            .chain(normalize(include))
            .filter(|c| !exclude.contains(c))
            .collect();
        TargetSet { codes }
    }

    /// Target set over the built-in Schengen default.
    pub fn schengen<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self::new(schengen_codes(), include, exclude)
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryCode> {
        self.codes.iter()
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self::schengen(std::iter::empty::<&str>(), std::iter::empty::<&str>())
    }
}

fn normalize<T>(codes: T) -> BTreeSet<CountryCode>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    codes
        .into_iter()
        .map(|c| CountryCode::new(c.as_ref()))
        .collect()
}

// -----------------------------------------------------------------------------
// FILTER
// -----------------------------------------------------------------------------

/// Counters from a single filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Features present in the input.
    pub scanned: usize,
    /// Features dropped because no code could be resolved.
    pub unresolved: usize,
    /// Features kept in the output.
    pub written: usize,
}

/// Reduces `doc` to the features whose code is in `target`.
///
/// Fails with [`GeoSetError::NotFeatureCollection`] before touching any
/// feature if the document is not a `FeatureCollection`, and with
/// [`GeoSetError::NoFeaturesMatched`] if nothing survives the filter.
pub fn filter_collection(doc: Value, target: &TargetSet) -> Result<FeatureCollection> {
    filter_collection_with_summary(doc, target).map(|(fc, _)| fc)
}

/// [`filter_collection`] plus the per-run counters.
pub fn filter_collection_with_summary(
    doc: Value,
    target: &TargetSet,
) -> Result<(FeatureCollection, FilterSummary)> {
    let mut doc = match doc {
        Value::Object(map) => map,
        other => {
            return Err(GeoSetError::NotFeatureCollection {
                found: Some(json_kind(&other).to_string()),
            })
        }
    };

    match doc.get("type") {
        Some(Value::String(t)) if t == "FeatureCollection" => {}
        other => {
            return Err(GeoSetError::NotFeatureCollection {
                found: other.map(|t| match t {
                    Value::String(s) => s.clone(),
                    v => v.to_string(),
                }),
            })
        }
    }

    // A missing or non-array `features` member is an empty collection.
    let input = match doc.remove("features") {
        Some(Value::Array(features)) => features,
        _ => Vec::new(),
    };

    let mut summary = FilterSummary {
        scanned: input.len(),
        ..FilterSummary::default()
    };
    let mut features = Vec::new();

    for (idx, feature) in input.into_iter().enumerate() {
        let mut feature = match feature {
            Value::Object(map) => map,
            _ => Default::default(),
        };

        let Some(code) = resolve_properties(feature.get("properties")) else {
            debug!(index = idx, "feature has no resolvable country code; skipping");
            summary.unresolved += 1;
            continue;
        };

        if !target.contains(&code) {
            continue;
        }

        let geometry = feature.remove("geometry").unwrap_or(Value::Null);
        features.push(Feature::new(code, geometry));
    }

    if features.is_empty() {
        return Err(GeoSetError::NoFeaturesMatched);
    }

    summary.written = features.len();
    debug!(
        scanned = summary.scanned,
        unresolved = summary.unresolved,
        written = summary.written,
        "filtered feature collection"
    );

    Ok((FeatureCollection { features }, summary))
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
