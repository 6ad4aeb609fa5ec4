// crates/geoset-core/src/resolve.rs

//! # Code Resolver
//!
//! Finds the canonical two-letter code of a feature from whatever ISO
//! fields its dataset happens to carry.

use crate::codes::{alpha3_to_alpha2, CountryCode, ALPHA2_KEYS, ALPHA3_KEYS, UNSET_SENTINEL};
use serde_json::{Map, Value};

/// Resolves the country code of a feature's property mapping.
///
/// Two-letter keys are probed first, in [`ALPHA2_KEYS`] order; a value that
/// is not a string, or is the `"-99"` sentinel, is treated as absent. Only
/// then are the [`ALPHA3_KEYS`] probed: the first string value found is
/// translated through the alias table, and a miss there ends resolution.
///
/// An empty two-letter string is taken as the answer and yields `None`.
pub fn resolve_code(props: &Map<String, Value>) -> Option<CountryCode> {
    let alpha2 = ALPHA2_KEYS
        .iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_str))
        .find(|val| *val != UNSET_SENTINEL);

    if let Some(val) = alpha2 {
        return (!val.is_empty()).then(|| CountryCode::new(val));
    }

    ALPHA3_KEYS
        .iter()
        .find_map(|key| props.get(*key).and_then(Value::as_str))
        .and_then(alpha3_to_alpha2)
}

/// Like [`resolve_code`], for a raw `properties` member that may be missing,
/// `null` or not an object at all. All of those count as the empty mapping.
pub fn resolve_properties(props: Option<&Value>) -> Option<CountryCode> {
    match props {
        Some(Value::Object(map)) => resolve_code(map),
        _ => None,
    }
}
