// crates/geoset-core/src/codes.rs

//! # Country Codes
//!
//! The canonical [`CountryCode`] type and the fixed lookup tables used to
//! resolve it: the ordered property keys probed on each feature, the
//! three-letter alias table and the default (Schengen) set.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

// -----------------------------------------------------------------------------
// CANONICAL CODE
// -----------------------------------------------------------------------------

/// An ISO 3166-1 alpha-2 country code in canonical (uppercase) form.
///
/// Input is accepted in any case; the stored value is always uppercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Self {
        CountryCode(code.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        CountryCode::new(code)
    }
}

impl From<String> for CountryCode {
    fn from(code: String) -> Self {
        CountryCode::new(&code)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

// -----------------------------------------------------------------------------
// LOOKUP TABLES
// -----------------------------------------------------------------------------

/// Property keys that may hold a two-letter code, highest priority first.
pub const ALPHA2_KEYS: [&str; 5] = ["ISO_A2", "iso_a2", "ISO2", "iso2", "ISO3166-1-Alpha-2"];

/// Property keys that may hold a three-letter code, highest priority first.
pub const ALPHA3_KEYS: [&str; 5] = ["ISO_A3", "iso_a3", "ADM0_A3", "adm0_a3", "ISO3166-1-Alpha-3"];

/// Natural Earth style marker for "no code assigned".
pub const UNSET_SENTINEL: &str = "-99";

/// The default target region.
pub const SCHENGEN_ISO_A2: [&str; 29] = [
    "AT", "BE", "CH", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", //
    "GR", "HR", "HU", "IS", "IT", "LI", "LT", "LU", "LV", "MT", //
    "NL", "NO", "PL", "PT", "SE", "SI", "SK", "BG", "RO",
];

/// Fallback table for datasets that leave the two-letter field unset.
pub const ISO_A3_TO_A2: [(&str, &str); 29] = [
    ("AUT", "AT"), ("BEL", "BE"), ("CHE", "CH"), ("CZE", "CZ"), ("DEU", "DE"),
    ("DNK", "DK"), ("EST", "EE"), ("ESP", "ES"), ("FIN", "FI"), ("FRA", "FR"),
    ("GRC", "GR"), ("HRV", "HR"), ("HUN", "HU"), ("ISL", "IS"), ("ITA", "IT"),
    ("LIE", "LI"), ("LTU", "LT"), ("LUX", "LU"), ("LVA", "LV"), ("MLT", "MT"),
    ("NLD", "NL"), ("NOR", "NO"), ("POL", "PL"), ("PRT", "PT"), ("SWE", "SE"),
    ("SVN", "SI"), ("SVK", "SK"), ("BGR", "BG"), ("ROU", "RO"),
];

static ALPHA3_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ISO_A3_TO_A2.iter().copied().collect());

/// Translates a three-letter code (any case) through [`ISO_A3_TO_A2`].
pub fn alpha3_to_alpha2(alpha3: &str) -> Option<CountryCode> {
    ALPHA3_INDEX
        .get(alpha3.to_uppercase().as_str())
        .map(|a2| CountryCode::new(a2))
}

/// The default set as canonical codes.
pub fn schengen_codes() -> BTreeSet<CountryCode> {
    SCHENGEN_ISO_A2.iter().map(|c| CountryCode::new(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_uppercased() {
        assert_eq!(CountryCode::new("fr").as_str(), "FR");
        assert_eq!(CountryCode::from("De").to_string(), "DE");
    }

    #[test]
    fn default_set_has_29_distinct_codes() {
        assert_eq!(schengen_codes().len(), 29);
    }

    #[test]
    fn every_default_code_has_an_alpha3_alias() {
        let aliased: BTreeSet<CountryCode> = ISO_A3_TO_A2
            .iter()
            .map(|(_, a2)| CountryCode::new(a2))
            .collect();
        assert_eq!(aliased, schengen_codes());
    }

    #[test]
    fn alpha3_lookup_ignores_case() {
        assert_eq!(alpha3_to_alpha2("deu"), Some(CountryCode::new("DE")));
        assert_eq!(alpha3_to_alpha2("FRA"), Some(CountryCode::new("FR")));
        assert_eq!(alpha3_to_alpha2("GBR"), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&CountryCode::new("at")).unwrap();
        assert_eq!(json, "\"AT\"");
    }

    #[test]
    fn deserializing_uppercases() {
        let code: CountryCode = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(code.as_str(), "FR");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"FR\"");
    }

    #[test]
    fn read_back_feature_is_canonical() {
        let fc: crate::model::FeatureCollection = serde_json::from_str(
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"iso_a2":"se"},"geometry":null}]}"#,
        )
        .unwrap();
        assert_eq!(fc.features[0].code().as_str(), "SE");
    }
}
