//! geoset-cli
//! ==========
//!
//! Command-line interface for the `geoset-core` country filter.
//!
//! This crate primarily provides a binary (`geoset`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geoset-cli
//! geoset filter ne_110m_admin_0_countries.geojson
//! geoset filter countries.geojson -o out/region.geojson --include GB IE --exclude CH
//! geoset targets --exclude NO IS LI CH
//! geoset contains 48.8566 2.3522
//! ```
//!
//! For programmatic access use the [`geoset-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
