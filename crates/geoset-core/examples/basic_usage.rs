//! Basic usage example for geoset-core
//!
//! Filters an in-memory world collection, then writes it and asks the
//! resulting region about a few coordinates.

use geoset_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== geoset basic usage ===\n");

    let world = json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ISO_A2": "AT"},
             "geometry": {"type": "Polygon", "coordinates": [[[9.5, 46.4], [17.2, 46.4], [17.2, 49.0], [9.5, 49.0], [9.5, 46.4]]]}},
            {"type": "Feature", "properties": {"ISO_A2": "-99", "ADM0_A3": "NOR"},
             "geometry": {"type": "Polygon", "coordinates": [[[4.6, 58.0], [31.1, 58.0], [31.1, 71.2], [4.6, 71.2], [4.6, 58.0]]]}},
            {"type": "Feature", "properties": {"ISO_A2": "IE"},
             "geometry": {"type": "Polygon", "coordinates": [[[-10.5, 51.4], [-6.0, 51.4], [-6.0, 55.4], [-10.5, 55.4], [-10.5, 51.4]]]}}
        ]
    });

    // Default Schengen target, minus Norway, plus Ireland
    let target = TargetSet::schengen(["ie"], ["NO"]);
    println!("Target set has {} codes", target.len());

    let fc = filter_collection(world, &target)?;
    for code in fc.codes() {
        println!("  kept {code}");
    }

    let out = std::env::temp_dir().join("geoset-basic-usage.geojson");
    write_collection(&out, &fc)?;
    println!("\nWrote {} features to {}", fc.len(), out.display());

    let region = RegionIndex::load_from_path(&out)?;
    for (name, lat, lng) in [("Vienna", 48.21, 16.37), ("Dublin", 53.35, -6.26), ("Oslo", 59.91, 10.75)] {
        println!("  {name}: inside = {}", region.contains(lat, lng));
    }

    Ok(())
}
