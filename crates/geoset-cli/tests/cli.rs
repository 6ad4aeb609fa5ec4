use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn geoset(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geoset"))
        .current_dir(dir)
        .env_remove("SCHENGEN_GEOJSON_PATH")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn world() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"ISO_A2": "-99", "ISO_A3": "FRA"},
             "geometry": {"type": "Polygon", "coordinates": [[[-1.5, 43.5], [7.5, 43.5], [7.5, 50.9], [-1.5, 50.9], [-1.5, 43.5]]]}},
            {"type": "Feature", "properties": {"ISO_A2": "IE"},
             "geometry": {"type": "Polygon", "coordinates": [[[-10.5, 51.4], [-6.0, 51.4], [-6.0, 55.4], [-10.5, 55.4], [-10.5, 51.4]]]}},
            {"type": "Feature", "properties": {"iso_a2": "ch"},
             "geometry": {"type": "Polygon", "coordinates": [[[6.0, 45.8], [10.5, 45.8], [10.5, 47.8], [6.0, 47.8], [6.0, 45.8]]]}}
        ]
    })
}

fn write(dir: &Path, name: &str, doc: &Value) {
    fs::write(dir.join(name), serde_json::to_vec(doc).unwrap()).unwrap();
}

#[test]
fn filter_writes_default_path_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "world.geojson", &world());

    let out = geoset(dir.path(), &["filter", "world.geojson"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim_end(), "Wrote 2 features to data/schengen.geojson");

    let written: Value =
        serde_json::from_slice(&fs::read(dir.path().join("data/schengen.geojson")).unwrap()).unwrap();
    let codes: Vec<&str> = written["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["properties"]["iso_a2"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["FR", "CH"]);
}

#[test]
fn filter_include_exclude_and_contains() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "world.geojson", &world());

    let out = geoset(
        dir.path(),
        &["filter", "world.geojson", "-o", "out/region.geojson", "--include", "ie", "gb", "--exclude", "FR"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim_end(), "Wrote 2 features to out/region.geojson");

    // Dublin
    let out = geoset(dir.path(), &["contains", "53.35", "-6.26", "--region", "out/region.geojson"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim_end(), "inside");

    // Paris was excluded
    let out = geoset(dir.path(), &["contains", "48.86", "2.35", "-r", "out/region.geojson"]);
    assert_eq!(stdout(&out).trim_end(), "outside");
}

#[test]
fn targets_lists_sorted_codes() {
    let dir = tempfile::tempdir().unwrap();
    let out = geoset(dir.path(), &["targets", "--include", "gb", "--exclude", "ch", "no"]);
    assert!(out.status.success());

    let text = stdout(&out);
    let codes: Vec<&str> = text.lines().collect();
    assert_eq!(codes.len(), 28);
    assert!(codes.contains(&"GB"));
    assert!(!codes.contains(&"CH"));
    assert!(!codes.contains(&"NO"));
    assert_eq!(codes.first(), Some(&"AT"));
}

#[test]
fn wrong_type_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = world();
    doc["type"] = json!("Feature");
    write(dir.path(), "world.geojson", &doc);

    let out = geoset(dir.path(), &["filter", "world.geojson"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("must be a FeatureCollection"), "{stderr}");
    assert!(!dir.path().join("data").exists());
}

#[test]
fn no_match_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "world.geojson",
        &json!({"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"NAME": "France"}, "geometry": null}
        ]}),
    );

    let out = geoset(dir.path(), &["filter", "world.geojson", "-o", "out.geojson"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("No features matched"), "{stderr}");
    assert!(!dir.path().join("out.geojson").exists());
}
