//! Integration tests for the terminals binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const SEED: &str = r#"{ "terminals": [
    { "terminalName": "San Francisco International", "city": "San Francisco",
      "country": "United States", "iata": "SFO", "icao": "KSFO", "pinType": "CivilianAirport",
      "location": { "type": "Point", "coordinates": [-122.379, 37.6213] } },
    { "terminalName": "Oakland International", "city": "Oakland",
      "country": "United States", "iata": "OAK", "icao": "KOAK",
      "location": { "type": "Point", "coordinates": [-122.2197, 37.7126] } },
    { "terminalName": "Ferry Building", "city": "San Francisco",
      "country": "United States", "pinType": "SeaPort",
      "location": { "type": "Point", "coordinates": [-122.3937, 37.7955] } },
    { "terminalName": "Los Angeles International", "city": "Los Angeles",
      "country": "United States", "iata": "LAX", "icao": "KLAX",
      "location": { "type": "Point", "coordinates": [-118.4085, 33.9416] } },
    { "terminalName": "Nowhere", "city": "Oakland",
      "location": { "type": "Point", "coordinates": [200.0, 37.7] } }
] }"#;

/// Temp dir holding `seed.json` and a `terminals.toml` pointing at it.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("seed.json"), SEED).unwrap();
    std::fs::write(
        dir.path().join("terminals.toml"),
        "[data]\nseed_path = \"seed.json\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();
    dir
}

fn terminals(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("terminals").unwrap();
    cmd.current_dir(dir)
        .env_remove("TERMINALS_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("terminals.toml"));
    cmd
}

fn json_names(stdout: &[u8]) -> Vec<String> {
    let outcome: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    outcome["terminals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help() {
    Command::cargo_bin("terminals")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("near"))
        .stdout(predicate::str::contains("region"));
}

#[test]
fn test_near_lists_terminals() {
    let dir = workspace();
    terminals(dir.path())
        .args(["near", "--lat", "37.7749", "--lon", "-122.4194"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ferry Building"))
        .stdout(predicate::str::contains("San Francisco International"))
        .stdout(predicate::str::contains("Los Angeles").not());
}

#[test]
fn test_near_json_is_sorted_and_framed() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args(["--format", "json", "near", "--lat", "37.7749", "--lon=-122.4194"])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(
        json_names(&output.stdout),
        ["Ferry Building", "Oakland International", "San Francisco International"]
    );

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["radius_meters"], 100_000.0);
    assert_eq!(outcome["annotations"][0]["icon"], "Pin_SeaPort");
    assert!(outcome["viewport"]["span"]["latitude_delta"].as_f64().unwrap() > 0.19);
}

#[test]
fn test_near_radius_override() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args(["-f", "json", "near", "--lat", "37.7749", "--lon", "-122.4194", "--radius", "15000"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout), ["Ferry Building"]);
}

#[test]
fn test_near_rejects_invalid_coordinate() {
    let dir = workspace();
    terminals(dir.path())
        .args(["near", "--lat", "91", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_city_search_is_case_insensitive() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args(["--format", "json", "city", "san francisco"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json_names(&output.stdout),
        ["Ferry Building", "Oakland International", "San Francisco International"]
    );
}

#[test]
fn test_unknown_city_fails() {
    let dir = workspace();
    terminals(dir.path())
        .args(["city", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city: Atlantis"));
}

#[test]
fn test_single_terminal_city_warns() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args(["--format", "json", "city", "Los Angeles"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(json_names(&output.stdout).is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("single terminal"), "{}", stderr);
    assert!(stderr.contains("data.cities_path"), "{}", stderr);
}

#[test]
fn test_multi_terminal_city_does_not_warn() {
    let dir = workspace();
    terminals(dir.path())
        .args(["city", "San Francisco"])
        .assert()
        .success()
        .stderr(predicate::str::contains("single terminal").not());
}

#[test]
fn test_city_uses_configured_city_list() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("cities.json"),
        r#"[{"name": "Hollywood", "latitude": 34.0928, "longitude": -118.3287}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("terminals.toml"),
        "[data]\nseed_path = \"seed.json\"\ncities_path = \"cities.json\"\n",
    )
    .unwrap();

    let output = terminals(dir.path())
        .args(["--format", "json", "city", "Hollywood"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout), ["Los Angeles International"]);
}

#[test]
fn test_region_search_has_no_viewport() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args([
            "--format", "json", "region", "--lat", "37.7", "--lon", "-122.3", "--lat-delta", "0.5",
            "--lon-delta", "0.5",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["terminals"].as_array().unwrap().len(), 3);
    assert!(outcome["viewport"].is_null());
}

#[test]
fn test_huge_region_is_skipped() {
    let dir = workspace();
    terminals(dir.path())
        .args([
            "region", "--lat", "37.7", "--lon", "-122.3", "--lat-delta", "20", "--lon-delta", "20",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_cities_autocomplete() {
    let dir = workspace();
    terminals(dir.path())
        .args(["cities", "SAN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("San Francisco"))
        .stdout(predicate::str::contains("Oakland").not());
}

#[test]
fn test_cities_json_lists_all() {
    let dir = workspace();
    let output = terminals(dir.path())
        .args(["--format", "json", "cities"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // "Nowhere" has an invalid location, so Oakland comes from OAK alone.
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, ["Los Angeles", "Oakland", "San Francisco"]);
}

#[test]
fn test_icon_resolution() {
    let dir = workspace();
    terminals(dir.path())
        .args(["icon", "SeaPort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pin_SeaPort"));

    terminals(dir.path())
        .args(["icon", "Blimp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pin_CivilianAirport"));
}

#[test]
fn test_missing_seed_fails() {
    let dir = workspace();
    terminals(dir.path())
        .args(["--seed", "missing.json", "near", "--lat", "0", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load terminals"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("terminals.toml"),
        "[viewport]\npadding_factor = 0.5\n",
    )
    .unwrap();

    terminals(dir.path())
        .args(["icon", "SeaPort"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
