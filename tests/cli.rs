//! End-to-end tests for the campus-route binary.

use std::fs;
use std::process::{Command, Output};

use campus_route::CampusConfig;
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_campus-route"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute campus-route")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_route_by_id() {
    let output = run(&["route", "1", "7"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Library <--- G & H Block <--- C Block\nTotal Distance 470\n"
    );
}

#[test]
fn test_route_by_name() {
    let output = run(&["route", "A Block", "Library"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Total Distance 470"));
}

#[test]
fn test_self_route() {
    let output = run(&["route", "OAT", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OAT\nTotal Distance 0\n");
}

#[test]
fn test_out_of_range_id_fails() {
    let output = run(&["route", "1", "9"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("node 9 is out of range"));
}

#[test]
fn test_unknown_landmark_fails() {
    let output = run(&["route", "A Block", "Gym"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown landmark: Gym"));
}

#[test]
fn test_reservation_cuts_off_library() {
    let output = run(&["route", "1", "7", "--reserve", "6", "7"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Reserved G & H Block -> Library (70)"));
    assert!(stderr(&output).contains("no route from node 1 to node 7"));
}

#[test]
fn test_reservation_reroutes() {
    let output = run(&["route", "A Block", "Library", "--reserve", "C Block", "G & H Block"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Reserved C Block -> G & H Block (300)"));
    assert!(out.contains("Library <--- G & H Block <--- OAT <--- C Block"));
    assert!(out.contains("Total Distance 470"));
}

#[test]
fn test_landmarks_listing() {
    let output = run(&["landmarks"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 8);
    assert!(out.contains("  0  Agriculture Block"));
    assert!(out.contains("  7  Library"));
}

#[test]
fn test_custom_map_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("campus.toml");
    fs::write(&path, r#"
landmarks = ["Gate", "Canteen", "Hostel"]
weights = [
    [0, 10, 999],
    [10, 0, 20],
    [999, 20, 0],
]
"#).unwrap();

    let output = run(&["route", "Gate", "Hostel", "--map", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hostel <--- Canteen\nTotal Distance 30\n");
}

#[test]
fn test_serialized_sample_round_trips_through_cli() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.toml");
    fs::write(&path, toml::to_string(&CampusConfig::sample()).unwrap()).unwrap();

    let output = run(&["--map", path.to_str().unwrap(), "route", "0", "7"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Total Distance 720"));
}

#[test]
fn test_missing_map_file() {
    let output = run(&["route", "0", "1", "--map", "/no/such/map.toml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to load map"));
}
