//! Integration tests for the citymap CLI.
//!
//! These run the compiled binary end to end against the default network
//! and against snapshot files.

use rstest::{fixture, rstest};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

/// Run the citymap binary in `dir` with colors disabled
fn run_citymap_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_citymap"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute citymap binary")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "citymap failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[rstest]
fn test_cli_help(temp_dir: TempDir) {
    let stdout = stdout_of(&run_citymap_in_dir(temp_dir.path(), &["--help"]));
    assert!(stdout.contains("citymap"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("route"));
}

#[rstest]
fn test_cli_version(temp_dir: TempDir) {
    let stdout = stdout_of(&run_citymap_in_dir(temp_dir.path(), &["--version"]));
    assert!(stdout.contains("0.1.0"));
}

// ============================================================================
// Query Commands
// ============================================================================

#[rstest]
#[case::matrix("matrix")]
#[case::list("list")]
fn test_route_on_default_network(temp_dir: TempDir, #[case] representation: &str) {
    let stdout = stdout_of(&run_citymap_in_dir(
        temp_dir.path(),
        &["--representation", representation, "route", "Beijing", "8"],
    ));

    assert!(stdout.contains("Beijing (1) to Chengdu (8): 2600"));
    assert!(stdout.contains("Beijing (1) -> Nanjing (6) -> Wuhan (7) -> Chengdu (8)"));
}

#[rstest]
fn test_info_json(temp_dir: TempDir) {
    let stdout = stdout_of(&run_citymap_in_dir(
        temp_dir.path(),
        &["--json", "--representation", "list", "info"],
    ));

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["representation"], "list");
    assert_eq!(parsed["directed"], false);
    assert_eq!(parsed["cities"], 8);
    assert_eq!(parsed["routes"], 8);
}

#[rstest]
fn test_render_matrix(temp_dir: TempDir) {
    let stdout = stdout_of(&run_citymap_in_dir(temp_dir.path(), &["render"]));

    assert!(stdout.starts_with("=== Adjacency Matrix ==="));
    assert!(stdout.contains("INF"));
}

#[rstest]
fn test_unknown_city_fails(temp_dir: TempDir) {
    let output = run_citymap_in_dir(temp_dir.path(), &["bfs", "Atlantis"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("City not found: 'Atlantis'"));
}

// ============================================================================
// Snapshot Round Trip
// ============================================================================

#[rstest]
fn test_export_then_load(temp_dir: TempDir) {
    let dir = temp_dir.path();

    let stdout = stdout_of(&run_citymap_in_dir(dir, &["export", "network.json"]));
    assert!(stdout.contains("Exported 8 city(ies) and 8 route(s)"));
    assert!(dir.join("network.json").exists());

    let stdout = stdout_of(&run_citymap_in_dir(
        dir,
        &["--network", "network.json", "--json", "route", "Shenzhen", "Beijing"],
    ));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["distance"], 2750);
}

#[rstest]
fn test_config_file_selects_network(temp_dir: TempDir) {
    let dir = temp_dir.path();
    std::fs::write(
        dir.join("tiny.json"),
        r#"{"cities":[{"id":1,"name":"A"},{"id":2,"name":"B"}],
            "routes":[{"from":1,"to":2,"weight":3},{"from":1,"to":9,"weight":1}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("citymap.yaml"),
        "representation: list\nnetwork-file: tiny.json\n",
    )
    .unwrap();

    let output = run_citymap_in_dir(dir, &["--config", "citymap.yaml", "--json", "info"]);
    let stdout = stdout_of(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["representation"], "list");
    assert_eq!(parsed["cities"], 2);
    assert_eq!(parsed["routes"], 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipped route 1 -> 9: unknown city"));
}

#[rstest]
fn test_working_directory_config_is_picked_up(temp_dir: TempDir) {
    let dir = temp_dir.path();
    std::fs::write(dir.join("citymap.yaml"), "representation: list\ndirected: true\n").unwrap();

    let stdout = stdout_of(&run_citymap_in_dir(dir, &["--json", "info"]));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["representation"], "list");
    assert_eq!(parsed["directed"], true);
    assert_eq!(parsed["routes"], 8);
}
