//! Integration tests for the trellis CLI
//!
//! These tests run the trellis binary and verify output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for trellis
fn trellis() -> Command {
    cargo_bin_cmd!("trellis")
}

/// Triangle graph: 0-1 (1), 1-2 (1), 0-2 (5)
fn triangle_args() -> Vec<&'static str> {
    vec![
        "--nodes", "3", "--edge", "0,1,1", "--edge", "1,2,1", "--edge", "0,2,5",
    ]
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    trellis()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trellis"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_version_flag() {
    trellis()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}

#[test]
fn test_subcommand_help() {
    trellis()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cheapest route"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    trellis()
        .args(["--format", "invalid", "demo"])
        .assert()
        .code(2);
}

#[test]
fn test_no_command_exit_code_2() {
    trellis().assert().code(2);
}

#[test]
fn test_malformed_edge_exit_code_2() {
    trellis()
        .args(["route", "--nodes", "3", "--edge", "0,1", "--from", "0", "--to", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_self_loop_exit_code_3() {
    trellis()
        .args(["route", "--nodes", "3", "--edge", "1,1,4", "--from", "0", "--to", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("same node"));
}

#[test]
fn test_duplicate_edge_exit_code_3() {
    trellis()
        .args([
            "route", "--nodes", "3", "--edge", "0,1,1", "--edge", "0,1,2", "--from", "0", "--to",
            "1",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already present"));
}

#[test]
fn test_unknown_node_exit_code_3() {
    trellis()
        .args(["route", "--nodes", "2", "--edge", "0,5,1", "--from", "0", "--to", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: 5"));
}

#[test]
fn test_directional_without_directed_exit_code_2() {
    trellis()
        .args([
            "route", "--nodes", "2", "--edge", "0,1,1", "--directional", "--from", "0", "--to",
            "1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--directional requires --directed"));
}

// ============================================================================
// Route command
// ============================================================================

#[test]
fn test_route_human_output() {
    trellis()
        .arg("route")
        .args(triangle_args())
        .args(["--from", "0", "--to", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2 (cost 2)"));
}

#[test]
fn test_route_json_output() {
    let output = trellis()
        .arg("route")
        .args(triangle_args())
        .args(["--from", "0", "--to", "2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"], 0);
    assert_eq!(value["destination"], 2);
    assert_eq!(value["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(value["cost"], 2);
    assert_eq!(value["reachable"], true);
}

#[test]
fn test_route_unreachable_is_success() {
    trellis()
        .args([
            "route", "--nodes", "4", "--edge", "0,1,1", "--edge", "2,3,1", "--from", "0", "--to",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from 0 to 3"));
}

#[test]
fn test_route_unreachable_json() {
    let output = trellis()
        .args([
            "route", "--nodes", "4", "--edge", "0,1,1", "--edge", "2,3,1", "--from", "0", "--to",
            "3", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reachable"], false);
    assert_eq!(value["path"], serde_json::json!([]));
    assert!(value.get("cost").is_none());
}

#[test]
fn test_route_directed_one_way() {
    trellis()
        .args([
            "route", "--nodes", "2", "--directed", "--directional", "--edge", "0,1,1", "--from",
            "1", "--to", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no route from 1 to 0"));
}

// ============================================================================
// Matrix command
// ============================================================================

#[test]
fn test_matrix_human_output() {
    trellis()
        .arg("matrix")
        .args(["--nodes", "2", "--edge", "0,1,7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{221e}"))
        .stdout(predicate::str::contains("7"));
}

#[test]
fn test_matrix_json_output() {
    let output = trellis()
        .arg("matrix")
        .args(["--nodes", "2", "--edge", "0,1,7", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["directed"], false);
    assert_eq!(value["node_count"], 2);
    assert_eq!(value["edge_count"], 1);
    assert_eq!(
        value["cells"],
        serde_json::json!([[null, 7], [null, null]])
    );
}

// ============================================================================
// Demo command
// ============================================================================

#[test]
fn test_demo_runs_sample_routes() {
    trellis()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 4 -> 1 -> 6 -> 7 -> 9 (cost 14)"))
        .stdout(predicate::str::contains("0 -> 4 -> 3 -> 2 -> 8 (cost 16)"))
        .stdout(predicate::str::contains("2 -> 8 -> 5 (cost 15)"));
}

#[test]
fn test_demo_quiet_suppresses_matrix() {
    trellis()
        .args(["--quiet", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{221e}").not())
        .stdout(predicate::str::contains("(cost 14)"));
}

// ============================================================================
// JSON error envelope
// ============================================================================

#[test]
fn test_structural_error_json_envelope() {
    let output = trellis()
        .args([
            "route", "--nodes", "3", "--edge", "1,1,4", "--from", "0", "--to", "1", "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], 3);
    assert_eq!(value["error"]["type"], "self_loop");
}

#[test]
fn test_parse_error_json_envelope() {
    let output = trellis()
        .args([
            "--format", "json", "route", "--nodes", "3", "--edge", "nonsense", "--from", "0",
            "--to", "1",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], 2);
    assert_eq!(value["error"]["type"], "usage_error");
}
