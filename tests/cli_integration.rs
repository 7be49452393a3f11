// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the graphpath CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const LINE_MATRIX: &str = "0 1 0\n1 0 1\n0 1 0\n";
const FIVE_MATRIX: &str = "0 2 6 0 0\n2 0 3 5 0\n6 3 0 1 0\n0 5 1 0 4\n0 0 0 4 0\n";

/// A graphpath command isolated from the user's config and environment
fn graphpath(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("graphpath").expect("binary is built");
    cmd.env("GRAPHPATH_CONFIG", dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    std::fs::write(dir.path().join("config.toml"), "").expect("write empty config");
    cmd
}

/// Write graph text into the temp dir
fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write input");
    path
}

#[test]
fn test_path_on_line_matrix() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["path", "--matrix"])
        .arg(&matrix)
        .args(["0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 0 → 1 → 2"))
        .stdout(predicate::str::contains("Total weight: 2"));
}

#[test]
fn test_path_json_output() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "five.txt", FIVE_MATRIX);

    let output = graphpath(&dir)
        .args(["--json", "path", "--matrix"])
        .arg(&matrix)
        .args(["0", "4"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_weight"], serde_json::json!(10.0));
    assert_eq!(report["path"][0], 0);
    assert_eq!(report["path"].as_array().and_then(|p| p.last()), Some(&serde_json::json!(4)));
}

#[test]
fn test_no_path_in_directed_list() {
    let dir = TempDir::new().unwrap();
    let list = write_input(&dir, "chain.txt", "0: ->1\n1: ->2\n");

    graphpath(&dir)
        .args(["path", "--list"])
        .arg(&list)
        .args(["2", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path between 2 and 0"));
}

#[test]
fn test_path_from_stdin() {
    let dir = TempDir::new().unwrap();

    graphpath(&dir)
        .args(["path", "--list", "-", "0", "1"])
        .write_stdin("0: →1(4,5)\n1: →0(4,5)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total weight: 4.5"));
}

#[test]
fn test_show_reports_directedness() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "oneway.txt", "0 2\n0 0\n");

    graphpath(&dir)
        .args(["show", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: directed"))
        .stdout(predicate::str::contains(" 0 (V0): →1(2)"))
        .stdout(predicate::str::contains(" 1 (V1): no adjacent vertices"));
}

#[test]
fn test_out_of_range_ids_warn() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["path", "--matrix"])
        .arg(&matrix)
        .args(["0", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path between 0 and 7"))
        .stderr(predicate::str::contains("vertex ids out of range"));
}

#[test]
fn test_quiet_silences_warnings() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["-q", "path", "--matrix"])
        .arg(&matrix)
        .args(["0", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path between 0 and 7"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_show_counts_components() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "split.txt", "0 1 0 0\n1 0 0 0\n0 0 0 0\n0 0 0 0\n");

    graphpath(&dir)
        .args(["show", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("Components: 3"));
}

#[test]
fn test_show_with_names_and_draw() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["show", "--draw", "--names", "a,b,c", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: undirected"))
        .stdout(predicate::str::contains("[1] b"))
        .stdout(predicate::str::contains("0 -- 1 (1.0)"));
}

#[test]
fn test_export_dot_to_file() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);
    let out = dir.path().join("graph.dot");

    graphpath(&dir)
        .args(["export", "--format", "dot", "--matrix"])
        .arg(&matrix)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let dot = std::fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("graph G {"));
    assert!(dot.contains("0 -- 1"));
}

#[test]
fn test_export_unknown_format() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["export", "--format", "yaml", "--matrix"])
        .arg(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_validate_rejects_ragged_matrix() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "bad.txt", "0 1\n1\n");

    graphpath(&dir)
        .args(["validate", "--matrix"])
        .arg(&matrix)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2: expected 2 values, found 1"));
}

#[test]
fn test_validate_accepts_list() {
    let dir = TempDir::new().unwrap();
    let list = write_input(&dir, "ok.txt", "0: ->1(2) →2\n1:\n");

    graphpath(&dir)
        .args(["validate", "--list"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid adjacency list"));
}

#[test]
fn test_build_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let list = write_input(&dir, "bad.txt", "0 ->1\n");

    graphpath(&dir)
        .args(["path", "--list"])
        .arg(&list)
        .args(["0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse adjacency list"));
}

#[test]
fn test_input_formats_are_exclusive() {
    let dir = TempDir::new().unwrap();
    let matrix = write_input(&dir, "line.txt", LINE_MATRIX);

    graphpath(&dir)
        .args(["show", "--matrix"])
        .arg(&matrix)
        .arg("--list")
        .arg(&matrix)
        .assert()
        .failure();
}

#[test]
fn test_config_key_lookup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("custom.toml"), "[layout]\nmax_radius = 75.0\n").unwrap();

    graphpath(&dir)
        .arg("--config")
        .arg(dir.path().join("custom.toml"))
        .args(["config", "layout.max_radius"])
        .assert()
        .success()
        .stdout(predicate::str::diff("75.0\n"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    graphpath(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graphpath"));
}
