//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the graphwalk binary in the specified directory with colors disabled.
pub fn run_graphwalk_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphwalk"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("GRAPHWALK_ASCII", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute graphwalk binary")
}

/// Run a command that must succeed and return its stdout.
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_graphwalk_in_dir(dir, args);
    assert!(
        output.status.success(),
        "graphwalk {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Run a command with `--json` that must succeed and parse its stdout.
pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = run_ok(dir, &full);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON from graphwalk {args:?}: {e}\n{stdout}"))
}

/// Populate an initialized repository with the seven-vertex sample graph.
pub fn build_sample_graph(dir: &Path) {
    run_ok(dir, &["add-vertex", "1", "2", "3", "4", "5", "6", "7"]);
    for (from, to) in [
        ("5", "3"),
        ("6", "3"),
        ("7", "1"),
        ("4", "7"),
        ("1", "2"),
        ("7", "6"),
        ("2", "4"),
        ("3", "5"),
        ("2", "3"),
        ("4", "6"),
    ] {
        run_ok(dir, &["add-edge", from, to]);
    }
}

/// Populate an initialized repository with the sample family tree.
pub fn build_sample_family(dir: &Path) {
    for (parent, child) in [
        ("1", "3"),
        ("2", "3"),
        ("3", "6"),
        ("5", "6"),
        ("5", "7"),
        ("4", "5"),
        ("4", "8"),
        ("8", "9"),
        ("11", "8"),
        ("10", "1"),
    ] {
        run_ok(dir, &["add-parent", parent, child]);
    }
}
