use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// The 4-cycle 1-2-3-4-1 with weights 1, 2, 3, 4
pub const FOUR_CYCLE: &str = "4 4\n1 2 1\n2 3 2\n3 4 3\n4 1 4\n";

/// Three vertices, vertex 3 isolated
pub const ISOLATED_VERTEX: &str = "3 1\n1 2 1\n";

/// Get a Command for graphkit with config discovery pointed away from the user's files
pub fn graphkit() -> Command {
    let mut cmd = cargo_bin_cmd!("graphkit");
    cmd.env("GRAPHKIT_CONFIG_DIR", "/nonexistent/graphkit-test-config");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("GRAPHKIT_LOG");
    cmd.env_remove("GRAPHKIT_LOG_LEVEL");
    cmd
}

/// Write graph text into `dir` and return its path
pub fn write_graph(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("graph.txt");
    fs::write(&path, text).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
