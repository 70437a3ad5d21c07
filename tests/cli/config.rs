use crate::support::{graphkit, FOUR_CYCLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file discovery
// ============================================================================

#[test]
fn test_explicit_config_sets_default_weight() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("graphkit.toml");
    fs::write(&config, "[input]\ndefault_weight = 2.5\n").unwrap();

    graphkit()
        .arg("--config")
        .arg(&config)
        .args(["path", "--source", "1", "--target", "3"])
        .write_stdin("3 2\n1 2\n2 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest distance 1 -> 3 = 5"));
}

#[test]
fn test_config_dir_env_is_discovered() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[traversal]\nmax_depth = 1\n").unwrap();

    graphkit()
        .env("GRAPHKIT_CONFIG_DIR", dir.path())
        .args(["dfs", "--source", "1"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Truncated: max_depth"));
}

#[test]
fn test_max_depth_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[traversal]\nmax_depth = 1\n").unwrap();

    graphkit()
        .env("GRAPHKIT_CONFIG_DIR", dir.path())
        .args(["--max-depth", "10", "dfs", "--source", "1"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Truncated").not());
}

#[test]
fn test_prim_start_from_config_is_validated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[mst]\nprim_start = 8\n").unwrap();

    graphkit()
        .env("GRAPHKIT_CONFIG_DIR", dir.path())
        .arg("prim")
        .write_stdin(FOUR_CYCLE)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid vertex 8"));
}

#[test]
fn test_invalid_config_is_data_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[input\n").unwrap();

    graphkit()
        .arg("--config")
        .arg(&config)
        .arg("adjacency")
        .write_stdin(FOUR_CYCLE)
        .assert()
        .code(3);
}

#[test]
fn test_missing_explicit_config_fails() {
    graphkit()
        .args(["--config", "/nonexistent/graphkit.toml", "adjacency"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
