use crate::support::{graphkit, FOUR_CYCLE};
use predicates::prelude::*;

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    graphkit()
        .args(["--verbose", "kruskal"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Kruskal's MST total weight = 6"))
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("load_graph"));
}

#[test]
fn test_default_level_is_quiet() {
    graphkit()
        .arg("kruskal")
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_log_level_debug_reaches_core_crate() {
    graphkit()
        .args(["--log-level", "graphkit_core=debug", "path", "-s", "1", "-t", "3"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stderr(predicate::str::contains("dijkstra"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let output = graphkit()
        .args(["--log-json", "--log-level", "debug", "adjacency"])
        .write_stdin(FOUR_CYCLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("expected log output");
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
