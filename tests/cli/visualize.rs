use crate::support::{graphkit, stdout_json, FOUR_CYCLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Visualization export
// ============================================================================

#[test]
fn test_visualize_to_stdout() {
    let output = graphkit()
        .arg("visualize")
        .write_stdin(FOUR_CYCLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["vertex_count"], 4);
    assert_eq!(doc["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(doc["nodes"][0]["degree"], 2);
    assert_eq!(doc["edges"][3]["u"], 4);
    assert_eq!(doc["edges"][3]["v"], 1);
    assert_eq!(doc["edges"][3]["weight"], 4.0);
    assert!(doc["edges"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["highlighted"] == false));
}

#[test]
fn test_visualize_to_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("graph.json");

    graphkit()
        .args(["visualize", "--output"])
        .arg(&out)
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Visualization written to"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["edges"].as_array().unwrap().len(), 4);
}

#[test]
fn test_visualize_quiet_to_file_prints_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("graph.json");

    graphkit()
        .args(["--quiet", "visualize", "--output"])
        .arg(&out)
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("");
    assert!(out.exists());
}
