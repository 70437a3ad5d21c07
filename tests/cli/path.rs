use crate::support::{graphkit, stdout_json, FOUR_CYCLE, ISOLATED_VERTEX};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Shortest path
// ============================================================================

#[test]
fn test_path_human_output() {
    graphkit()
        .args(["path", "--source", "1", "--target", "3"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("Shortest distance 1 -> 3 = 3\nPath: 1 -> 2 -> 3\n");
}

#[test]
fn test_path_records_output() {
    graphkit()
        .args(["--format", "records", "path", "-s", "3", "-t", "1"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("H graphkit=1 records=1 mode=path from=3 to=1 distance=3 hops=2\nP 3 2 1\n");
}

#[test]
fn test_path_json_output() {
    let output = graphkit()
        .args(["--format", "json", "path", "--source", "1", "--target", "4"])
        .write_stdin(FOUR_CYCLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["distance"], 4.0);
    assert_eq!(json["path"], serde_json::json!([1, 4]));
    assert_eq!(json["hops"], 1);
}

#[test]
fn test_path_to_itself() {
    graphkit()
        .args(["path", "--source", "2", "--target", "2"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("Shortest distance 2 -> 2 = 0\nPath: 2\n");
}

#[test]
fn test_fractional_weights() {
    graphkit()
        .args(["path", "--source", "1", "--target", "3"])
        .write_stdin("3 3\n1 2 0.5\n2 3 0.25\n1 3 1\n")
        .assert()
        .success()
        .stdout("Shortest distance 1 -> 3 = 0.75\nPath: 1 -> 2 -> 3\n");
}

#[test]
fn test_unreachable_target_reports_no_path() {
    graphkit()
        .args(["path", "--source", "1", "--target", "3"])
        .write_stdin(ISOLATED_VERTEX)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no path from 1 to 3"));
}

#[test]
fn test_unreachable_json_envelope() {
    let output = graphkit()
        .args(["--format", "json", "path", "--source", "1", "--target", "3"])
        .write_stdin(ISOLATED_VERTEX)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unreachable");
    assert_eq!(err["error"]["code"], 1);
}

#[test]
fn test_path_export_marks_source_and_target() {
    let dir = tempdir().unwrap();
    let export = dir.path().join("path.json");

    graphkit()
        .args(["path", "--source", "1", "--target", "3", "--export"])
        .arg(&export)
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(doc["nodes"][0]["role"], "source");
    assert_eq!(doc["nodes"][2]["role"], "target");
    assert_eq!(doc["nodes"][3]["role"], "plain");
    assert_eq!(doc["edges"][0]["highlighted"], true);
    assert_eq!(doc["edges"][1]["highlighted"], true);
    assert_eq!(doc["edges"][2]["highlighted"], false);
}
