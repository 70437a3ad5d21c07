use crate::support::{graphkit, stdout_json, FOUR_CYCLE};

// ============================================================================
// Adjacency listing
// ============================================================================

#[test]
fn test_adjacency_human_output() {
    graphkit()
        .arg("adjacency")
        .write_stdin("3 2\n1 2 5\n2 3\n")
        .assert()
        .success()
        .stdout("1: 2 (5)\n2: 1 (5), 3 (1)\n3: 2 (1)\n");
}

#[test]
fn test_adjacency_records_output() {
    graphkit()
        .args(["--format", "records", "adjacency"])
        .write_stdin("3 1\n1 2 1.5\n")
        .assert()
        .success()
        .stdout("H graphkit=1 records=1 mode=adjacency vertices=3 edges=1\nA 1 2:1.5\nA 2 1:1.5\nA 3\n");
}

#[test]
fn test_adjacency_json_output() {
    let output = graphkit()
        .args(["--format", "json", "adjacency"])
        .write_stdin(FOUR_CYCLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 4);
    let first = &json["adjacency"][0];
    assert_eq!(first["vertex"], 1);
    assert_eq!(first["neighbors"][0]["vertex"], 2);
    assert_eq!(first["neighbors"][1]["vertex"], 4);
}

#[test]
fn test_input_with_blank_lines_and_missing_weights() {
    graphkit()
        .arg("adjacency")
        .write_stdin("\n\n2 1\n\n1 2\n")
        .assert()
        .success()
        .stdout("1: 2 (1)\n2: 1 (1)\n");
}
