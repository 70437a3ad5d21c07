use crate::support::{graphkit, stdout_json, write_graph, FOUR_CYCLE, ISOLATED_VERTEX};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Minimum spanning trees
// ============================================================================

#[test]
fn test_kruskal_human_output() {
    graphkit()
        .arg("kruskal")
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("Kruskal's MST total weight = 6\n1 - 2 : 1\n2 - 3 : 2\n3 - 4 : 3\n");
}

#[test]
fn test_prim_human_output() {
    graphkit()
        .arg("prim")
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Prim's MST total weight = 6\n"));
}

#[test]
fn test_prim_and_kruskal_agree_on_weight() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "6 9\n1 2 7\n1 3 9\n1 6 14\n2 3 10\n2 4 15\n3 4 11\n3 6 2\n4 5 6\n5 6 9\n",
    );

    let mut totals = Vec::new();
    for algorithm in ["prim", "kruskal"] {
        let output = graphkit()
            .arg("--input")
            .arg(&graph)
            .args(["--format", "json", algorithm])
            .output()
            .unwrap();
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["algorithm"], algorithm);
        assert_eq!(json["edges"].as_array().unwrap().len(), 5);
        totals.push(json["total_weight"].as_f64().unwrap());
    }
    assert_eq!(totals, vec![33.0, 33.0]);
}

#[test]
fn test_kruskal_records_output() {
    graphkit()
        .args(["--format", "records", "kruskal"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(
            "H graphkit=1 records=1 mode=mst algorithm=kruskal total_weight=6 edges=3\n\
             E 1 2 1\n\
             E 2 3 2\n\
             E 3 4 3\n",
        );
}

#[test]
fn test_disconnected_graph_fails_both_algorithms() {
    for algorithm in ["prim", "kruskal"] {
        graphkit()
            .arg(algorithm)
            .write_stdin(ISOLATED_VERTEX)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("graph is not connected"))
            .stderr(predicate::str::contains(algorithm));
    }
}

#[test]
fn test_prim_start_flag() {
    graphkit()
        .args(["prim", "--start", "3"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight = 6"));

    graphkit()
        .args(["prim", "--start", "9"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .code(2);
}

#[test]
fn test_kruskal_export_highlights_mst_edges() {
    let dir = tempdir().unwrap();
    let export = dir.path().join("mst.json");

    graphkit()
        .args(["kruskal", "--export"])
        .arg(&export)
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    let highlighted = doc["edges"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["highlighted"] == true)
        .count();
    assert_eq!(highlighted, 3);
    assert_eq!(doc["edges"][3]["highlighted"], false);
}
