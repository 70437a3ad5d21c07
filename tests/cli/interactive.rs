use crate::support::{graphkit, write_graph, FOUR_CYCLE, ISOLATED_VERTEX};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Interactive menu sessions (graph and menu choices on one stdin)
// ============================================================================

#[test]
fn test_session_is_the_default_command() {
    let script = format!("{}3\n1\n3\n\n0\n", FOUR_CYCLE);
    graphkit()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter graph:"))
        .stdout(predicate::str::contains("Select operation:"))
        .stdout(predicate::str::contains("Shortest distance 1 -> 3 = 3"));
}

#[test]
fn test_quiet_session_prints_only_results() {
    let script = format!("{}5\n\n0\n", FOUR_CYCLE);
    graphkit()
        .args(["--quiet", "interactive"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout("Kruskal's MST total weight = 6\n1 - 2 : 1\n2 - 3 : 2\n3 - 4 : 3\n");
}

#[test]
fn test_session_survives_algorithm_errors() {
    let script = format!("{}4\n3\n1\n3\n1\n7\n2\n2\n", ISOLATED_VERTEX);
    graphkit()
        .args(["--quiet", "interactive"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("error: graph is not connected; prim"))
        .stdout(predicate::str::contains("error: no path from 1 to 3"))
        .stdout(predicate::str::contains("error: invalid vertex 7"))
        .stdout(predicate::str::contains("BFS spanning tree edges from 2:\n2 -> 1\nUnreachable: 3\n"));
}

#[test]
fn test_session_exports_highlighted_tree() {
    let dir = tempdir().unwrap();
    let export = dir.path().join("bfs.json");
    let script = format!("{}2\n1\n{}\n0\n", FOUR_CYCLE, export.display());

    graphkit()
        .args(["--quiet", "interactive"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS spanning tree edges from 1:"))
        .stdout(predicate::str::contains("Visualization written to"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    let highlighted: Vec<(u64, u64)> = saved["edges"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["highlighted"] == true)
        .map(|e| (e["u"].as_u64().unwrap(), e["v"].as_u64().unwrap()))
        .collect();
    assert_eq!(highlighted, vec![(1, 2), (2, 3), (4, 1)]);
    assert_eq!(saved["nodes"][0]["role"], "source");
}

#[test]
fn test_session_ends_cleanly_at_eof() {
    graphkit()
        .args(["--quiet", "interactive"])
        .write_stdin(FOUR_CYCLE)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_session_with_graph_file_reads_menu_from_stdin() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), FOUR_CYCLE);

    graphkit()
        .arg("--input")
        .arg(&graph)
        .args(["--quiet", "interactive"])
        .write_stdin("7\n0\n")
        .assert()
        .success()
        .stdout("1: 2 (1), 4 (4)\n2: 1 (1), 3 (2)\n3: 2 (2), 4 (3)\n4: 3 (3), 1 (4)\n");
}

#[test]
fn test_malformed_graph_ends_session_with_data_error() {
    graphkit()
        .args(["--quiet", "interactive"])
        .write_stdin("2 1\n1 x\n1\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed input at line 2"));
}
