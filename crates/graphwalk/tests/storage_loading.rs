//! Integration tests for loading and saving graph and lineage files.

use graphwalk::storage::{load_graph, load_lineage, save_graph, save_lineage, LoadWarning};
use graphwalk::{ancestry::Lineage, graph::Graph};
use tempfile::TempDir;

async fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    tokio::fs::write(&path, content).await.unwrap();
    path
}

#[tokio::test]
async fn test_load_graph_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "graph.jsonl",
        concat!(
            "{\"type\":\"vertex\",\"id\":1}\n",
            "{\"type\":\"vertex\",\"id\":2}\n",
            "not json\n",
            "\n",
            "{\"type\":\"edge\",\"from\":1,\"to\":2}\n",
            "{\"type\":\"edge\",\"from\":2,\"to\":9}\n",
            "{\"type\":\"vertex\",\"id\":1}\n",
        ),
    )
    .await;

    let (graph, warnings) = load_graph(&path).await.unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains_edge(&1, &2));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(warnings.len(), 3);
    assert!(matches!(
        warnings[0],
        LoadWarning::MalformedJson { line_number: 3, .. }
    ));
    assert_eq!(
        warnings[1],
        LoadWarning::DanglingEdge {
            from: 2,
            to: 9,
            missing: 9
        }
    );
    assert_eq!(warnings[2], LoadWarning::DuplicateVertex { id: 1 });
}

#[tokio::test]
async fn test_duplicate_vertex_keeps_loaded_edges() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "graph.jsonl",
        concat!(
            "{\"type\":\"vertex\",\"id\":1}\n",
            "{\"type\":\"vertex\",\"id\":2}\n",
            "{\"type\":\"edge\",\"from\":1,\"to\":2}\n",
            "{\"type\":\"vertex\",\"id\":1}\n",
        ),
    )
    .await;

    let (graph, _) = load_graph(&path).await.unwrap();
    assert!(graph.contains_edge(&1, &2));
}

#[tokio::test]
async fn test_missing_files_load_empty() {
    let dir = TempDir::new().unwrap();

    let (graph, warnings) = load_graph(&dir.path().join("absent.jsonl")).await.unwrap();
    assert!(graph.is_empty());
    assert!(warnings.is_empty());

    let (lineage, warnings) = load_lineage(&dir.path().join("absent.jsonl")).await.unwrap();
    assert!(lineage.is_empty());
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn test_graph_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.jsonl");

    let mut graph = Graph::from_edges([(3, 1), (1, 2), (2, 3)]);
    graph.add_vertex(10);
    save_graph(&graph, &path).await.unwrap();

    let (loaded, warnings) = load_graph(&path).await.unwrap();
    assert!(warnings.is_empty());
    assert_eq!(loaded, graph);
    assert_eq!(loaded.dft(&1).unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_lineage_save_is_sorted_and_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lineage.jsonl");

    let lineage = Lineage::from_pairs([(10, 1), (1, 3), (2, 3)]);
    save_lineage(&lineage, &path).await.unwrap();

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"parent":1,"child":3}"#,
            r#"{"parent":2,"child":3}"#,
            r#"{"parent":10,"child":1}"#,
        ]
    );

    let (loaded, warnings) = load_lineage(&path).await.unwrap();
    assert!(warnings.is_empty());
    assert_eq!(loaded.earliest_ancestor(&3), Some(10));
}

#[tokio::test]
async fn test_lineage_with_malformed_line() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "lineage.jsonl",
        "{\"parent\":1,\"child\":2}\n{\"parent\":\"x\"}\n{\"parent\":0,\"child\":1}\n",
    )
    .await;

    let (lineage, warnings) = load_lineage(&path).await.unwrap();
    assert_eq!(lineage.earliest_ancestor(&2), Some(0));
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().starts_with("line 2:"));
}
