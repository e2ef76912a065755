//! Integration tests for resilient JSONL loading.
//!
//! Graph and lineage files are edited by hand, so a bad line must never
//! prevent the rest of the file from loading.

use futures::stream::StreamExt;
use graphwalk_jsonl::{read_jsonl_resilient, write_jsonl_atomic, JsonlReader, Warning};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Write};
use std::pin::pin;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ParentChild {
    parent: u64,
    child: u64,
}

fn pair(parent: u64, child: u64) -> ParentChild {
    ParentChild { parent, child }
}

// =============================================================================
// Streaming
// =============================================================================

#[tokio::test]
async fn stream_resilient_empty_input() {
    let reader = JsonlReader::new(Cursor::new(b""));
    let (stream, warnings) = reader.stream_resilient::<ParentChild>();

    let records: Vec<ParentChild> = pin!(stream).collect().await;

    assert!(records.is_empty());
    assert!(warnings.is_empty());
}

#[rstest]
#[case::all_valid("{\"parent\":1,\"child\":3}\n{\"parent\":2,\"child\":3}\n", 2, vec![])]
#[case::all_invalid("{bad}\nnull\n\"text\"\n", 0, vec![1, 2, 3])]
#[case::alternating("{\"parent\":1,\"child\":3}\n{bad}\n{\"parent\":2,\"child\":3}\n{bad}\n", 2, vec![2, 4])]
#[case::blank_lines_ignored("\n\n{\"parent\":1,\"child\":3}\n\n{oops\n", 1, vec![5])]
#[case::wrong_shape("{\"parent\":1}\n{\"parent\":\"x\",\"child\":2}\n", 0, vec![1, 2])]
#[tokio::test]
async fn stream_resilient_reports_bad_lines(
    #[case] content: &str,
    #[case] expected_records: usize,
    #[case] expected_warning_lines: Vec<usize>,
) {
    let reader = JsonlReader::new(Cursor::new(content.as_bytes().to_vec()));
    let (stream, warnings) = reader.stream_resilient::<ParentChild>();

    let records: Vec<ParentChild> = pin!(stream).collect().await;

    assert_eq!(records.len(), expected_records);
    let lines: Vec<usize> = warnings
        .warnings()
        .iter()
        .map(Warning::line_number)
        .collect();
    assert_eq!(lines, expected_warning_lines);
    assert!(warnings
        .warnings()
        .iter()
        .all(|w| matches!(w, Warning::MalformedJson { .. })));
}

#[tokio::test]
async fn stream_resilient_preserves_record_order() {
    let content = "{\"parent\":10,\"child\":1}\n{garbage}\n{\"parent\":1,\"child\":3}\n";
    let reader = JsonlReader::new(Cursor::new(content.as_bytes().to_vec()));
    let (stream, _warnings) = reader.stream_resilient::<ParentChild>();

    let records: Vec<ParentChild> = pin!(stream).collect().await;

    assert_eq!(records, vec![pair(10, 1), pair(1, 3)]);
}

// =============================================================================
// File-level helpers
// =============================================================================

#[tokio::test]
async fn read_jsonl_resilient_with_corrupted_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"parent\":1,\"child\":3}}").unwrap();
    writeln!(file, "{{\"parent\":2,").unwrap();
    writeln!(file, "{{\"parent\":3,\"child\":6}}").unwrap();
    file.flush().unwrap();

    let (records, warnings) = read_jsonl_resilient::<ParentChild, _>(file.path())
        .await
        .unwrap();

    assert_eq!(records, vec![pair(1, 3), pair(3, 6)]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line_number(), 2);
}

#[tokio::test]
async fn read_jsonl_resilient_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_jsonl_resilient::<ParentChild, _>(dir.path().join("absent.jsonl")).await;

    assert!(matches!(result, Err(graphwalk_jsonl::Error::Io(_))));
}

#[tokio::test]
async fn atomic_write_then_resilient_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lineage.jsonl");
    let pairs = vec![pair(1, 3), pair(2, 3), pair(3, 6)];

    write_jsonl_atomic(&path, &pairs).await.unwrap();
    let (records, warnings) = read_jsonl_resilient::<ParentChild, _>(&path).await.unwrap();

    assert_eq!(records, pairs);
    assert!(warnings.is_empty());
}

#[tokio::test]
async fn large_file_with_sparse_errors() {
    let mut content = String::new();
    for i in 0..1_000u64 {
        if i % 250 == 0 {
            content.push_str("{corrupt}\n");
        } else {
            content.push_str(&format!("{{\"parent\":{i},\"child\":{}}}\n", i + 1));
        }
    }

    let reader = JsonlReader::new(Cursor::new(content.into_bytes()));
    let (stream, warnings) = reader.stream_resilient::<ParentChild>();
    let records: Vec<ParentChild> = pin!(stream).collect().await;

    assert_eq!(records.len(), 996);
    assert_eq!(
        warnings
            .warnings()
            .iter()
            .map(Warning::line_number)
            .collect::<Vec<_>>(),
        vec![1, 251, 501, 751]
    );
}
