//! JSONL persistence for graphs and lineages.
//!
//! # Graph files
//!
//! One tagged record per line. Vertices must be declared before edges can
//! refer to them:
//!
//! ```text
//! {"type":"vertex","id":1}
//! {"type":"vertex","id":2}
//! {"type":"edge","from":1,"to":2}
//! ```
//!
//! # Lineage files
//!
//! One `(parent, child)` pair per line:
//!
//! ```text
//! {"parent":10,"child":1}
//! ```
//!
//! Loading is resilient: lines that cannot be used are skipped and
//! reported as [`LoadWarning`]s. A missing file loads as empty, so a
//! freshly initialized repository needs no special casing.
//!
//! Saving writes to a temporary file and renames it over the target.
//! Records are written in sorted order so that saved files diff cleanly.

use crate::ancestry::Lineage;
use crate::domain::{GraphRecord, ParentChild, VertexId};
use crate::error::{Result, StorageError};
use crate::graph::Graph;
use graphwalk_jsonl::{read_jsonl_resilient, write_jsonl_atomic_iter, Warning as JsonlWarning};
use serde::de::DeserializeOwned;
use std::fmt;
use std::io;
use std::path::Path;

/// Non-fatal problems found while loading a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Line could not be parsed as a record.
    ///
    /// **Effect**: the line is skipped.
    MalformedJson {
        /// 1-based line number.
        line_number: usize,
        /// Parser error message.
        error: String,
    },

    /// Edge names a vertex that was not declared.
    ///
    /// **Effect**: the edge is skipped; the declared endpoint is still loaded.
    DanglingEdge {
        /// Source vertex of the skipped edge.
        from: VertexId,
        /// Target vertex of the skipped edge.
        to: VertexId,
        /// The endpoint that was missing.
        missing: VertexId,
    },

    /// Vertex declared more than once.
    ///
    /// **Effect**: later declarations are ignored; edges already loaded are kept.
    DuplicateVertex {
        /// The repeated vertex.
        id: VertexId,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedJson { line_number, error } => {
                write!(f, "line {line_number}: malformed record: {error}")
            }
            Self::DanglingEdge { from, to, missing } => {
                write!(f, "skipped edge {from} -> {to}: vertex {missing} is not declared")
            }
            Self::DuplicateVertex { id } => write!(f, "vertex {id} declared more than once"),
        }
    }
}

impl From<JsonlWarning> for LoadWarning {
    fn from(warning: JsonlWarning) -> Self {
        match warning {
            JsonlWarning::MalformedJson { line_number, error } => {
                Self::MalformedJson { line_number, error }
            }
            // Both mean the line was unusable.
            JsonlWarning::SkippedLine {
                line_number,
                reason,
            } => Self::MalformedJson {
                line_number,
                error: reason,
            },
        }
    }
}

/// Reads all records from `path`, treating a missing file as empty.
async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<(Vec<T>, Vec<LoadWarning>)> {
    match read_jsonl_resilient::<T, _>(path).await {
        Ok((records, warnings)) => Ok((
            records,
            warnings.into_iter().map(LoadWarning::from).collect(),
        )),
        Err(graphwalk_jsonl::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Data file missing, starting empty");
            Ok((Vec::new(), Vec::new()))
        }
        Err(e) => Err(StorageError::from(e).into()),
    }
}

fn log_warnings(path: &Path, warnings: &[LoadWarning]) {
    for warning in warnings {
        tracing::debug!(path = %path.display(), "{warning}");
    }
}

/// Load a graph from a JSONL file.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read.
pub async fn load_graph(path: &Path) -> Result<(Graph<VertexId>, Vec<LoadWarning>)> {
    let (records, mut warnings) = read_records::<GraphRecord>(path).await?;

    let mut graph = Graph::new();
    for record in records {
        match record {
            GraphRecord::Vertex { id } => {
                if graph.contains_vertex(&id) {
                    warnings.push(LoadWarning::DuplicateVertex { id });
                } else {
                    graph.add_vertex(id);
                }
            }
            GraphRecord::Edge { from, to } => {
                let missing = [from, to]
                    .into_iter()
                    .find(|v| !graph.contains_vertex(v));
                match missing {
                    Some(missing) => warnings.push(LoadWarning::DanglingEdge { from, to, missing }),
                    None => {
                        graph.add_edge(from, to)?;
                    }
                }
            }
        }
    }

    log_warnings(path, &warnings);
    tracing::debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Loaded graph"
    );
    Ok((graph, warnings))
}

/// Save a graph to a JSONL file, vertices first, then edges.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn save_graph(graph: &Graph<VertexId>, path: &Path) -> Result<()> {
    let vertices = graph.vertices().map(|&id| GraphRecord::Vertex { id });
    let edges = graph
        .edges()
        .map(|(&from, &to)| GraphRecord::Edge { from, to });

    write_jsonl_atomic_iter(path, vertices.chain(edges))
        .await
        .map_err(StorageError::from)?;
    tracing::debug!(path = %path.display(), "Saved graph");
    Ok(())
}

/// Load a lineage from a JSONL file.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read.
pub async fn load_lineage(path: &Path) -> Result<(Lineage<VertexId>, Vec<LoadWarning>)> {
    let (records, warnings) = read_records::<ParentChild>(path).await?;
    let lineage = Lineage::from_pairs(records.into_iter().map(|r| (r.parent, r.child)));

    log_warnings(path, &warnings);
    tracing::debug!(path = %path.display(), individuals = lineage.len(), "Loaded lineage");
    Ok((lineage, warnings))
}

/// Save a lineage to a JSONL file, sorted by `(parent, child)`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn save_lineage(lineage: &Lineage<VertexId>, path: &Path) -> Result<()> {
    let mut pairs: Vec<ParentChild> = lineage
        .pairs()
        .map(|(&parent, &child)| ParentChild { parent, child })
        .collect();
    pairs.sort();

    write_jsonl_atomic_iter(path, pairs)
        .await
        .map_err(StorageError::from)?;
    tracing::debug!(path = %path.display(), "Saved lineage");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_skipped_line_maps_to_malformed() {
        let warning = LoadWarning::from(JsonlWarning::SkippedLine {
            line_number: 3,
            reason: "read error".to_string(),
        });
        assert_eq!(
            warning,
            LoadWarning::MalformedJson {
                line_number: 3,
                error: "read error".to_string()
            }
        );
    }

    #[test]
    fn warning_display() {
        let warning = LoadWarning::DanglingEdge {
            from: 1,
            to: 9,
            missing: 9,
        };
        assert_eq!(
            warning.to_string(),
            "skipped edge 1 -> 9: vertex 9 is not declared"
        );
    }
}
