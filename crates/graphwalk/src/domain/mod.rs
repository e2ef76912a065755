//! Domain types shared by the graph, ancestry, storage, and CLI layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identifier used by the CLI and the on-disk formats.
///
/// The library types are generic over the vertex type; files and the
/// command line use non-negative integers.
pub type VertexId = u64;

/// Order in which a traversal visits every reachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Breadth-first traversal using a FIFO queue.
    #[default]
    Bft,
    /// Depth-first traversal using an explicit stack.
    Dft,
    /// Depth-first traversal using recursion.
    DftRecursive,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bft => write!(f, "bft"),
            Self::Dft => write!(f, "dft"),
            Self::DftRecursive => write!(f, "dft-recursive"),
        }
    }
}

/// Strategy used to find a path between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Breadth-first search; the path found is a shortest one.
    #[default]
    Bfs,
    /// Depth-first search using an explicit stack.
    Dfs,
    /// Depth-first search using recursion.
    DfsRecursive,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "bfs"),
            Self::Dfs => write!(f, "dfs"),
            Self::DfsRecursive => write!(f, "dfs-recursive"),
        }
    }
}

/// One line of a graph data file.
///
/// Vertices are declared before use; an edge whose endpoints were never
/// declared is skipped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GraphRecord {
    /// Declares a vertex.
    Vertex {
        /// The vertex id.
        id: VertexId,
    },
    /// Declares a directed edge `from -> to`.
    Edge {
        /// Source vertex.
        from: VertexId,
        /// Target vertex.
        to: VertexId,
    },
}

/// One line of a lineage data file: `parent` is a parent of `child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParentChild {
    /// The parent individual.
    pub parent: VertexId,
    /// The child individual.
    pub child: VertexId,
}

impl From<(VertexId, VertexId)> for ParentChild {
    fn from((parent, child): (VertexId, VertexId)) -> Self {
        Self { parent, child }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_record_wire_format() {
        let vertex = serde_json::to_string(&GraphRecord::Vertex { id: 4 }).unwrap();
        assert_eq!(vertex, r#"{"type":"vertex","id":4}"#);

        let edge: GraphRecord = serde_json::from_str(r#"{"type":"edge","from":1,"to":2}"#).unwrap();
        assert_eq!(edge, GraphRecord::Edge { from: 1, to: 2 });
    }

    #[test]
    fn order_and_strategy_use_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TraversalOrder::DftRecursive).unwrap(),
            "\"dft-recursive\""
        );
        assert_eq!(SearchStrategy::DfsRecursive.to_string(), "dfs-recursive");
        assert_eq!(TraversalOrder::default(), TraversalOrder::Bft);
        assert_eq!(SearchStrategy::default(), SearchStrategy::Bfs);
    }
}
