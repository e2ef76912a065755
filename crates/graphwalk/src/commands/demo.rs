//! Implementation of the `demo` command.
//!
//! Runs every traversal, search, and ancestor lookup against a small
//! built-in graph and family tree. Nothing is read from or written to disk.

use crate::ancestry::Lineage;
use crate::domain::{SearchStrategy, TraversalOrder, VertexId};
use crate::error::Result;
use crate::graph::Graph;
use serde::Serialize;

/// Edges of the demo graph. Vertices are `1..=7`.
pub const SAMPLE_EDGES: [(VertexId, VertexId); 10] = [
    (5, 3),
    (6, 3),
    (7, 1),
    (4, 7),
    (1, 2),
    (7, 6),
    (2, 4),
    (3, 5),
    (2, 3),
    (4, 6),
];

/// `(parent, child)` pairs of the demo family tree.
pub const SAMPLE_FAMILY: [(VertexId, VertexId); 10] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 9),
    (11, 8),
    (10, 1),
];

/// Builds the seven-vertex demo graph.
///
/// # Errors
///
/// Never fails in practice; edges only reference declared vertices.
pub fn sample_graph() -> Result<Graph<VertexId>> {
    let mut graph = Graph::new();
    for v in 1..=7 {
        graph.add_vertex(v);
    }
    for (from, to) in SAMPLE_EDGES {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

/// Builds the demo family tree.
pub fn sample_family() -> Lineage<VertexId> {
    Lineage::from_pairs(SAMPLE_FAMILY)
}

/// A traversal run by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalRun {
    /// Order used
    pub order: TraversalOrder,
    /// Start vertex
    pub start: VertexId,
    /// Vertices in visit order
    pub visited: Vec<VertexId>,
}

/// A path search run by the demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRun {
    /// Strategy used
    pub strategy: SearchStrategy,
    /// Start vertex
    pub start: VertexId,
    /// Destination vertex
    pub dest: VertexId,
    /// Path found, if any
    pub path: Option<Vec<VertexId>>,
}

/// An earliest-ancestor lookup run by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AncestorRun {
    /// Individual looked up
    pub individual: VertexId,
    /// Earliest ancestor, if any
    pub earliest_ancestor: Option<VertexId>,
}

/// Everything the demo computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Adjacency map of the demo graph
    pub adjacency: String,
    /// One run per traversal order
    pub traversals: Vec<TraversalRun>,
    /// One run per search strategy
    pub searches: Vec<SearchRun>,
    /// One lookup per individual in the family tree
    pub ancestors: Vec<AncestorRun>,
}

/// Run the demo.
///
/// # Errors
///
/// Propagates graph errors, which cannot occur with the built-in data.
pub fn run() -> Result<DemoReport> {
    let graph = sample_graph()?;
    let family = sample_family();
    let (start, dest) = (1, 6);

    let traversals = [
        TraversalOrder::Bft,
        TraversalOrder::Dft,
        TraversalOrder::DftRecursive,
    ]
    .into_iter()
    .map(|order| {
        Ok(TraversalRun {
            order,
            start,
            visited: graph.traverse(order, &start)?,
        })
    })
    .collect::<Result<Vec<_>>>()?;

    let searches = [
        SearchStrategy::Bfs,
        SearchStrategy::Dfs,
        SearchStrategy::DfsRecursive,
    ]
    .into_iter()
    .map(|strategy| {
        Ok(SearchRun {
            strategy,
            start,
            dest,
            path: graph.search(strategy, &start, &dest)?,
        })
    })
    .collect::<Result<Vec<_>>>()?;

    let ancestors = family
        .as_graph()
        .vertices()
        .map(|&individual| AncestorRun {
            individual,
            earliest_ancestor: family.earliest_ancestor(&individual),
        })
        .collect();

    Ok(DemoReport {
        adjacency: graph.to_string(),
        traversals,
        searches,
        ancestors,
    })
}
