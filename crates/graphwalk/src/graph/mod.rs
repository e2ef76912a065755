//! Directed graph stored as adjacency sets.
//!
//! Each vertex maps to the set of vertices it has an edge to. Both levels
//! are ordered collections, so every traversal and search visits neighbours
//! in ascending order and produces the same result on every run.
//!
//! # Submodules
//!
//! - `traversal`: breadth-first and depth-first traversals
//! - `search`: breadth-first and depth-first path search
//! - `analysis`: structural queries backed by petgraph
//!
//! # Example
//!
//! ```
//! use graphwalk::graph::Graph;
//!
//! let mut graph = Graph::new();
//! for v in 1..=3 {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 3)?;
//!
//! assert_eq!(graph.bft(&1)?, vec![1, 2, 3]);
//! assert_eq!(graph.bfs(&1, &3)?, Some(vec![1, 2, 3]));
//! # Ok::<(), graphwalk::error::Error>(())
//! ```

mod analysis;
mod search;
mod traversal;

pub use analysis::DiGraphView;

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A directed graph keyed by vertex id.
///
/// `V` must be ordered (adjacency is kept sorted) and displayable (so that
/// a missing vertex can be named in [`Error::VertexNotFound`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone + fmt::Display> Graph<V> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from directed edges, adding endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.vertices.entry(to.clone()).or_default();
            graph.vertices.entry(from).or_default().insert(to);
        }
        graph
    }

    /// Adds a vertex with no outgoing edges.
    ///
    /// Adding a vertex that already exists clears its outgoing edges; edges
    /// pointing *to* it are kept. Returns `true` if the vertex is new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.vertices.insert(vertex, BTreeSet::new()) {
            None => true,
            Some(previous) => {
                if !previous.is_empty() {
                    tracing::debug!(
                        cleared = previous.len(),
                        "Re-added existing vertex, outgoing edges cleared"
                    );
                }
                false
            }
        }
    }

    /// Adds a directed edge `from -> to`.
    ///
    /// Returns `true` if the edge is new, `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is missing. The
    /// source is checked first.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<bool> {
        if !self.vertices.contains_key(&to) {
            if !self.vertices.contains_key(&from) {
                return Err(Error::vertex_not_found(&from));
            }
            return Err(Error::vertex_not_found(&to));
        }
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or_else(|| Error::vertex_not_found(&from))?;
        Ok(neighbors.insert(to))
    }

    /// Returns the out-neighbours of `vertex`, or `None` if it is not in the graph.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Option<&BTreeSet<V>> {
        self.vertices.get(vertex)
    }

    /// Returns `true` if the vertex is in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns `true` if the edge `from -> to` is in the graph.
    #[must_use]
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Iterates edges `(from, to)` in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Read-only view of the whole adjacency map.
    #[must_use]
    pub fn adjacency(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.vertices
    }

    /// Neighbours of a vertex known to be present.
    ///
    /// Traversals only reach vertices through edges, and edges are only
    /// added between existing vertices, so a miss here means `start` itself
    /// was absent.
    fn neighbors_or_err(&self, vertex: &V) -> Result<&BTreeSet<V>> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }
}

/// Formats the adjacency map as `{1: {2}, 2: {3, 4}}`.
impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (vertex, neighbors)) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}: ")?;
            if neighbors.is_empty() {
                write!(f, "set()")?;
                continue;
            }
            write!(f, "{{")?;
            for (j, neighbor) in neighbors.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The seven-vertex sample graph used throughout the graph tests.
    pub(crate) fn sample_graph() -> Graph<u64> {
        let mut graph = Graph::new();
        for v in 1..=7 {
            graph.add_vertex(v);
        }
        for (from, to) in [
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
        ] {
            graph.add_edge(from, to).unwrap();
        }
        graph
    }

    #[test]
    fn sample_graph_adjacency() {
        let graph = sample_graph();
        assert_eq!(
            graph.to_string(),
            "{1: {2}, 2: {3, 4}, 3: {5}, 4: {6, 7}, 5: {3}, 6: {3}, 7: {1, 6}}"
        );
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 10);
    }

    #[test]
    fn add_edge_requires_both_endpoints() {
        let mut graph = Graph::new();
        graph.add_vertex(1);

        let err = graph.add_edge(1, 2).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(ref v) if v == "2"));

        let err = graph.add_edge(3, 1).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(ref v) if v == "3"));

        let err = graph.add_edge(8, 9).unwrap_err();
        assert!(matches!(err, Error::VertexNotFound(ref v) if v == "8"));

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");

        assert!(graph.add_edge("a", "b").unwrap());
        assert!(!graph.add_edge("a", "b").unwrap());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_loops_are_allowed() {
        let mut graph = Graph::new();
        graph.add_vertex(1);
        assert!(graph.add_edge(1, 1).unwrap());
        assert!(graph.contains_edge(&1, &1));
    }

    #[test]
    fn re_adding_vertex_clears_outgoing_edges_only() {
        let mut graph = sample_graph();

        assert!(!graph.add_vertex(2));
        assert!(graph.neighbors(&2).unwrap().is_empty());
        assert!(graph.contains_edge(&1, &2));
        assert_eq!(graph.edge_count(), 8);
    }

    #[test]
    fn neighbors_of_unknown_vertex_is_none() {
        let graph = sample_graph();
        assert!(graph.neighbors(&42).is_none());
        assert_eq!(
            graph.neighbors(&7).unwrap().iter().copied().collect::<Vec<_>>(),
            vec![1, 6]
        );
    }

    #[test]
    fn from_edges_adds_endpoints() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (1, 2)]);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.neighbors(&3).unwrap().is_empty());
        assert_eq!(graph.to_string(), "{1: {2}, 2: {3}, 3: set()}");
    }

    #[test]
    fn edges_iterate_in_order() {
        let graph = Graph::from_edges([(2, 1), (1, 3), (1, 2)]);
        let edges: Vec<(u32, u32)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(edges, vec![(1, 2), (1, 3), (2, 1)]);
    }
}
