//! Structural queries using petgraph.
//!
//! The adjacency map is converted to a `DiGraph` on demand. Node weights
//! are the vertex ids; edges carry no weight.

use super::Graph;
use crate::error::{Error, Result};
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A petgraph view of a [`Graph`], with the vertex-to-node mapping.
pub struct DiGraphView<V> {
    /// The converted graph. Node weights are vertex ids.
    pub graph: DiGraph<V, ()>,
    /// Node index of each vertex.
    pub node_map: BTreeMap<V, NodeIndex>,
}

impl<V: Ord + Clone + fmt::Display> Graph<V> {
    /// Converts to a petgraph `DiGraph`. Nodes are added in ascending vertex order.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraphView<V> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let mut node_map = BTreeMap::new();

        for vertex in self.vertices.keys() {
            let node = graph.add_node(vertex.clone());
            node_map.insert(vertex.clone(), node);
        }
        for (from, to) in self.edges() {
            graph.add_edge(node_map[from], node_map[to], ());
        }

        DiGraphView { graph, node_map }
    }

    /// Returns `true` if a directed path leads from `from` to `to`.
    ///
    /// A vertex always reaches itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either vertex is missing.
    pub fn has_path(&self, from: &V, to: &V) -> Result<bool> {
        let view = self.to_digraph();
        let from_node = view
            .node_map
            .get(from)
            .ok_or_else(|| Error::vertex_not_found(from))?;
        let to_node = view
            .node_map
            .get(to)
            .ok_or_else(|| Error::vertex_not_found(to))?;

        Ok(algo::has_path_connecting(
            &view.graph,
            *from_node,
            *to_node,
            None,
        ))
    }

    /// Every vertex reachable from `start`, `start` included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` is missing.
    pub fn reachable_from(&self, start: &V) -> Result<BTreeSet<V>> {
        let view = self.to_digraph();
        let start_node = view
            .node_map
            .get(start)
            .ok_or_else(|| Error::vertex_not_found(start))?;

        let mut reachable = BTreeSet::new();
        let mut bfs = Bfs::new(&view.graph, *start_node);
        while let Some(node) = bfs.next(&view.graph) {
            reachable.insert(view.graph[node].clone());
        }
        Ok(reachable)
    }

    /// Returns `true` if the graph contains a directed cycle (self-loops included).
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        algo::is_cyclic_directed(&self.to_digraph().graph)
    }

    /// Strongly connected components, each sorted, ordered by smallest member.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        let view = self.to_digraph();
        let mut components: Vec<Vec<V>> = algo::tarjan_scc(&view.graph)
            .into_iter()
            .map(|nodes| {
                let mut members: Vec<V> =
                    nodes.into_iter().map(|n| view.graph[n].clone()).collect();
                members.sort();
                members
            })
            .collect();
        components.sort();
        components
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::sample_graph;
    use super::*;

    #[test]
    fn digraph_mirrors_adjacency() {
        let graph = sample_graph();
        let view = graph.to_digraph();

        assert_eq!(view.graph.node_count(), 7);
        assert_eq!(view.graph.edge_count(), 10);
        for (from, to) in graph.edges() {
            assert!(view
                .graph
                .contains_edge(view.node_map[from], view.node_map[to]));
        }
    }

    #[test]
    fn has_path_follows_direction() {
        let graph = sample_graph();
        assert!(graph.has_path(&1, &5).unwrap());
        assert!(!graph.has_path(&5, &1).unwrap());
        assert!(graph.has_path(&3, &3).unwrap());
        assert!(matches!(
            graph.has_path(&1, &42),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn reachable_from_follows_direction() {
        let graph = sample_graph();
        assert_eq!(
            graph.reachable_from(&3).unwrap(),
            BTreeSet::from([3, 5])
        );
        assert_eq!(graph.reachable_from(&1).unwrap().len(), 7);
        assert!(matches!(
            graph.reachable_from(&42),
            Err(Error::VertexNotFound(ref v)) if v == "42"
        ));
    }

    #[test]
    fn cycle_detection() {
        assert!(sample_graph().is_cyclic());
        assert!(!Graph::from_edges([(1, 2), (2, 3), (1, 3)]).is_cyclic());
        assert!(Graph::from_edges([(1, 1)]).is_cyclic());
        assert!(!Graph::<u64>::new().is_cyclic());
    }

    #[test]
    fn sample_graph_components() {
        assert_eq!(
            sample_graph().strongly_connected_components(),
            vec![vec![1, 2, 4, 7], vec![3, 5], vec![6]]
        );
    }
}
