//! Whole-graph traversals from a start vertex.
//!
//! Each traversal returns the vertices reachable from `start` in the order
//! they are first visited. Every reachable vertex appears exactly once.

use super::Graph;
use crate::domain::TraversalOrder;
use crate::error::Result;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

impl<V: Ord + Clone + fmt::Display> Graph<V> {
    /// Visits every vertex reachable from `start` using the given order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn traverse(&self, order: TraversalOrder, start: &V) -> Result<Vec<V>> {
        match order {
            TraversalOrder::Bft => self.bft(start),
            TraversalOrder::Dft => self.dft(start),
            TraversalOrder::DftRecursive => self.dft_recursive(start),
        }
    }

    /// Breadth-first traversal.
    ///
    /// A vertex is emitted the first time it leaves the queue.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn bft(&self, start: &V) -> Result<Vec<V>> {
        self.neighbors_or_err(start)?;

        let mut order = Vec::new();
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(vertex) = queue.pop_front() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            for next in self.neighbors_or_err(&vertex)? {
                if !visited.contains(next) {
                    queue.push_back(next.clone());
                }
            }
            order.push(vertex);
        }

        tracing::trace!(visited = order.len(), "Breadth-first traversal complete");
        Ok(order)
    }

    /// Depth-first traversal with an explicit stack.
    ///
    /// Vertices are marked visited when popped, not when pushed. Neighbours
    /// are pushed in ascending order, so the largest is explored first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn dft(&self, start: &V) -> Result<Vec<V>> {
        self.neighbors_or_err(start)?;

        let mut order = Vec::new();
        let mut visited = BTreeSet::new();
        let mut stack = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            for next in self.neighbors_or_err(&vertex)? {
                if !visited.contains(next) {
                    stack.push(next.clone());
                }
            }
            order.push(vertex);
        }

        tracing::trace!(visited = order.len(), "Depth-first traversal complete");
        Ok(order)
    }

    /// Depth-first traversal using recursion (pre-order).
    ///
    /// Neighbours are descended into in ascending order. Recursion depth
    /// equals the length of the longest simple path explored, so very deep
    /// graphs should use [`dft`](Self::dft) instead.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        let mut visited = BTreeSet::new();
        self.dft_visit(start, &mut visited, &mut order)?;
        Ok(order)
    }

    fn dft_visit(&self, vertex: &V, visited: &mut BTreeSet<V>, order: &mut Vec<V>) -> Result<()> {
        if !visited.insert(vertex.clone()) {
            return Ok(());
        }
        order.push(vertex.clone());
        for next in self.neighbors_or_err(vertex)? {
            self.dft_visit(next, visited, order)?;
        }
        Ok(())
    }
}
