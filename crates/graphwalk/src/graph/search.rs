//! Path search between two vertices.
//!
//! The iterative searches record the vertex each vertex was first reached
//! from and rebuild the path once the destination is visited, instead of
//! carrying a copy of the path in every queue or stack entry. The visit
//! discipline is the same as the matching traversal, so the path returned
//! is the one a path-copying search would return.

use super::Graph;
use crate::domain::SearchStrategy;
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

impl<V: Ord + Clone + fmt::Display> Graph<V> {
    /// Finds a path from `start` to `dest` using the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn search(&self, strategy: SearchStrategy, start: &V, dest: &V) -> Result<Option<Vec<V>>> {
        match strategy {
            SearchStrategy::Bfs => self.bfs(start, dest),
            SearchStrategy::Dfs => self.dfs(start, dest),
            SearchStrategy::DfsRecursive => self.dfs_recursive(start, dest),
        }
    }

    /// Breadth-first search. The path returned has the fewest edges.
    ///
    /// Returns `Ok(None)` when `dest` is absent or unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn bfs(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>> {
        self.neighbors_or_err(start)?;

        let mut came_from: BTreeMap<V, Option<V>> = BTreeMap::new();
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([(start.clone(), None)]);

        while let Some((vertex, parent)) = queue.pop_front() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            came_from.insert(vertex.clone(), parent);
            if &vertex == dest {
                return Ok(Some(rebuild_path(&came_from, vertex)));
            }
            for next in self.neighbors_or_err(&vertex)? {
                if !visited.contains(next) {
                    queue.push_back((next.clone(), Some(vertex.clone())));
                }
            }
        }

        Ok(None)
    }

    /// Depth-first search with an explicit stack.
    ///
    /// Returns `Ok(None)` when `dest` is absent or unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn dfs(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>> {
        self.neighbors_or_err(start)?;

        let mut came_from: BTreeMap<V, Option<V>> = BTreeMap::new();
        let mut visited = BTreeSet::new();
        let mut stack = vec![(start.clone(), None)];

        while let Some((vertex, parent)) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            came_from.insert(vertex.clone(), parent);
            if &vertex == dest {
                return Ok(Some(rebuild_path(&came_from, vertex)));
            }
            for next in self.neighbors_or_err(&vertex)? {
                if !visited.contains(next) {
                    stack.push((next.clone(), Some(vertex.clone())));
                }
            }
        }

        Ok(None)
    }

    /// Depth-first search using recursion.
    ///
    /// Returns the first path found when descending into neighbours in
    /// ascending order, or `Ok(None)` when `dest` is absent or unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::VertexNotFound`] if `start` is not in the graph.
    pub fn dfs_recursive(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>> {
        self.neighbors_or_err(start)?;

        let mut visited = BTreeSet::new();
        let mut path = Vec::new();
        if self.dfs_visit(start, dest, &mut visited, &mut path)? {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Extends `path` with `vertex`; on a dead end the vertex is popped again.
    fn dfs_visit(
        &self,
        vertex: &V,
        dest: &V,
        visited: &mut BTreeSet<V>,
        path: &mut Vec<V>,
    ) -> Result<bool> {
        if !visited.insert(vertex.clone()) {
            return Ok(false);
        }
        path.push(vertex.clone());
        if vertex == dest {
            return Ok(true);
        }
        for next in self.neighbors_or_err(vertex)? {
            if self.dfs_visit(next, dest, visited, path)? {
                return Ok(true);
            }
        }
        path.pop();
        Ok(false)
    }
}

/// Walks the `came_from` links back from `end` and returns the path start-first.
fn rebuild_path<V: Ord + Clone>(came_from: &BTreeMap<V, Option<V>>, end: V) -> Vec<V> {
    let mut path = vec![end];
    while let Some(Some(parent)) = path.last().and_then(|v| came_from.get(v)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}
