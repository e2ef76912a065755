//! Earliest-ancestor lookup over a parent/child relation.
//!
//! A [`Lineage`] is stored as a [`Graph`] whose edges point from each child
//! to its parents, so walking "up" the family tree is an ordinary
//! out-neighbour walk.
//!
//! The earliest ancestor of an individual is the ancestor separated from it
//! by the most generations. When several ancestors are equally far back, the
//! one with the lowest id wins.
//!
//! ```
//! use graphwalk::ancestry::earliest_ancestor;
//!
//! let pairs = [(1, 3), (2, 3), (3, 6), (5, 6), (5, 7), (4, 5), (4, 8), (8, 9), (11, 8), (10, 1)];
//! assert_eq!(earliest_ancestor(&pairs, 6), Some(10));
//! assert_eq!(earliest_ancestor(&pairs, 9), Some(4));
//! assert_eq!(earliest_ancestor(&pairs, 2), None);
//! ```

use crate::graph::Graph;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A genealogy: who is a parent of whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage<V> {
    /// Edges run child -> parent.
    parents: Graph<V>,
}

impl<V> Default for Lineage<V> {
    fn default() -> Self {
        Self {
            parents: Graph::default(),
        }
    }
}

/// How far back the deepest known ancestor of a vertex is, and who it is.
#[derive(Debug, Clone)]
struct Deepest<V> {
    generations: usize,
    ancestor: V,
}

impl<V: Ord + Clone + fmt::Display> Lineage<V> {
    /// Creates an empty lineage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a lineage from `(parent, child)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        Self {
            parents: Graph::from_edges(pairs.into_iter().map(|(parent, child)| (child, parent))),
        }
    }

    /// Records that `parent` is a parent of `child`. Returns `true` if the pair is new.
    pub fn add_pair(&mut self, parent: V, child: V) -> bool {
        if !self.parents.contains_vertex(&parent) {
            self.parents.add_vertex(parent.clone());
        }
        if !self.parents.contains_vertex(&child) {
            self.parents.add_vertex(child.clone());
        }
        // Both endpoints exist, so this cannot fail.
        self.parents.add_edge(child, parent).unwrap_or(false)
    }

    /// The known parents of `individual`, or `None` if it never appeared in a pair.
    #[must_use]
    pub fn parents_of(&self, individual: &V) -> Option<&BTreeSet<V>> {
        self.parents.neighbors(individual)
    }

    /// Number of individuals mentioned in any pair.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.vertex_count()
    }

    /// Returns `true` if no pairs have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates all `(parent, child)` pairs in ascending child order.
    pub fn pairs(&self) -> impl Iterator<Item = (&V, &V)> {
        self.parents.edges().map(|(child, parent)| (parent, child))
    }

    /// The child -> parent graph backing this lineage.
    #[must_use]
    pub fn as_graph(&self) -> &Graph<V> {
        &self.parents
    }

    /// Finds the ancestor of `individual` with the most generations in between.
    ///
    /// Ties are broken by the lowest id. Returns `None` if `individual` has
    /// no usable parents or is unknown. In malformed data containing a cycle,
    /// a parent that is already on the chain being explored is ignored, so
    /// an individual listed as its own only parent has no ancestor.
    #[must_use]
    pub fn earliest_ancestor(&self, individual: &V) -> Option<V> {
        let deepest = self.deepest(individual);
        if deepest.generations == 0 {
            return None;
        }
        tracing::debug!(
            generations = deepest.generations,
            "Resolved earliest ancestor"
        );
        Some(deepest.ancestor)
    }

    /// Post-order walk up the parent links with an explicit stack.
    fn deepest(&self, individual: &V) -> Deepest<V> {
        let mut memo: BTreeMap<V, Deepest<V>> = BTreeMap::new();
        let mut on_chain = BTreeSet::from([individual.clone()]);
        let mut stack = vec![self.frame(individual.clone())];
        let mut result = Deepest {
            generations: 0,
            ancestor: individual.clone(),
        };

        while let Some(frame) = stack.last_mut() {
            if let Some(parent) = frame.pending.next() {
                if on_chain.contains(&parent) {
                    tracing::warn!(%parent, "Ignoring cyclic parent link");
                    continue;
                }
                if let Some(known) = memo.get(&parent) {
                    frame.consider(known);
                    continue;
                }
                on_chain.insert(parent.clone());
                stack.push(self.frame(parent));
                continue;
            }

            if let Some(done) = stack.pop() {
                on_chain.remove(&done.individual);
                match stack.last_mut() {
                    Some(child) => child.consider(&done.best),
                    None => result = done.best.clone(),
                }
                memo.insert(done.individual, done.best);
            }
        }

        result
    }

    fn frame(&self, individual: V) -> Frame<V> {
        let pending: Vec<V> = self
            .parents
            .neighbors(&individual)
            .map(|parents| parents.iter().cloned().collect())
            .unwrap_or_default();
        Frame {
            best: Deepest {
                generations: 0,
                ancestor: individual.clone(),
            },
            individual,
            pending: pending.into_iter(),
        }
    }
}

/// An individual whose parents are still being explored.
struct Frame<V> {
    individual: V,
    pending: std::vec::IntoIter<V>,
    best: Deepest<V>,
}

impl<V: Ord + Clone> Frame<V> {
    /// Folds in a parent's deepest ancestor, one generation further back.
    fn consider(&mut self, above: &Deepest<V>) {
        let generations = above.generations + 1;
        let further = generations > self.best.generations;
        let same_but_lower =
            generations == self.best.generations && above.ancestor < self.best.ancestor;
        if further || same_but_lower {
            self.best = Deepest {
                generations,
                ancestor: above.ancestor.clone(),
            };
        }
    }
}

/// One-shot earliest-ancestor lookup over `(parent, child)` pairs.
///
/// See [`Lineage::earliest_ancestor`].
#[must_use]
pub fn earliest_ancestor<V>(pairs: &[(V, V)], individual: V) -> Option<V>
where
    V: Ord + Clone + fmt::Display,
{
    Lineage::from_pairs(pairs.iter().cloned()).earliest_ancestor(&individual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FAMILY: [(u64, u64); 10] = [
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

    #[rstest]
    #[case(1, Some(10))]
    #[case(2, None)]
    #[case(3, Some(10))]
    #[case(4, None)]
    #[case(5, Some(4))]
    #[case(6, Some(10))]
    #[case(7, Some(4))]
    #[case(8, Some(4))]
    #[case(9, Some(4))]
    #[case(10, None)]
    #[case(11, None)]
    fn earliest_ancestor_in_family(#[case] individual: u64, #[case] expected: Option<u64>) {
        assert_eq!(earliest_ancestor(&FAMILY, individual), expected);
    }

    #[test]
    fn unknown_individual_has_no_ancestor() {
        assert_eq!(earliest_ancestor(&FAMILY, 404), None);
    }

    #[test]
    fn longest_chain_beats_shortcut() {
        // 1 is both a direct parent of 4 and three generations above it via 2 and 3.
        let lineage = Lineage::from_pairs([(1, 4), (1, 2), (2, 3), (3, 4), (9, 4)]);
        assert_eq!(lineage.earliest_ancestor(&4), Some(1));
    }

    #[test]
    fn tie_broken_by_lowest_id() {
        let lineage = Lineage::from_pairs([(30, 1), (20, 1), (25, 1)]);
        assert_eq!(lineage.earliest_ancestor(&1), Some(20));
    }

    #[test]
    fn cycle_does_not_loop_forever() {
        let lineage = Lineage::from_pairs([(1, 2), (2, 3), (3, 1)]);
        assert_eq!(lineage.earliest_ancestor(&3), Some(1));
    }

    #[test]
    fn self_parent_is_not_an_ancestor() {
        let lineage = Lineage::from_pairs([(1u64, 1u64)]);
        assert_eq!(lineage.earliest_ancestor(&1), None);

        let lineage = Lineage::from_pairs([(1u64, 1u64), (5, 1)]);
        assert_eq!(lineage.earliest_ancestor(&1), Some(5));
    }

    #[test]
    fn very_long_lineage_does_not_overflow() {
        let lineage = Lineage::from_pairs((0..200_000u64).map(|i| (i + 1, i)));
        assert_eq!(lineage.earliest_ancestor(&0), Some(200_000));
        assert_eq!(lineage.earliest_ancestor(&199_999), Some(200_000));
    }

    #[test]
    fn add_pair_and_queries() {
        let mut lineage = Lineage::new();
        assert!(lineage.is_empty());
        assert!(lineage.add_pair("ada", "byron"));
        assert!(!lineage.add_pair("ada", "byron"));
        assert!(lineage.add_pair("noel", "ada"));

        assert_eq!(lineage.len(), 3);
        assert_eq!(
            lineage.parents_of(&"byron").unwrap().iter().collect::<Vec<_>>(),
            vec![&"ada"]
        );
        assert!(lineage.parents_of(&"noel").unwrap().is_empty());
        assert_eq!(lineage.earliest_ancestor(&"byron"), Some("noel"));
        assert_eq!(
            lineage.pairs().collect::<Vec<_>>(),
            vec![(&"noel", &"ada"), (&"ada", &"byron")]
        );
    }
}
