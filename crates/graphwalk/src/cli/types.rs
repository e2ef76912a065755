//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::{SearchStrategy, TraversalOrder};

/// Traversal order for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrderArg {
    /// Breadth-first, level by level
    Bft,
    /// Depth-first with an explicit stack
    Dft,
    /// Depth-first by recursion; very deep graphs can overflow the stack
    #[value(name = "dft-recursive", alias = "dft_recursive")]
    DftRecursive,
}

impl std::fmt::Display for TraversalOrderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TraversalOrder::from(*self).fmt(f)
    }
}

/// Search strategy for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategyArg {
    /// Breadth-first; finds a shortest path
    Bfs,
    /// Depth-first with an explicit stack
    Dfs,
    /// Depth-first by recursion; very deep graphs can overflow the stack
    #[value(name = "dfs-recursive", alias = "dfs_recursive")]
    DfsRecursive,
}

impl std::fmt::Display for SearchStrategyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        SearchStrategy::from(*self).fmt(f)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TraversalOrderArg> for TraversalOrder {
    fn from(arg: TraversalOrderArg) -> Self {
        match arg {
            TraversalOrderArg::Bft => TraversalOrder::Bft,
            TraversalOrderArg::Dft => TraversalOrder::Dft,
            TraversalOrderArg::DftRecursive => TraversalOrder::DftRecursive,
        }
    }
}

impl From<SearchStrategyArg> for SearchStrategy {
    fn from(arg: SearchStrategyArg) -> Self {
        match arg {
            SearchStrategyArg::Bfs => SearchStrategy::Bfs,
            SearchStrategyArg::Dfs => SearchStrategy::Dfs,
            SearchStrategyArg::DfsRecursive => SearchStrategy::DfsRecursive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_order_conversion() {
        assert_eq!(TraversalOrder::from(TraversalOrderArg::Bft), TraversalOrder::Bft);
        assert_eq!(TraversalOrder::from(TraversalOrderArg::Dft), TraversalOrder::Dft);
        assert_eq!(
            TraversalOrder::from(TraversalOrderArg::DftRecursive),
            TraversalOrder::DftRecursive
        );
    }

    #[test]
    fn test_search_strategy_conversion() {
        assert_eq!(SearchStrategy::from(SearchStrategyArg::Bfs), SearchStrategy::Bfs);
        assert_eq!(SearchStrategy::from(SearchStrategyArg::Dfs), SearchStrategy::Dfs);
        assert_eq!(
            SearchStrategy::from(SearchStrategyArg::DfsRecursive),
            SearchStrategy::DfsRecursive
        );
    }

    #[test]
    fn test_display_matches_value_names() {
        assert_eq!(TraversalOrderArg::DftRecursive.to_string(), "dft-recursive");
        assert_eq!(SearchStrategyArg::DfsRecursive.to_string(), "dfs-recursive");
        assert_eq!(SearchStrategyArg::Bfs.to_string(), "bfs");
    }
}
