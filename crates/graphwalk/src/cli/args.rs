//! CLI argument structs for all commands.

use clap::Parser;

use super::types::{SearchStrategyArg, TraversalOrderArg};
use super::validators::validate_vertex_id;
use crate::domain::VertexId;

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {}

/// Arguments for the `add-vertex` command
#[derive(Parser, Debug, Clone)]
pub struct AddVertexArgs {
    /// Vertex IDs to add
    ///
    /// Re-adding an existing vertex clears its outgoing edges.
    #[arg(required = true, value_parser = validate_vertex_id)]
    pub ids: Vec<VertexId>,
}

/// Arguments for the `add-edge` command
#[derive(Parser, Debug, Clone)]
pub struct AddEdgeArgs {
    /// Source vertex
    #[arg(value_parser = validate_vertex_id)]
    pub from: VertexId,

    /// Target vertex
    #[arg(value_parser = validate_vertex_id)]
    pub to: VertexId,
}

/// Arguments for the `neighbors` command
#[derive(Parser, Debug, Clone)]
pub struct NeighborsArgs {
    /// Vertex to inspect
    #[arg(value_parser = validate_vertex_id)]
    pub id: VertexId,
}

/// Arguments for the `traverse` command
#[derive(Parser, Debug, Clone)]
pub struct TraverseArgs {
    /// Vertex to start from
    #[arg(value_parser = validate_vertex_id)]
    pub start: VertexId,

    /// Traversal order (defaults to `defaults.order` in config.yaml)
    ///
    /// `dft-recursive` uses one stack frame per level of depth and can crash
    /// on graphs with paths tens of thousands of vertices long; use `dft` there.
    #[arg(short, long, value_enum)]
    pub order: Option<TraversalOrderArg>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Vertex to start from
    #[arg(value_parser = validate_vertex_id)]
    pub start: VertexId,

    /// Vertex to reach
    #[arg(value_parser = validate_vertex_id)]
    pub dest: VertexId,

    /// Search strategy (defaults to `defaults.strategy` in config.yaml)
    ///
    /// `dfs-recursive` uses one stack frame per level of depth and can crash
    /// on graphs with paths tens of thousands of vertices long; use `dfs` there.
    #[arg(short, long, value_enum)]
    pub strategy: Option<SearchStrategyArg>,
}

/// Arguments for the `add-parent` command
#[derive(Parser, Debug, Clone)]
pub struct AddParentArgs {
    /// The parent
    #[arg(value_parser = validate_vertex_id)]
    pub parent: VertexId,

    /// The child
    #[arg(value_parser = validate_vertex_id)]
    pub child: VertexId,
}

/// Arguments for the `ancestor` command
#[derive(Parser, Debug, Clone)]
pub struct AncestorArgs {
    /// Individual whose earliest ancestor to find
    #[arg(value_parser = validate_vertex_id)]
    pub id: VertexId,
}

/// Arguments for the `demo` command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {}
