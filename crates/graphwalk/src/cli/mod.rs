//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for graphwalk using clap's derive API.
//!
//! # Commands
//!
//! - `init`: Initialize a new graphwalk repository
//! - `info`: Summarize the stored graph and lineage
//! - `add-vertex`, `add-edge`, `neighbors`: Edit and inspect the graph
//! - `traverse`: Visit every vertex reachable from a start vertex
//! - `search`: Find a path between two vertices
//! - `add-parent`, `ancestor`: Edit the lineage and find earliest ancestors
//! - `demo`: Run everything against built-in sample data
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! graphwalk init
//! graphwalk add-vertex 1 2 3
//! graphwalk add-edge 1 2
//! graphwalk traverse 1 --order dft
//! graphwalk search 1 3 --strategy bfs
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{
    AddEdgeArgs, AddParentArgs, AddVertexArgs, AncestorArgs, DemoArgs, InfoArgs, InitArgs,
    NeighborsArgs, SearchArgs, TraverseArgs,
};

pub use types::{SearchStrategyArg, TraversalOrderArg};

pub use validators::validate_vertex_id;

/// Graphwalk - traverse and search directed graphs
///
/// Store a directed graph and a family tree in `.graphwalk/` as JSONL, then
/// run breadth-first and depth-first traversals, path searches, and
/// earliest-ancestor lookups against them.
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new graphwalk repository
    ///
    /// Creates the `.graphwalk/` directory with configuration and empty data files.
    Init(InitArgs),

    /// Show repository information
    ///
    /// Displays file paths, vertex and edge counts, cycle status, and the
    /// number of strongly connected components.
    Info(InfoArgs),

    /// Add one or more vertices
    AddVertex(AddVertexArgs),

    /// Add a directed edge between two existing vertices
    AddEdge(AddEdgeArgs),

    /// List the out-neighbours of a vertex
    Neighbors(NeighborsArgs),

    /// Print every vertex reachable from a start vertex, in visit order
    Traverse(TraverseArgs),

    /// Find a path from one vertex to another
    ///
    /// Breadth-first search returns a path with the fewest edges.
    Search(SearchArgs),

    /// Record a parent/child relationship
    AddParent(AddParentArgs),

    /// Find the earliest known ancestor of an individual
    ///
    /// Prints -1 (or null with --json) when the individual has no parents.
    Ancestor(AncestorArgs),

    /// Run all traversals, searches, and ancestor lookups on sample data
    ///
    /// Does not need a repository.
    Demo(DemoArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args).await,
            Some(Commands::Demo(args)) => execute::execute_demo(args, output_mode).await,
            Some(Commands::Info(args)) => {
                let app = load_app().await?;
                execute::execute_info(&app, args, output_mode).await
            }
            Some(Commands::AddVertex(args)) => {
                let mut app = load_app().await?;
                execute::execute_add_vertex(&mut app, args, output_mode).await
            }
            Some(Commands::AddEdge(args)) => {
                let mut app = load_app().await?;
                execute::execute_add_edge(&mut app, args, output_mode).await
            }
            Some(Commands::Neighbors(args)) => {
                let app = load_app().await?;
                execute::execute_neighbors(&app, args, output_mode).await
            }
            Some(Commands::Traverse(args)) => {
                let app = load_app().await?;
                execute::execute_traverse(&app, args, output_mode).await
            }
            Some(Commands::Search(args)) => {
                let app = load_app().await?;
                execute::execute_search(&app, args, output_mode).await
            }
            Some(Commands::AddParent(args)) => {
                let mut app = load_app().await?;
                execute::execute_add_parent(&mut app, args, output_mode).await
            }
            Some(Commands::Ancestor(args)) => {
                let app = load_app().await?;
                execute::execute_ancestor(&app, args, output_mode).await
            }
            None => {
                println!("Graphwalk graph traversal toolkit");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

/// Load the repository containing the current directory, reporting load warnings.
async fn load_app() -> Result<crate::app::App> {
    let current_dir = std::env::current_dir()?;
    let app = crate::app::App::from_directory(&current_dir).await?;
    crate::output::print_warnings(app.graph_warnings())?;
    crate::output::print_warnings(app.lineage_warnings())?;
    Ok(app)
}
