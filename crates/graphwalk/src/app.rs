//! Application context for CLI command execution.
//!
//! [`App`] locates the repository, loads its configuration and data files,
//! and writes them back after mutating commands. A data file that had
//! unusable lines on load is never rewritten, so those lines are not lost.
//!
//! # Example
//!
//! ```no_run
//! use graphwalk::app::App;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let app = App::from_directory(Path::new(".")).await?;
//!     println!("{} vertices", app.graph().vertex_count());
//!     Ok(())
//! }
//! ```

use crate::ancestry::Lineage;
use crate::commands::init::{
    find_graphwalk_root, GraphwalkConfig, CONFIG_FILE_NAME, GRAPHWALK_DIR_NAME,
};
use crate::domain::VertexId;
use crate::error::{ConfigError, Result, StorageError};
use crate::graph::Graph;
use crate::storage::{self, LoadWarning};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
#[derive(Debug)]
pub struct App {
    root_dir: PathBuf,
    config: GraphwalkConfig,
    graph: Graph<VertexId>,
    lineage: Lineage<VertexId>,
    graph_warnings: Vec<LoadWarning>,
    lineage_warnings: Vec<LoadWarning>,
}

impl App {
    /// Create an App from the given working directory.
    ///
    /// Searches up the directory tree for `.graphwalk/`, loads its
    /// configuration, then loads the graph and lineage files.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No repository is found in the directory tree
    /// - Configuration cannot be loaded
    /// - A data file exists but cannot be read
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_graphwalk_root(working_dir).ok_or(ConfigError::NotInitialized)?;
        let config_path = root_dir.join(GRAPHWALK_DIR_NAME).join(CONFIG_FILE_NAME);
        let config = GraphwalkConfig::load(&config_path).await?;

        let (graph, graph_warnings) = storage::load_graph(&config.graph_path(&root_dir)).await?;
        let (lineage, lineage_warnings) =
            storage::load_lineage(&config.lineage_path(&root_dir)).await?;

        Ok(Self {
            root_dir,
            config,
            graph,
            lineage,
            graph_warnings,
            lineage_warnings,
        })
    }

    /// The directory containing `.graphwalk/`.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Loaded configuration.
    pub fn config(&self) -> &GraphwalkConfig {
        &self.config
    }

    /// Path of the graph data file.
    pub fn graph_path(&self) -> PathBuf {
        self.config.graph_path(&self.root_dir)
    }

    /// Path of the lineage data file.
    pub fn lineage_path(&self) -> PathBuf {
        self.config.lineage_path(&self.root_dir)
    }

    /// The loaded graph.
    pub fn graph(&self) -> &Graph<VertexId> {
        &self.graph
    }

    /// Mutable access to the graph. Call [`save_graph`](Self::save_graph) afterwards.
    pub fn graph_mut(&mut self) -> &mut Graph<VertexId> {
        &mut self.graph
    }

    /// The loaded lineage.
    pub fn lineage(&self) -> &Lineage<VertexId> {
        &self.lineage
    }

    /// Mutable access to the lineage. Call [`save_lineage`](Self::save_lineage) afterwards.
    pub fn lineage_mut(&mut self) -> &mut Lineage<VertexId> {
        &mut self.lineage
    }

    /// Warnings produced while loading the graph file.
    pub fn graph_warnings(&self) -> &[LoadWarning] {
        &self.graph_warnings
    }

    /// Warnings produced while loading the lineage file.
    pub fn lineage_warnings(&self) -> &[LoadWarning] {
        &self.lineage_warnings
    }

    /// Persist the graph.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnloadedLines`] if the graph file had load
    /// warnings, or an error if the file cannot be written.
    pub async fn save_graph(&self) -> Result<()> {
        let path = self.graph_path();
        ensure_clean(&path, &self.graph_warnings)?;
        storage::save_graph(&self.graph, &path).await
    }

    /// Persist the lineage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnloadedLines`] if the lineage file had load
    /// warnings, or an error if the file cannot be written.
    pub async fn save_lineage(&self) -> Result<()> {
        let path = self.lineage_path();
        ensure_clean(&path, &self.lineage_warnings)?;
        storage::save_lineage(&self.lineage, &path).await
    }
}

fn ensure_clean(path: &Path, warnings: &[LoadWarning]) -> Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    Err(StorageError::UnloadedLines {
        path: path.display().to_string(),
        count: warnings.len(),
    }
    .into())
}
