//! Implementation of the `init` command and repository configuration.
//!
//! A graphwalk repository is a `.graphwalk/` directory holding
//! `config.yaml` plus the graph and lineage JSONL data files.

use crate::domain::{SearchStrategy, TraversalOrder};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the graphwalk directory
pub const GRAPHWALK_DIR_NAME: &str = ".graphwalk";

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the graph data file
pub const GRAPH_FILE_NAME: &str = "graph.jsonl";

/// Name of the lineage data file
pub const LINEAGE_FILE_NAME: &str = "lineage.jsonl";

/// Maximum directory depth to traverse when searching for the repository root
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphwalkConfig {
    /// Graph data file, relative to the repository root
    #[serde(rename = "graph-file")]
    pub graph_file: String,

    /// Lineage data file, relative to the repository root
    #[serde(rename = "lineage-file")]
    pub lineage_file: String,

    /// Defaults used when a command does not say otherwise
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `defaults:` section of the configuration file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Traversal order for `graphwalk traverse`
    #[serde(default)]
    pub order: TraversalOrder,

    /// Search strategy for `graphwalk search`
    #[serde(default)]
    pub strategy: SearchStrategy,
}

impl GraphwalkConfig {
    /// Load configuration from a file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let config = serde_yaml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(ConfigError::from)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Absolute path of the graph data file for a repository rooted at `root`.
    pub fn graph_path(&self, root: &Path) -> PathBuf {
        root.join(&self.graph_file)
    }

    /// Absolute path of the lineage data file for a repository rooted at `root`.
    pub fn lineage_path(&self, root: &Path) -> PathBuf {
        root.join(&self.lineage_file)
    }
}

impl Default for GraphwalkConfig {
    fn default() -> Self {
        Self {
            graph_file: format!("{GRAPHWALK_DIR_NAME}/{GRAPH_FILE_NAME}"),
            lineage_file: format!("{GRAPHWALK_DIR_NAME}/{LINEAGE_FILE_NAME}"),
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Result of the init command
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created `.graphwalk` directory
    pub graphwalk_dir: PathBuf,
    /// Path to the created config file
    pub config_file: PathBuf,
    /// Path to the created graph file
    pub graph_file: PathBuf,
    /// Path to the created lineage file
    pub lineage_file: PathBuf,
}

/// Initialize a new graphwalk repository in the given directory.
///
/// # Errors
///
/// Returns an error if `.graphwalk/` already exists or if any file
/// system operation fails.
pub async fn init(base_dir: &Path) -> Result<InitResult> {
    let graphwalk_dir = base_dir.join(GRAPHWALK_DIR_NAME);

    if is_initialized(base_dir) {
        return Err(ConfigError::AlreadyInitialized(GRAPHWALK_DIR_NAME.to_string()).into());
    }

    fs::create_dir_all(&graphwalk_dir).await?;

    let config = GraphwalkConfig::default();
    let config_file = graphwalk_dir.join(CONFIG_FILE_NAME);
    config.save(&config_file).await?;

    let graph_file = config.graph_path(base_dir);
    fs::write(&graph_file, "").await?;

    let lineage_file = config.lineage_path(base_dir);
    fs::write(&lineage_file, "").await?;

    tracing::info!(path = %graphwalk_dir.display(), "Initialized graphwalk repository");

    Ok(InitResult {
        graphwalk_dir,
        config_file,
        graph_file,
        lineage_file,
    })
}

/// Check if a directory has been initialized with graphwalk.
pub fn is_initialized(base_dir: &Path) -> bool {
    base_dir.join(GRAPHWALK_DIR_NAME).exists()
}

/// Find the repository root by searching up the directory tree.
///
/// Returns the directory containing `.graphwalk/`, or `None` if the
/// filesystem root or [`MAX_TRAVERSAL_DEPTH`] is reached first.
pub fn find_graphwalk_root(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    let mut depth = 0;

    loop {
        if current.join(GRAPHWALK_DIR_NAME).exists() {
            return Some(current);
        }

        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH || !current.pop() {
            return None;
        }
    }
}
