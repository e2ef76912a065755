//! Output formatting for CLI commands.
//!
//! Every result can be rendered as human-readable text or as JSON for
//! programmatic use. The `write_*` functions take any [`Write`] so they can
//! be tested against a buffer; the `print_*` wrappers target stdout.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use crate::domain::{SearchStrategy, TraversalOrder, VertexId};
use crate::storage::LoadWarning;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::env;
use std::io::{self, Write};

use color::{bold, colorize_vertex, dimmed, error, success, warning};

/// Printed in text mode when there is no earliest ancestor.
pub const NO_ANCESTOR: &str = "-1";

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for text output styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Use `->` instead of `→` between path vertices.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `GRAPHWALK_ASCII`: Set to "1" or "true" for ASCII-only arrows (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `GRAPHWALK_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("GRAPHWALK_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "GRAPHWALK_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("GRAPHWALK_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }

    fn arrow(&self) -> &'static str {
        if self.use_ascii { " -> " } else { " → " }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

fn join_vertices(vertices: &[VertexId], separator: &str, config: &OutputConfig) -> String {
    vertices
        .iter()
        .map(|v| colorize_vertex(v, config))
        .collect::<Vec<_>>()
        .join(&dimmed(separator, config))
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Writers
// ============================================================================

/// Write the visit order of a traversal.
pub fn write_traversal<W: Write>(
    w: &mut W,
    order: TraversalOrder,
    start: VertexId,
    visited: &[VertexId],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(
            w,
            &json!({
                "order": order,
                "start": start,
                "visited": visited,
            }),
        ),
        OutputMode::Text => {
            writeln!(
                w,
                "{} {}: {}",
                bold(&order.to_string(), config),
                dimmed(&format!("from {start}"), config),
                join_vertices(visited, ", ", config)
            )
        }
    }
}

/// Write the result of a path search.
pub fn write_path<W: Write>(
    w: &mut W,
    strategy: SearchStrategy,
    start: VertexId,
    dest: VertexId,
    path: Option<&[VertexId]>,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(
            w,
            &json!({
                "strategy": strategy,
                "start": start,
                "dest": dest,
                "path": path,
            }),
        ),
        OutputMode::Text => match path {
            Some(path) => writeln!(
                w,
                "{} {}: {}",
                bold(&strategy.to_string(), config),
                dimmed(&format!("{start} to {dest}"), config),
                join_vertices(path, config.arrow(), config)
            ),
            None => writeln!(
                w,
                "{}",
                error(&format!("No path from {start} to {dest}"), config)
            ),
        },
    }
}

/// Write the earliest ancestor of an individual.
///
/// Text mode prints only the ancestor id, or [`NO_ANCESTOR`] when there is none.
pub fn write_ancestor<W: Write>(
    w: &mut W,
    individual: VertexId,
    ancestor: Option<VertexId>,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(
            w,
            &json!({
                "individual": individual,
                "earliest_ancestor": ancestor,
            }),
        ),
        OutputMode::Text => match ancestor {
            Some(ancestor) => writeln!(w, "{}", colorize_vertex(ancestor, config)),
            None => writeln!(w, "{}", error(NO_ANCESTOR, config)),
        },
    }
}

/// Write the out-neighbours of a vertex.
pub fn write_neighbors<W: Write>(
    w: &mut W,
    vertex: VertexId,
    neighbors: &BTreeSet<VertexId>,
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_json(
            w,
            &json!({
                "vertex": vertex,
                "neighbors": neighbors,
            }),
        ),
        OutputMode::Text => {
            let neighbors: Vec<VertexId> = neighbors.iter().copied().collect();
            if neighbors.is_empty() {
                writeln!(
                    w,
                    "{} {}",
                    colorize_vertex(vertex, config),
                    dimmed("has no outgoing edges", config)
                )
            } else {
                writeln!(
                    w,
                    "{}{}{}",
                    colorize_vertex(vertex, config),
                    dimmed(config.arrow(), config),
                    join_vertices(&neighbors, ", ", config)
                )
            }
        }
    }
}

/// Write load warnings, one per line.
pub fn write_warnings<W: Write>(
    w: &mut W,
    warnings: &[LoadWarning],
    config: &OutputConfig,
) -> io::Result<()> {
    for item in warnings {
        writeln!(w, "{} {item}", warning("warning:", config))?;
    }
    Ok(())
}

// ============================================================================
// Stdout / stderr wrappers
// ============================================================================

/// Print the visit order of a traversal to stdout.
pub fn print_traversal(
    order: TraversalOrder,
    start: VertexId,
    visited: &[VertexId],
    mode: OutputMode,
) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    write_traversal(&mut handle, order, start, visited, mode, &OutputConfig::from_env())
}

/// Print the result of a path search to stdout.
pub fn print_path(
    strategy: SearchStrategy,
    start: VertexId,
    dest: VertexId,
    path: Option<&[VertexId]>,
    mode: OutputMode,
) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    write_path(
        &mut handle,
        strategy,
        start,
        dest,
        path,
        mode,
        &OutputConfig::from_env(),
    )
}

/// Print the earliest ancestor of an individual to stdout.
pub fn print_ancestor(
    individual: VertexId,
    ancestor: Option<VertexId>,
    mode: OutputMode,
) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    write_ancestor(&mut handle, individual, ancestor, mode, &OutputConfig::from_env())
}

/// Print the out-neighbours of a vertex to stdout.
pub fn print_neighbors(
    vertex: VertexId,
    neighbors: &BTreeSet<VertexId>,
    mode: OutputMode,
) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    write_neighbors(&mut handle, vertex, neighbors, mode, &OutputConfig::from_env())
}

/// Print a completed action to stdout in the success colour.
pub fn print_success(msg: &str) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    writeln!(handle, "{}", success(msg, &OutputConfig::from_env()))
}

/// Print load warnings to stderr so they never corrupt JSON on stdout.
pub fn print_warnings(warnings: &[LoadWarning]) -> io::Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    let mut handle = io::stderr().lock();
    write_warnings(&mut handle, warnings, &OutputConfig::from_env())
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut handle = io::stdout().lock();
    write_json(&mut handle, value)
}
