//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:   green   (paths found, completed actions)
//!   - Warning:   yellow  (load warnings)
//!   - Error:     red     (no path, no ancestor)
//!   - Reference: cyan    (vertex ids)
//!   - Muted:     dimmed  (arrows, separators)
//!   - Emphasis:  bold    (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Colorize a vertex id (cyan).
pub(crate) fn colorize_vertex(vertex: impl std::fmt::Display, config: &OutputConfig) -> String {
    let text = vertex.to_string();
    if !config.use_colors {
        return text;
    }
    text.cyan().to_string()
}

/// Apply dimmed style to text (for arrows and separators).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}
