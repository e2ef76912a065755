//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

use crate::domain::VertexId;

/// Validate a vertex id.
///
/// Accepts a non-negative integer, surrounding whitespace ignored.
pub fn validate_vertex_id(s: &str) -> Result<VertexId, String> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err("Vertex ID cannot be empty".to_string());
    }

    if trimmed.starts_with('-') {
        return Err(format!(
            "Invalid vertex ID '{trimmed}': must be a non-negative integer"
        ));
    }

    trimmed
        .parse::<VertexId>()
        .map_err(|e| format!("Invalid vertex ID '{trimmed}': {e}"))
}
