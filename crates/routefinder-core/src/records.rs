//! Utilities for records output format
//!
//! Village names may contain spaces, so every name is quoted.

use crate::graph::DistanceRow;
use crate::node::Node;
use crate::search::{Outcome, StepSnapshot};

/// Escape a string for embedding in a quoted records field.
/// Backslashes are doubled first, then `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

fn quoted(node: &Node) -> String {
    format!("\"{}\"", escape_quotes(node.as_str()))
}

/// Comma-joined quoted names, `-` for an empty list
pub fn node_list(nodes: &[Node]) -> String {
    if nodes.is_empty() {
        return "-".to_string();
    }
    nodes.iter().map(quoted).collect::<Vec<_>>().join(",")
}

/// Format a step line in records format
///
/// Returns an S-line with the expanded village and both collections.
pub fn format_step_line(snapshot: &StepSnapshot) -> String {
    format!(
        "S {} current={} status={} explored={} frontier={}",
        snapshot.step,
        quoted(&snapshot.current),
        snapshot.status,
        node_list(&snapshot.explored),
        node_list(&snapshot.frontier)
    )
}

/// Format the result line of a search
pub fn format_outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found { path, cost } => format!(
            "R found path={} cost={}",
            node_list(path),
            crate::format::distance(*cost)
        ),
        Outcome::NoPath => "R no_path".to_string(),
    }
}

/// Format a distance table row
pub fn format_distance_line(row: &DistanceRow) -> String {
    format!(
        "D {} {} distance={}",
        quoted(&row.from),
        quoted(&row.to),
        crate::format::distance(row.distance)
    )
}

/// Format a village line
pub fn format_village_line(index: usize, node: &Node) -> String {
    format!("V {} {}", index, quoted(node))
}
