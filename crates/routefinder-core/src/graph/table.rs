//! Distance table projection
//!
//! A read-only view of the ingested rows for display. No traversal logic.

use serde::Serialize;

use crate::ingest::Edge;
use crate::node::Node;

/// Column headings used by the human-readable table
pub const DISTANCE_COLUMNS: [&str; 3] = ["1st Village", "2nd Village", "Distance"];

/// One row of the distance table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRow {
    pub from: Node,
    pub to: Node,
    pub distance: f64,
}

/// The edge list as rows, in ingestion order, duplicates included
pub fn distance_rows(edges: &[Edge]) -> Vec<DistanceRow> {
    edges
        .iter()
        .map(|edge| DistanceRow {
            from: edge.a.clone(),
            to: edge.b.clone(),
            distance: edge.weight,
        })
        .collect()
}
