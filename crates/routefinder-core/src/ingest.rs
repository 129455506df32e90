//! Edge ingest: raw map rows to a node registry and a validated edge list
//!
//! Ingest is all-or-nothing. The first malformed row aborts the load and no
//! partial registry or edge list is returned.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::bail_malformed;
use crate::error::Result;
use crate::node::{Node, NodeRegistry};

/// One row from a tuple source, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTuple {
    /// 1-based line in the source, used in error messages
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawTuple {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Build a row from three string-like parts
    pub fn from_parts(line: usize, a: &str, b: &str, weight: &str) -> Self {
        Self::new(line, vec![a.to_string(), b.to_string(), weight.to_string()])
    }
}

/// A validated, undirected connection between two villages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub a: Node,
    pub b: Node,
    pub weight: f64,
}

/// Output of a successful ingest
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub registry: NodeRegistry,
    /// Every row in source order, duplicates included
    pub edges: Vec<Edge>,
}

/// Validate raw rows and collect the distinct villages in first-seen order
#[instrument(skip_all)]
pub fn ingest<I>(tuples: I) -> Result<Ingested>
where
    I: IntoIterator<Item = RawTuple>,
{
    let mut ingested = Ingested::default();

    for tuple in tuples {
        let edge = validate(&tuple)?;
        ingested.registry.insert(edge.a.clone());
        ingested.registry.insert(edge.b.clone());
        ingested.edges.push(edge);
    }

    debug!(
        villages = ingested.registry.len(),
        edges = ingested.edges.len(),
        "ingest"
    );

    Ok(ingested)
}

fn validate(tuple: &RawTuple) -> Result<Edge> {
    let [a, b, weight] = tuple.fields.as_slice() else {
        bail_malformed!(
            tuple.line,
            "expected 3 fields, found {}",
            tuple.fields.len()
        );
    };

    let Some(a) = Node::new(a) else {
        bail_malformed!(tuple.line, "first village name is empty");
    };
    let Some(b) = Node::new(b) else {
        bail_malformed!(tuple.line, "second village name is empty");
    };

    let weight = match weight.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => w,
        Ok(_) => bail_malformed!(
            tuple.line,
            "distance must be a non-negative number, got '{}'",
            weight.trim()
        ),
        Err(_) => bail_malformed!(tuple.line, "distance '{}' is not a number", weight.trim()),
    };

    Ok(Edge { a, b, weight })
}
