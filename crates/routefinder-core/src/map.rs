//! Village map files
//!
//! A map file starts with the number of distinct villages on its own line,
//! followed by one `village<TAB>village<TAB>distance` row per connection.
//! Blank lines are ignored. The delimiter and the count header are
//! configurable through [`MapConfig`].

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::config::MapConfig;
use crate::error::{Result, RouteError};
use crate::graph::{distance_rows, AdjacencyGraph, DistanceRow};
use crate::ingest::{ingest, Edge, RawTuple};
use crate::node::{Node, NodeRegistry};
use crate::trace_time;

/// Raw contents of a map file, split into rows but not yet validated
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VillageMap {
    /// Count from the header line, when the layout has one
    pub declared_villages: Option<usize>,
    pub rows: Vec<RawTuple>,
}

/// Split map text into rows
pub fn parse_map(text: &str, config: &MapConfig) -> Result<VillageMap> {
    let delimiter = config.delimiter_char()?;
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let declared_villages = if config.count_header {
        let Some((_, header)) = lines.next() else {
            return Err(header_error("missing village count"));
        };
        let count = header.trim().parse::<usize>().map_err(|_| {
            header_error(format!(
                "first line must be the number of villages, got '{}'",
                header.trim()
            ))
        })?;
        Some(count)
    } else {
        None
    };

    let rows = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            RawTuple::new(number, line.split(delimiter).map(str::to_string).collect())
        })
        .collect();

    Ok(VillageMap {
        declared_villages,
        rows,
    })
}

/// Read and split a map file
pub fn read_map(path: &Path, config: &MapConfig) -> Result<VillageMap> {
    let text = fs::read_to_string(path)?;
    parse_map(&text, config)
}

fn header_error(reason: impl Into<String>) -> RouteError {
    RouteError::MalformedHeader {
        reason: reason.into(),
    }
}

/// A loaded map: the ingested rows and the graph built from them
#[derive(Debug, Clone)]
pub struct RouteMap {
    edges: Vec<Edge>,
    graph: AdjacencyGraph,
}

impl RouteMap {
    /// Load, validate and build a map file
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path, config: &MapConfig) -> Result<Self> {
        let start = Instant::now();
        let map = read_map(path, config)?;
        trace_time!(start, "read_map", rows = map.rows.len());
        Self::from_village_map(map)
    }

    /// Build from parsed map contents, checking the declared village count
    pub fn from_village_map(map: VillageMap) -> Result<Self> {
        let declared = map.declared_villages;
        let route_map = Self::from_tuples(map.rows)?;

        if let Some(declared) = declared {
            let actual = route_map.villages().len();
            if declared != actual {
                return Err(header_error(format!(
                    "header declares {} villages but the rows name {}",
                    declared, actual
                )));
            }
        }

        Ok(route_map)
    }

    /// Build from rows of any tuple source
    pub fn from_tuples<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawTuple>,
    {
        let ingested = ingest(rows)?;
        let graph = AdjacencyGraph::from_ingested(&ingested);
        debug!(
            villages = graph.nodes().len(),
            connections = graph.edge_count(),
            "route_map"
        );
        Ok(RouteMap {
            edges: ingested.edges,
            graph,
        })
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Known villages in first-seen order
    pub fn villages(&self) -> &NodeRegistry {
        self.graph.nodes()
    }

    /// Every ingested row, duplicates included
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a user-supplied village name
    pub fn resolve(&self, name: &str) -> Result<Node> {
        self.villages().resolve(name)
    }

    pub fn distance_rows(&self) -> Vec<DistanceRow> {
        distance_rows(&self.edges)
    }
}
