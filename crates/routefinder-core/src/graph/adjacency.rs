//! Immutable adjacency structure built once from ingested edges

use std::collections::BTreeMap;

use tracing::{debug, instrument, trace};

use crate::error::{Result, RouteError};
use crate::graph::GraphProvider;
use crate::ingest::{Edge, Ingested};
use crate::node::{Node, NodeRegistry};

/// Undirected weighted graph keyed by village name.
///
/// Neighbor maps are ordered by name so ascending and descending neighbor
/// listings need no sorting at lookup time. Each unordered pair holds exactly
/// one weight: the first row that mentions the pair wins, whichever way round
/// its endpoints were written.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    nodes: NodeRegistry,
    adjacency: BTreeMap<Node, BTreeMap<Node, f64>>,
}

impl AdjacencyGraph {
    /// Build the graph from a registry and the edge list produced by ingest.
    ///
    /// Every edge endpoint must already be registered in `nodes`; ingest
    /// guarantees this.
    #[instrument(skip_all, fields(villages = nodes.len(), rows = edges.len()))]
    pub fn build(nodes: &NodeRegistry, edges: &[Edge]) -> Self {
        let mut adjacency: BTreeMap<Node, BTreeMap<Node, f64>> = nodes
            .iter()
            .map(|node| (node.clone(), BTreeMap::new()))
            .collect();

        let mut ignored = 0usize;
        for edge in edges {
            debug_assert!(nodes.contains(&edge.a) && nodes.contains(&edge.b));

            let fresh = adjacency
                .get(&edge.a)
                .is_none_or(|neighbors| !neighbors.contains_key(&edge.b));
            if !fresh {
                ignored += 1;
                trace!(a = %edge.a, b = %edge.b, weight = edge.weight, "duplicate_edge_ignored");
                continue;
            }

            adjacency
                .entry(edge.a.clone())
                .or_default()
                .insert(edge.b.clone(), edge.weight);
            adjacency
                .entry(edge.b.clone())
                .or_default()
                .insert(edge.a.clone(), edge.weight);
        }

        debug!(ignored_duplicates = ignored, "build_graph");

        AdjacencyGraph {
            nodes: nodes.clone(),
            adjacency,
        }
    }

    pub fn from_ingested(ingested: &Ingested) -> Self {
        Self::build(&ingested.registry, &ingested.edges)
    }

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    fn neighbor_map(&self, node: &Node) -> Result<&BTreeMap<Node, f64>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| RouteError::unknown_node(node))
    }

    /// Number of distinct undirected connections
    pub fn edge_count(&self) -> usize {
        let (loops, ends) = self
            .adjacency
            .iter()
            .fold((0, 0), |(loops, ends), (node, neighbors)| {
                let self_loop = usize::from(neighbors.contains_key(node));
                (loops + self_loop, ends + neighbors.len() - self_loop)
            });
        loops + ends / 2
    }
}

impl GraphProvider for AdjacencyGraph {
    fn neighbors_ascending(&self, node: &Node) -> Result<Vec<(&Node, f64)>> {
        Ok(self
            .neighbor_map(node)?
            .iter()
            .map(|(n, w)| (n, *w))
            .collect())
    }

    fn neighbors_descending(&self, node: &Node) -> Result<Vec<(&Node, f64)>> {
        Ok(self
            .neighbor_map(node)?
            .iter()
            .rev()
            .map(|(n, w)| (n, *w))
            .collect())
    }

    fn weight(&self, a: &Node, b: &Node) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
