use crate::error::Result;
use crate::node::Node;

/// Trait for providing undirected, weighted adjacency to the traversal engine
pub trait GraphProvider {
    /// Neighbors of `node` with edge weights, sorted by neighbor name A..Z
    fn neighbors_ascending(&self, node: &Node) -> Result<Vec<(&Node, f64)>>;

    /// Neighbors of `node` with edge weights, sorted by neighbor name Z..A
    fn neighbors_descending(&self, node: &Node) -> Result<Vec<(&Node, f64)>> {
        let mut neighbors = self.neighbors_ascending(node)?;
        neighbors.reverse();
        Ok(neighbors)
    }

    /// Weight of the edge between `a` and `b`, in either direction
    fn weight(&self, a: &Node, b: &Node) -> Option<f64>;

    fn is_adjacent(&self, a: &Node, b: &Node) -> bool {
        self.weight(a, b).is_some()
    }

    fn contains(&self, node: &Node) -> bool;

    /// Number of distinct villages; a search that explored this many is exhausted
    fn node_count(&self) -> usize;
}
