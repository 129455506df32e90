//! Graph construction and read-only graph operations
//!
//! - `adjacency`: the immutable adjacency structure
//! - `cost`: path cost with connectivity checking
//! - `table`: distance table projection of the raw edge list
//! - `provider`: trait the traversal engine reads the graph through

pub mod adjacency;
pub mod cost;
pub mod provider;
pub mod table;

pub use adjacency::AdjacencyGraph;
pub use cost::path_cost;
pub use provider::GraphProvider;
pub use table::{distance_rows, DistanceRow, DISTANCE_COLUMNS};
