//! Routefinder Core Library
//!
//! Village maps, the weighted graph built from them, and the step-wise
//! depth-first and breadth-first traversal engine.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod map;
pub mod node;
pub mod records;
pub mod search;
