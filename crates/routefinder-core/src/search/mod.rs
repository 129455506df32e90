//! Step-wise traversal engine
//!
//! Provides the two uninformed searches the route finder replays:
//! - depth-first, expanding neighbors Z..A onto a stack and repairing the path
//!   through parent pointers
//! - breadth-first, expanding neighbors A..Z into a queue and rebuilding the
//!   path from a predecessor map once the goal is explored
//!
//! The engine never loops on its own. Callers step it one expansion at a time
//! and can observe the frontier and the explored list after every step.
//!
//! Full-loop drivers:
//! - [`run`] keeps every snapshot
//! - [`run_with`] hands each snapshot to a callback and keeps none
//! - [`run_quiet`] never builds snapshots

mod bfs;
mod dfs;
pub mod driver;
pub mod engine;
pub mod frontier;


use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RouteError;
use crate::node::Node;

pub use driver::{run, run_quiet, run_with, Outcome, SearchReport, SearchSummary};
pub use engine::TraversalEngine;
pub use frontier::{Explored, Frontier};

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            other => Err(RouteError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Lifecycle of a search: `Idle -> Searching -> Solved | Exhausted`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Idle,
    Searching,
    Solved,
    Exhausted,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Solved | SearchStatus::Exhausted)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Idle => write!(f, "idle"),
            SearchStatus::Searching => write!(f, "searching"),
            SearchStatus::Solved => write!(f, "solved"),
            SearchStatus::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// What the caller can observe after one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSnapshot {
    /// 1-based step number within the current search
    pub step: usize,
    /// Village expanded by this step
    pub current: Node,
    pub explored: Vec<Node>,
    pub frontier: Vec<Node>,
    pub status: SearchStatus,
}
