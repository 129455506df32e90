use std::collections::HashMap;

use tracing::{debug, trace};

use crate::bail_usage;
use crate::error::{Result, RouteError};
use crate::graph::GraphProvider;
use crate::node::Node;
use crate::search::frontier::{Explored, Frontier};
use crate::search::{bfs, dfs, SearchStatus, StepSnapshot, Strategy};

/// Mutable bookkeeping for one search. Dropped on reset or restart.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    pub start: Node,
    /// Fixed by the first step; a search cannot switch strategy midway
    pub strategy: Option<Strategy>,
    pub status: SearchStatus,
    pub steps: usize,
    pub frontier: Frontier,
    pub explored: Explored,
    /// Depth-first: built incrementally. Breadth-first: filled in when solved.
    pub path: Vec<Node>,
    /// Breadth-first: node -> node that first discovered it
    pub predecessors: HashMap<Node, Node>,
}

impl SearchState {
    fn new(start: Node) -> Self {
        Self {
            frontier: Frontier::with_root(start.clone()),
            start,
            strategy: None,
            status: SearchStatus::Searching,
            steps: 0,
            explored: Explored::new(),
            path: Vec::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Terminal status after a step that did not reach the goal
    pub fn settle(&mut self, node_count: usize) {
        if self.explored.len() >= node_count || self.frontier.is_empty() {
            self.status = SearchStatus::Exhausted;
        }
    }
}

/// Drives one search at a time over a borrowed, immutable graph.
///
/// Several engines may share the same graph; each owns its own state.
pub struct TraversalEngine<'g> {
    graph: &'g dyn GraphProvider,
    state: Option<SearchState>,
}

impl<'g> TraversalEngine<'g> {
    pub fn new(graph: &'g dyn GraphProvider) -> Self {
        Self { graph, state: None }
    }

    /// Begin a new search from `start`, discarding any previous state
    pub fn start_search(&mut self, start: &Node) -> Result<()> {
        if !self.graph.contains(start) {
            return Err(RouteError::unknown_node(start));
        }
        debug!(start = %start, "start_search");
        self.state = Some(SearchState::new(start.clone()));
        Ok(())
    }

    /// Return to `Idle`
    pub fn reset(&mut self) {
        self.state = None;
    }

    pub fn status(&self) -> SearchStatus {
        self.state
            .as_ref()
            .map_or(SearchStatus::Idle, |state| state.status)
    }

    pub fn explored(&self) -> &[Node] {
        match &self.state {
            Some(state) => state.explored.as_slice(),
            None => &[],
        }
    }

    pub fn frontier(&self) -> Vec<Node> {
        self.state
            .as_ref()
            .map(|state| state.frontier.nodes())
            .unwrap_or_default()
    }

    /// The finished path, once the search is solved
    pub fn path(&self) -> Option<&[Node]> {
        self.state
            .as_ref()
            .filter(|state| state.status == SearchStatus::Solved)
            .map(|state| state.path.as_slice())
    }

    pub fn step(&mut self, strategy: Strategy, end: &Node) -> Result<StepSnapshot> {
        match strategy {
            Strategy::DepthFirst => self.step_depth_first(end),
            Strategy::BreadthFirst => self.step_breadth_first(end),
        }
    }

    /// Expand the most recently pushed frontier village
    pub fn step_depth_first(&mut self, end: &Node) -> Result<StepSnapshot> {
        self.advance(Strategy::DepthFirst, end)
    }

    /// Expand the oldest frontier village
    pub fn step_breadth_first(&mut self, end: &Node) -> Result<StepSnapshot> {
        self.advance(Strategy::BreadthFirst, end)
    }

    fn advance(&mut self, strategy: Strategy, end: &Node) -> Result<StepSnapshot> {
        let current = self.expand(strategy, end)?;
        self.snapshot(current)
    }

    /// Run one expansion without building a snapshot. Returns the explored village.
    ///
    /// A failing step aborts the search and returns the engine to `Idle`; the
    /// graph stays usable for a fresh search.
    pub fn expand(&mut self, strategy: Strategy, end: &Node) -> Result<Node> {
        if !self.graph.contains(end) {
            return Err(RouteError::unknown_node(end));
        }

        let graph = self.graph;
        let state = self.active_state(strategy)?;

        let outcome = match strategy {
            Strategy::DepthFirst => dfs::step(state, graph, end),
            Strategy::BreadthFirst => bfs::step(state, graph, end),
        };

        let current = match outcome {
            Ok(current) => current,
            Err(err) => {
                debug!(error = %err, "search_aborted");
                self.state = None;
                return Err(err);
            }
        };

        state.steps += 1;
        trace!(
            step = state.steps,
            current = %current,
            explored = state.explored.len(),
            frontier = state.frontier.len(),
            status = %state.status,
            "step"
        );

        Ok(current)
    }

    fn snapshot(&self, current: Node) -> Result<StepSnapshot> {
        let Some(state) = self.state.as_ref() else {
            return Err(RouteError::SearchNotActive {
                status: SearchStatus::Idle,
            });
        };

        Ok(StepSnapshot {
            step: state.steps,
            current,
            explored: state.explored.as_slice().to_vec(),
            frontier: state.frontier.nodes(),
            status: state.status,
        })
    }

    fn active_state(&mut self, strategy: Strategy) -> Result<&mut SearchState> {
        let Some(state) = self.state.as_mut() else {
            return Err(RouteError::SearchNotActive {
                status: SearchStatus::Idle,
            });
        };

        match state.status {
            SearchStatus::Searching => {}
            SearchStatus::Exhausted => return Err(RouteError::FrontierExhausted),
            status => return Err(RouteError::SearchNotActive { status }),
        }

        match state.strategy {
            None => state.strategy = Some(strategy),
            Some(started) if started != strategy => bail_usage!(format!(
                "search started as {} cannot continue as {}",
                started, strategy
            )),
            Some(_) => {}
        }

        Ok(state)
    }
}
