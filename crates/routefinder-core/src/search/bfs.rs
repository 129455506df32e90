use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::graph::GraphProvider;
use crate::node::Node;
use crate::search::engine::SearchState;
use crate::search::frontier::FrontierEntry;
use crate::search::SearchStatus;

/// One breadth-first expansion. Returns the village that was explored.
pub(super) fn step(state: &mut SearchState, graph: &dyn GraphProvider, end: &Node) -> Result<Node> {
    let current = state
        .frontier
        .front()
        .map(|entry| entry.node.clone())
        .ok_or(RouteError::FrontierExhausted)?;

    for (neighbor, _) in graph.neighbors_ascending(&current)? {
        if state.explored.contains(neighbor) {
            continue;
        }
        state.frontier.push_unique(FrontierEntry::root(neighbor.clone()));
        // First discoverer wins
        state
            .predecessors
            .entry(neighbor.clone())
            .or_insert_with(|| current.clone());
    }

    state.explored.insert(current.clone());
    state.frontier.remove_all(&current);

    if state.explored.contains(end) {
        state.path = reconstruct_path(&state.start, end, &state.predecessors, graph.node_count())?;
        state.status = SearchStatus::Solved;
    } else {
        state.settle(graph.node_count());
    }

    Ok(current)
}

/// Walk the predecessor map back from `to` to `from`
pub(crate) fn reconstruct_path(
    from: &Node,
    to: &Node,
    predecessors: &HashMap<Node, Node>,
    node_count: usize,
) -> Result<Vec<Node>> {
    let broken = || RouteError::DisconnectedGraph {
        from: from.to_string(),
        to: to.to_string(),
    };

    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        // A chain longer than the graph means the map loops
        if path.len() > node_count {
            return Err(broken());
        }
        current = predecessors.get(current).ok_or_else(broken)?;
        path.push(current.clone());
    }

    path.reverse();
    Ok(path)
}
