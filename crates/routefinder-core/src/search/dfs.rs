use crate::error::{Result, RouteError};
use crate::graph::GraphProvider;
use crate::node::Node;
use crate::search::engine::SearchState;
use crate::search::frontier::{FrontierEntry, Parent};
use crate::search::SearchStatus;

/// One depth-first expansion. Returns the village that was explored.
pub(super) fn step(state: &mut SearchState, graph: &dyn GraphProvider, end: &Node) -> Result<Node> {
    let entry = state
        .frontier
        .pop_back()
        .ok_or(RouteError::FrontierExhausted)?;
    let current = entry.node.clone();

    state.explored.insert(current.clone());
    repair_path(&mut state.path, &entry, graph)?;

    // Pushed Z..A so the alphabetically first neighbor sits on top of the stack.
    let depth = state.path.len() - 1;
    for (neighbor, _) in graph.neighbors_descending(&current)? {
        if !state.explored.contains(neighbor) {
            state.frontier.push(FrontierEntry {
                node: neighbor.clone(),
                parent: Some(Parent {
                    depth,
                    node: current.clone(),
                }),
            });
        }
    }

    state.frontier.remove_all(&current);

    if &current == end {
        state.status = SearchStatus::Solved;
    } else {
        state.settle(graph.node_count());
    }

    Ok(current)
}

/// Cut the path back to the village that pushed `entry`, then append it.
///
/// The pusher of the entry popped from the stack is always the deepest path
/// village adjacent to the new one, so this yields the same path as popping
/// until the last village connects.
fn repair_path(path: &mut Vec<Node>, entry: &FrontierEntry, graph: &dyn GraphProvider) -> Result<()> {
    let broken = || RouteError::PathRepair {
        node: entry.node.to_string(),
    };

    match &entry.parent {
        None if path.is_empty() => {}
        None => return Err(broken()),
        Some(parent) => {
            if path.get(parent.depth) != Some(&parent.node) {
                return Err(broken());
            }
            path.truncate(parent.depth + 1);
            if !graph.is_adjacent(&parent.node, &entry.node) {
                return Err(broken());
            }
        }
    }

    path.push(entry.node.clone());
    Ok(())
}
