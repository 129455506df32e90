//! The step loop: start, step until terminal, cost the result

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::{path_cost, GraphProvider};
use crate::node::Node;
use crate::search::{SearchStatus, StepSnapshot, Strategy, TraversalEngine};
use crate::trace_time;

/// How a completed search ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Found { path: Vec<Node>, cost: f64 },
    NoPath,
}

/// Every snapshot of a search plus its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub start: Node,
    pub end: Node,
    pub steps: Vec<StepSnapshot>,
    pub outcome: Outcome,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }
}

/// How a search ended, without the per-step snapshots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSummary {
    pub strategy: Strategy,
    pub start: Node,
    pub end: Node,
    pub step_count: usize,
    pub outcome: Outcome,
}

impl SearchSummary {
    pub fn found(&self) -> bool {
        matches!(self.outcome, Outcome::Found { .. })
    }
}

/// Run a search to completion, recording the state after every step.
///
/// Terminates within one step per village: each step explores a village that
/// was not explored before.
pub fn run(
    graph: &dyn GraphProvider,
    start: &Node,
    end: &Node,
    strategy: Strategy,
) -> Result<SearchReport> {
    let mut steps = Vec::new();
    let summary = run_with(graph, start, end, strategy, |snapshot| steps.push(snapshot))?;

    Ok(SearchReport {
        strategy: summary.strategy,
        start: summary.start,
        end: summary.end,
        steps,
        outcome: summary.outcome,
    })
}

/// Run a search to completion, handing each snapshot to `on_step` as it is taken
pub fn run_with<F>(
    graph: &dyn GraphProvider,
    start: &Node,
    end: &Node,
    strategy: Strategy,
    mut on_step: F,
) -> Result<SearchSummary>
where
    F: FnMut(StepSnapshot),
{
    drive(graph, start, end, strategy, Some(&mut on_step))
}

/// Run a search to completion without building any snapshots
pub fn run_quiet(
    graph: &dyn GraphProvider,
    start: &Node,
    end: &Node,
    strategy: Strategy,
) -> Result<SearchSummary> {
    drive(graph, start, end, strategy, None)
}

#[instrument(skip_all, fields(start = %start, end = %end, strategy = %strategy))]
fn drive(
    graph: &dyn GraphProvider,
    start: &Node,
    end: &Node,
    strategy: Strategy,
    mut on_step: Option<&mut dyn FnMut(StepSnapshot)>,
) -> Result<SearchSummary> {
    let begin = Instant::now();
    let mut engine = TraversalEngine::new(graph);
    engine.start_search(start)?;

    let mut step_count = 0;
    while !engine.status().is_terminal() {
        match on_step.as_deref_mut() {
            Some(observe) => observe(engine.step(strategy, end)?),
            None => {
                engine.expand(strategy, end)?;
            }
        }
        step_count += 1;
    }

    let outcome = match (engine.status(), engine.path()) {
        (SearchStatus::Solved, Some(path)) => Outcome::Found {
            cost: path_cost(path, graph)?,
            path: path.to_vec(),
        },
        _ => Outcome::NoPath,
    };

    debug!(steps = step_count, found = matches!(outcome, Outcome::Found { .. }), "search_complete");
    trace_time!(begin, "run_search");

    Ok(SearchSummary {
        strategy,
        start: start.clone(),
        end: end.clone(),
        step_count,
        outcome,
    })
}
