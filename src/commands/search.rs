//! `routefinder search` command - replay a search between two villages
//!
//! Human output mirrors a step trace: the frontier before the first
//! expansion, then the village expanded by every step with the explored
//! list and frontier after it, and finally the path and its cost.

use crate::cli::SearchArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_records_header, records_path};
use routefinder_core::error::{Result, RouteError};
use routefinder_core::format::{bracketed, distance};
use routefinder_core::graph::GraphProvider;
use routefinder_core::node::Node;
use routefinder_core::records::{format_outcome_line, format_step_line, node_list};
use routefinder_core::search::{
    run, run_quiet, run_with, Outcome, SearchStatus, SearchSummary, StepSnapshot, Strategy,
};
use tracing::debug;

/// Execute the search command
pub fn execute(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
    let config = ctx.config()?;
    let route_map = ctx.load_map(&args.map.path, &config)?;

    let start = route_map.resolve(&args.from)?;
    let end = route_map.resolve(&args.to)?;
    let strategy = args.strategy.unwrap_or(config.search.strategy);
    let show_steps = config.search.show_steps && !args.no_steps;
    let graph = route_map.graph();

    output_by_format_result!(ctx.cli.format,
        json => {
            if show_steps {
                let report = run(graph, &start, &end, strategy)?;
                log_done(ctx, report.steps.len(), report.found());
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let summary = run_quiet(graph, &start, &end, strategy)?;
                log_done(ctx, summary.step_count, summary.found());
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            Ok::<(), RouteError>(())
        },
        human => {
            let show_steps = show_steps && !ctx.cli.quiet;
            if show_steps {
                println!("Explored: []");
                println!("Frontier: {}", bracketed(std::slice::from_ref(&start)));
                println!();
            }
            let summary = search(graph, &start, &end, strategy, show_steps, print_human_step)?;
            log_done(ctx, summary.step_count, summary.found());
            print_human_outcome(&summary);
        },
        records => {
            print_header(args, strategy, &start, &end);
            let summary = search(graph, &start, &end, strategy, show_steps, |snapshot| {
                println!("{}", format_step_line(&snapshot));
            })?;
            log_done(ctx, summary.step_count, summary.found());
            println!("{}", format_outcome_line(&summary.outcome));
        }
    )
}

/// Stream steps to `on_step`, or skip building them when they are hidden
fn search(
    graph: &dyn GraphProvider,
    start: &Node,
    end: &Node,
    strategy: Strategy,
    show_steps: bool,
    on_step: impl FnMut(StepSnapshot),
) -> Result<SearchSummary> {
    if show_steps {
        run_with(graph, start, end, strategy, on_step)
    } else {
        run_quiet(graph, start, end, strategy)
    }
}

fn log_done(ctx: &CommandContext, steps: usize, found: bool) {
    debug!(elapsed = ?ctx.start.elapsed(), steps, found, "search");
}

fn print_human_step(snapshot: StepSnapshot) {
    // The goal step is reported by the outcome block
    if snapshot.status == SearchStatus::Solved {
        return;
    }
    println!("Current Node: {}", snapshot.current);
    println!("Explored: {}", bracketed(&snapshot.explored));
    println!("Frontier: {}", bracketed(&snapshot.frontier));
    println!();
}

fn print_human_outcome(summary: &SearchSummary) {
    match &summary.outcome {
        Outcome::Found { path, cost } => {
            println!("Current Node: {}", summary.end);
            println!("Path Found: {}", bracketed(path));
            println!("The cost of the found path is: {}", distance(*cost));
        }
        Outcome::NoPath => {
            println!("No path can be found between the villages.");
        }
    }
}

fn print_header(args: &SearchArgs, strategy: Strategy, start: &Node, end: &Node) {
    let endpoint = |node: &Node| node_list(std::slice::from_ref(node));
    print_records_header(
        "search",
        &[
            ("map", records_path(&args.map.path)),
            ("strategy", strategy.to_string()),
            ("from", endpoint(start)),
            ("to", endpoint(end)),
        ],
    );
}
