//! Main CLI commands enum and argument structures

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::parse::parse_strategy;
use routefinder_core::search::Strategy;

/// Top-level routefinder commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a search between two villages, one expansion at a time
    Search(SearchArgs),

    /// Show every connection in the map with its distance
    Distances(MapArgs),

    /// List the villages in the map
    Villages(MapArgs),
}

/// The map file a command reads
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Village map file
    #[arg(value_name = "MAP")]
    pub path: PathBuf,
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Start village (case-insensitive)
    #[arg(long)]
    pub from: String,

    /// Destination village (case-insensitive)
    #[arg(long)]
    pub to: String,

    /// Search strategy: depth-first (dfs) or breadth-first (bfs)
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Print only the result, not every intermediate step
    #[arg(long)]
    pub no_steps: bool,
}
