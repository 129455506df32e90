//! CLI argument parsing for routefinder
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod commands;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Commands, MapArgs, SearchArgs};
pub use routefinder_core::format::OutputFormat;

/// Routefinder - step-by-step route finding over village maps
#[derive(Parser, Debug)]
#[command(name = "routefinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = parse::parse_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `trace`, `routefinder_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./routefinder.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
