//! Routefinder - step-by-step route finding over village maps
//!
//! Loads a weighted village map and replays depth-first or breadth-first
//! searches between two villages, one expansion at a time.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use routefinder_core::error::{ExitCode as RouteExitCode, RouteError};
use routefinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            report(&cli, &e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Clap failed before `Cli.format` exists; a JSON request still gets an envelope
fn parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .windows(2)
        .any(|pair| pair[0] == "--format" && pair[1] == "json")
        || std::env::args().any(|arg| arg == "--format=json");

    if !wants_json || matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let route_error = RouteError::UsageError(err.to_string());
    eprintln!("{}", route_error.to_json());
    ExitCode::from(route_error.exit_code() as u8)
}

fn report(cli: &Cli, e: &RouteError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
        return;
    }
    if cli.quiet {
        return;
    }

    eprintln!("error: {}", e);
    if e.is_recoverable() {
        eprintln!("hint: `routefinder villages <MAP>` lists the known villages");
    }
}
