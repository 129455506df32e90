//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use routefinder_core::config::RouteConfig;
use routefinder_core::error::Result;
use routefinder_core::map::RouteMap;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub cwd: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, cwd: &'a Path, start: Instant) -> Self {
        Self { cli, cwd, start }
    }

    /// Resolve `--config`, the working directory file, or defaults
    pub fn config(&self) -> Result<RouteConfig> {
        let config = RouteConfig::discover(self.cli.config.as_deref(), self.cwd)?;
        debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    /// Load a village map with the configured layout
    pub fn load_map(&self, path: &Path, config: &RouteConfig) -> Result<RouteMap> {
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        };
        let map = RouteMap::load(&resolved, &config.map)?;
        debug!(elapsed = ?self.start.elapsed(), "load_map");
        Ok(map)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Banner shown when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routefinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step depth-first and breadth-first searches over village maps.");
        println!();
        println!("Run `routefinder --help` for usage information.");
        Ok(())
    }
}
