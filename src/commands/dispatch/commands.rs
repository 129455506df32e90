//! Command implementations for all routefinder commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{distances, search, villages};
use routefinder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search(args) => search::execute(ctx, args),
            Commands::Distances(args) => distances::execute(ctx, &args.path),
            Commands::Villages(args) => villages::execute(ctx, &args.path),
        }
    }
}
