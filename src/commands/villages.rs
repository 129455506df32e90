//! `routefinder villages` command - the villages a search can start from

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_records_header, records_path};
use routefinder_core::error::Result;
use routefinder_core::records::format_village_line;

/// Execute the villages command
pub fn execute(ctx: &CommandContext, path: &Path) -> Result<()> {
    let config = ctx.config()?;
    let route_map = ctx.load_map(path, &config)?;
    let villages = route_map.villages();

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "count": villages.len(),
                "villages": villages,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), routefinder_core::error::RouteError>(())
        },
        human => {
            for village in villages {
                println!("{}", village);
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} villages", villages.len());
            }
        },
        records => {
            print_records_header(
                "villages",
                &[("map", records_path(path)), ("count", villages.len().to_string())],
            );
            for (index, village) in villages.iter().enumerate() {
                println!("{}", format_village_line(index + 1, village));
            }
        }
    )
}
