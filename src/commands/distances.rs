//! `routefinder distances` command - the map as a distance table

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{output_by_format_result, print_records_header, records_path};
use routefinder_core::error::Result;
use routefinder_core::format::distance;
use routefinder_core::graph::{DistanceRow, DISTANCE_COLUMNS};
use routefinder_core::records::format_distance_line;

/// Execute the distances command
pub fn execute(ctx: &CommandContext, path: &Path) -> Result<()> {
    let config = ctx.config()?;
    let route_map = ctx.load_map(path, &config)?;
    let rows = route_map.distance_rows();

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "columns": DISTANCE_COLUMNS,
                "rows": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), routefinder_core::error::RouteError>(())
        },
        human => {
            print_table(&rows);
        },
        records => {
            print_records_header(
                "distances",
                &[("map", records_path(path)), ("rows", rows.len().to_string())],
            );
            for row in &rows {
                println!("{}", format_distance_line(row));
            }
        }
    )
}

fn print_table(rows: &[DistanceRow]) {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| [row.from.to_string(), row.to.to_string(), distance(row.distance)])
        .collect();

    let mut widths = DISTANCE_COLUMNS.map(str::len);
    for cell in &cells {
        for (width, value) in widths.iter_mut().zip(cell) {
            *width = (*width).max(value.chars().count());
        }
    }

    println!(
        "{:<w0$}  {:<w1$}  {:>w2$}",
        DISTANCE_COLUMNS[0],
        DISTANCE_COLUMNS[1],
        DISTANCE_COLUMNS[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    println!(
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for [from, to, dist] in &cells {
        println!(
            "{:<w0$}  {:<w1$}  {:>w2$}",
            from,
            to,
            dist,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }
}
