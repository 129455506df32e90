//! Shared output formatting helpers for commands

use std::path::Path;

pub use crate::output_by_format_result;

/// Print the records header line
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    let mut parts = vec![
        "H routefinder=1 records=1".to_string(),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Quoted map path for records headers
pub fn records_path(path: &Path) -> String {
    format!(
        "\"{}\"",
        routefinder_core::records::escape_quotes(&path.display().to_string())
    )
}
