//! CLI output formatting.
//!
//! One `format_*` function per surface (returns `Vec<String>`, pure,
//! no I/O) and a `print_*` wrapper that writes to stdout. Diagnostics
//! never go through here — fatal errors print to stderr in `main`.
//!
//! ```text
//! 132 files indexed
//! 9 columns: filepath, filename, name, ext, size_bytes, duration_seconds, sujet, age, gender
//! Wrote metadata.csv
//! ```

use crate::types::FileRecord;
use std::path::Path;

/// Format the end-of-run summary: row count, column list, output
/// path.
pub fn format_build_output(
    records: &[FileRecord],
    schema: &[String],
    output: &Path,
) -> Vec<String> {
    let files = if records.len() == 1 { "file" } else { "files" };
    vec![
        format!("{} {} indexed", records.len(), files),
        format!("{} columns: {}", schema.len(), schema.join(", ")),
        format!("Wrote {}", output.display()),
    ]
}

/// Print the build summary to stdout.
pub fn print_build_output(records: &[FileRecord], schema: &[String], output: &Path) {
    for line in format_build_output(records, schema, output) {
        println!("{line}");
    }
}
