//! Schema derivation and CSV serialization.
//!
//! Stage 4 of the tracktable pipeline. Per-file extraction produces
//! ragged field sets — a stem may match the pattern or not, split
//! into three tokens or two. This module normalizes them into one
//! rectangular table:
//!
//! 1. **Derive** the run's column set: the fixed prefix, then the
//!    pattern's declared groups or `token_1..token_K` for the
//!    largest token count observed.
//! 2. **Project** every record onto that set by column name; fields
//!    a record doesn't carry serialize as empty cells.
//!
//! The destination file is opened once, written with a header row and
//! one row per record, and explicitly flushed. A write failure is
//! fatal to the run; a partial file is left behind for inspection.

use crate::naming::FieldParser;
use crate::types::FileRecord;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed schema prefix, present in every run in this order.
pub const BASE_COLUMNS: [&str; 6] = [
    "filepath",
    "filename",
    "name",
    "ext",
    "size_bytes",
    "duration_seconds",
];

/// Compute the full ordered column set for this run.
///
/// Pattern mode appends the declared group names in declaration
/// order; split mode appends `token_1..token_K` where K is the
/// maximum token count any record produced.
pub fn derive_schema(parser: &FieldParser, records: &[FileRecord]) -> Vec<String> {
    let mut schema: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    match parser {
        FieldParser::Pattern { .. } => {
            schema.extend(parser.group_names().iter().cloned());
        }
        FieldParser::Split { .. } => {
            let max_tokens = records.iter().map(|r| r.extra.len()).max().unwrap_or(0);
            schema.extend((1..=max_tokens).map(|i| format!("token_{i}")));
        }
        FieldParser::None => {}
    }
    schema
}

/// Serialize all records to `path` as UTF-8 CSV with a header row.
///
/// Every row is projected onto `schema`, so the output is rectangular
/// by construction; absent values become empty fields.
pub fn write_csv(
    path: &Path,
    schema: &[String],
    records: &[FileRecord],
) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(schema)?;
    for record in records {
        writer.write_record(schema.iter().map(|column| field_value(record, column)))?;
    }
    writer.flush()?;
    Ok(())
}

/// One cell: fixed columns read the record's own fields, everything
/// else is looked up in the extracted map. Absent is the empty
/// string.
fn field_value(record: &FileRecord, column: &str) -> String {
    match column {
        "filepath" => record.filepath.clone(),
        "filename" => record.filename.clone(),
        "name" => record.name.clone(),
        "ext" => record.ext.clone(),
        "size_bytes" => record
            .size_bytes
            .map(|size| size.to_string())
            .unwrap_or_default(),
        "duration_seconds" => record
            .duration_seconds
            .map(|duration| duration.to_string())
            .unwrap_or_default(),
        extracted => record
            .extra
            .get(extracted)
            .and_then(|value| value.clone())
            .unwrap_or_default(),
    }
}
