//! Shared types used across all pipeline stages.
//!
//! One record per discovered file flows through extract → parse → write.
//! Records live in memory for the whole run and are discarded after
//! serialization; the output CSV is the only thing that persists.

use std::collections::BTreeMap;

/// Everything known about one discovered file.
///
/// The first six fields map 1:1 onto the fixed schema prefix
/// (`filepath, filename, name, ext, size_bytes, duration_seconds`).
/// `extra` holds whatever the stem parser produced for this run:
/// regex-group-named fields or `token_N` fields, never both.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Absolute path to the file.
    pub filepath: String,
    /// Final path component, extension included.
    pub filename: String,
    /// Filename stem (no extension).
    pub name: String,
    /// Lowercased extension with leading dot (`.wav`), empty if none.
    pub ext: String,
    /// File size; `None` when the stat failed.
    pub size_bytes: Option<u64>,
    /// Probed duration; `None` when skipped or not determinable.
    pub duration_seconds: Option<f64>,
    /// Stem-extracted fields. A key with a `None` value is a declared
    /// regex group that did not match — the column exists, the cell
    /// is empty.
    pub extra: BTreeMap<String, Option<String>>,
}
