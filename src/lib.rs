//! # tracktable
//!
//! Build a CSV metadata index over a directory of audio files. The
//! filesystem is the data source: every regular file under the input
//! root becomes one row, and the filename stem can be decomposed into
//! extra columns via a named-group regex or a delimiter split.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! One invocation runs four stages, strictly forward:
//!
//! ```text
//! 1. Scan      root/      →  Vec<PathBuf>      (sorted, filtered file list)
//! 2. Extract   path       →  FileRecord        (path, name, ext, size, duration)
//! 3. Parse     stem       →  extra fields      (regex groups or token_N)
//! 4. Write     records    →  metadata.csv      (rectangular table, header row)
//! ```
//!
//! Stages 2 and 3 run per file; nothing revisits an earlier stage.
//! The whole run is sequential and in-memory — the record list is
//! built, normalized against the derived schema, serialized, and
//! dropped.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the input root, applies the extension filter, sorts |
//! | [`metadata`] | Stage 2 — static attributes plus best-effort duration probing |
//! | [`naming`] | Stage 3 — stem/extension helpers and the per-run stem field parser |
//! | [`table`] | Stage 4 — schema derivation and CSV serialization |
//! | [`types`] | The shared [`types::FileRecord`] flowing between stages |
//! | [`output`] | CLI summary formatting — pure `format_*` plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Two-Layer Duration Probing
//!
//! Duration comes from [lofty](https://docs.rs/lofty) first — one
//! probe covers every common compressed and container format — with a
//! raw [hound](https://docs.rs/hound) header read as the `.wav`
//! fallback for files whose tag layer is unreadable. Both layers are
//! total: any probe failure is an empty cell, never an aborted run.
//!
//! ## Schema From Observed Data
//!
//! The column set is derived after extraction: the fixed prefix, then
//! the pattern's declared groups or `token_1..token_K` for the widest
//! split observed. Every record is then projected onto that set, so
//! the table is rectangular by construction rather than by validation.
//!
//! ## Fatal vs. Absorbed Errors
//!
//! Per-file failures (stat, probe) degrade to empty cells; run-level
//! failures (bad root, empty scan, bad pattern, unwritable output)
//! are `thiserror` enums that propagate to the binary and exit
//! non-zero. There is no retry path anywhere.

pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
