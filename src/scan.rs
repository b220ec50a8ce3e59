//! Filesystem scanning.
//!
//! Stage 1 of the tracktable pipeline. Enumerates the regular files
//! under the input root that pass the extension filter, producing the
//! sorted, deduplicated path list the extractor consumes.
//!
//! ## Rules
//!
//! - Only regular files are kept. Directories, symlinks, and special
//!   files are excluded; links are not followed.
//! - Extension matching is case-insensitive. Configured extensions
//!   are normalized to lowercase with a leading dot, so `wav`, `WAV`,
//!   and `.wav` all mean the same filter.
//! - Non-recursive mode lists only direct children of the root.
//! - Unreadable entries are skipped; a missing or non-directory root
//!   and an empty result set are fatal.
//! - Output paths are absolute (the root is canonicalized once) and
//!   sorted, so traversal order never leaks into the CSV.

use crate::naming::extension_of;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input directory does not exist or is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("no matching files under {0}")]
    NoMatches(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scanner configuration, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Normalized extension filter (`.wav` form). Empty = allow all.
    pub extensions: Vec<String>,
    /// Visit the full subtree, or only direct children.
    pub recursive: bool,
}

/// Normalize user-supplied extensions: lowercase, leading dot added
/// when missing. `["wav", ".MP3"]` → `[".wav", ".mp3"]`.
pub fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| {
            let ext = ext.to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            }
        })
        .collect()
}

/// Enumerate matching regular files under `root`.
///
/// Returns the sorted, deduplicated absolute path list, or an error
/// when the root is invalid or nothing matched.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    let root = root.canonicalize()?;

    let depth = if options.recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = WalkDir::new(&root)
        .max_depth(depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| matches_filter(path, &options.extensions))
        .collect();

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(ScanError::NoMatches(root));
    }
    Ok(files)
}

fn matches_filter(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let ext = extension_of(path);
    extensions.iter().any(|allowed| *allowed == ext)
}
