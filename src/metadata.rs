//! Per-file metadata extraction.
//!
//! Stage 2 of the tracktable pipeline. Turns one scanned path into a
//! [`FileRecord`] carrying the static attributes (path, filename,
//! stem, extension, size) and, unless the run skips it, a probed
//! duration.
//!
//! ## Duration resolution
//!
//! Duration comes from two independent sources, first usable value
//! wins:
//!
//! 1. **General probe** — lofty reads the container/tag layer of
//!    every common format (MP3, FLAC, OGG, M4A, WAV). A probe that
//!    fails or reports a zero length is treated as "no usable
//!    length".
//! 2. **Raw WAV fallback** — for `.wav` files, hound reads the
//!    container header directly: `frames / sample_rate`. This covers
//!    WAVs whose tag layer is damaged but whose PCM header is fine.
//!
//! Everything else is `None`. Probe failures are absorbed here and
//! never abort the batch; the only caller-visible signal is an empty
//! `duration_seconds` cell.

use crate::naming::{extension_of, stem_of};
use crate::types::FileRecord;
use lofty::prelude::AudioFile;
use lofty::probe::read_from_path;
use std::collections::BTreeMap;
use std::path::Path;

/// Build the record for one file. `probe_duration` is the run-wide
/// switch; when false, no probing of any kind is attempted.
///
/// Size and duration are best-effort: a file deleted between scan and
/// extract, or unreadable, yields `None` fields rather than an error.
pub fn extract(path: &Path, probe_duration: bool) -> FileRecord {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let duration_seconds = if probe_duration {
        duration_seconds(path)
    } else {
        None
    };

    FileRecord {
        filepath: path.display().to_string(),
        filename,
        name: stem_of(path),
        ext: extension_of(path),
        size_bytes: std::fs::metadata(path).map(|meta| meta.len()).ok(),
        duration_seconds,
        extra: BTreeMap::new(),
    }
}

/// Resolve a file's duration in seconds, or `None` when no source
/// can determine it.
pub fn duration_seconds(path: &Path) -> Option<f64> {
    if let Some(duration) = tagged_duration(path) {
        return Some(duration);
    }
    if extension_of(path) == ".wav" {
        return wav_duration(path);
    }
    None
}

/// General-purpose probe via lofty, format guessed from content like
/// a tag library should. Zero-length results count as unusable so
/// damaged files fall through to the WAV path.
fn tagged_duration(path: &Path) -> Option<f64> {
    let tagged = read_from_path(path).ok()?;
    let duration = tagged.properties().duration();
    if duration.is_zero() {
        None
    } else {
        Some(duration.as_secs_f64())
    }
}

/// Raw WAV container read: frames divided by sample rate.
fn wav_duration(path: &Path) -> Option<f64> {
    let reader = hound::WavReader::open(path).ok()?;
    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return None;
    }
    Some(f64::from(reader.duration()) / f64::from(sample_rate))
}
