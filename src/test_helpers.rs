//! Shared test utilities for the tracktable test suite.
//!
//! Fixture builders for the scan and metadata tests: empty
//! placeholder files for traversal tests, and real WAV containers
//! (written with hound) so duration tests exercise actual frame and
//! sample-rate data instead of mocks.

use std::path::Path;

/// Create an empty file, parents included.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

/// Write a mono 16-bit PCM WAV with exactly `frames` frames at
/// `sample_rate` Hz, so its duration is `frames / sample_rate`.
pub fn write_wav(path: &Path, frames: u32, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..frames {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}
