//! Harness output readers and unit normalization.
//!
//! This module handles:
//! - Converting harness time units to nanoseconds
//! - Reading criterion, Go, tinybench and raw JSON-lines output
//! - Filtering samples down to one curve

pub mod criterion;
pub mod golang;
pub mod sample;
pub mod tinybench;
pub mod units;

use crate::utils::error::ParseError;
use clap::ValueEnum;
use log::debug;
use std::io::BufRead;
use std::path::Path;

// Re-export main types
pub use criterion::parse_criterion_output;
pub use golang::parse_go_bench_output;
pub use sample::{IterationTrace, RawSample};
pub use tinybench::parse_tinybench_output;
pub use units::{normalize, TimeUnit};

/// Benchmark harness that produced an output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Harness {
    /// cargo-criterion JSON messages
    Criterion,
    /// `go test -bench` text output
    Golang,
    /// tinybench JSON table rows
    Tinybench,
    /// One serialized raw sample per line
    Raw,
}

/// Read samples from harness output
///
/// **Public** - dispatches to the adapter for `harness`
pub fn read_samples<R: BufRead>(reader: R, harness: Harness) -> Result<Vec<RawSample>, ParseError> {
    match harness {
        Harness::Criterion => parse_criterion_output(reader),
        Harness::Golang => parse_go_bench_output(reader),
        Harness::Tinybench => parse_tinybench_output(reader),
        Harness::Raw => parse_raw_samples(reader),
    }
}

/// Read one JSON-encoded `RawSample` per line
fn parse_raw_samples<R: BufRead>(reader: R) -> Result<Vec<RawSample>, ParseError> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let sample = serde_json::from_str(&line)
            .map_err(|source| ParseError::JsonError { line: index + 1, source })?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Keep only samples whose name mentions `curve` (case-insensitive)
///
/// Benchmark runs usually cover several curves in one output file.
pub fn retain_curve(samples: Vec<RawSample>, curve: &str) -> Vec<RawSample> {
    let needle = curve.to_lowercase();
    let before = samples.len();

    let kept: Vec<RawSample> = samples
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect();

    debug!("Curve filter '{}' kept {} of {} samples", curve, kept.len(), before);
    kept
}

/// Whether the file name of `path` mentions `curve` (case-insensitive)
///
/// Go benchmark names carry no curve, so gnark output is split into one
/// file per curve (e.g. `gnark-bn254.txt`). Dashes in the file name count
/// as underscores, so `bls12-381` matches the curve `bls12_381`.
pub fn path_mentions_curve(path: &Path, curve: &str) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    file_name
        .to_string_lossy()
        .to_lowercase()
        .replace('-', "_")
        .contains(&curve.to_lowercase())
}
