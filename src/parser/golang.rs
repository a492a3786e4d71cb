//! Reader for `go test -bench` text output.
//!
//! Result lines look like:
//! `BenchmarkMultiExpG1/64_points-8   	    1203	    985424 ns/op`
//!
//! The reported time is already per operation, so no repetition count
//! is attached to the sample.

use super::sample::RawSample;
use crate::utils::config::GO_BENCH_PREFIX;
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::io::BufRead;

/// Read all benchmark samples from Go benchmark output
///
/// **Public** - entry point for the Go adapter
///
/// Lines that are not benchmark results (headers, `PASS`, `ok ...`) are ignored.
pub fn parse_go_bench_output<R: BufRead>(reader: R) -> Result<Vec<RawSample>, ParseError> {
    let mut samples = Vec::new();

    for line in reader.lines() {
        if let Some(sample) = parse_go_bench_line(&line?) {
            samples.push(sample);
        }
    }

    debug!("Read {} Go benchmark lines", samples.len());
    Ok(samples)
}

/// Parse a single Go benchmark line
///
/// **Public** - exposed for testing
///
/// Returns `None` if the line is not a benchmark result.
pub fn parse_go_bench_line(line: &str) -> Option<RawSample> {
    let rest = line.strip_prefix(GO_BENCH_PREFIX)?;

    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    let name = fields[0];

    // Iteration count; a line without one is not a result line
    if fields[1].parse::<u64>().is_err() {
        return None;
    }

    let value = match fields[2].parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!("Skipping Go benchmark '{}': bad time value: {}", name, e);
            return None;
        }
    };

    // "ns/op" -> "ns"
    let unit = fields[3].split('/').next().unwrap_or(fields[3]);

    Some(RawSample::new(name, value, unit))
}
