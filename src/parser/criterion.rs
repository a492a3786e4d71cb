//! Reader for cargo-criterion JSON message output.
//!
//! cargo-criterion prints one JSON object per line. Only
//! `benchmark-complete` messages carry an `id`; everything else is skipped.

use super::sample::{IterationTrace, RawSample};
use crate::utils::error::ParseError;
use log::debug;
use serde::Deserialize;
use std::io::BufRead;

/// One line of cargo-criterion output
#[derive(Debug, Deserialize)]
struct CriterionMessage {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    mean: Option<Estimate>,

    /// Unit of `measured_values`
    #[serde(default)]
    unit: Option<String>,

    #[serde(default)]
    iteration_count: Vec<f64>,

    #[serde(default)]
    measured_values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct Estimate {
    estimate: f64,
    unit: String,
}

/// Read all benchmark samples from cargo-criterion output
///
/// **Public** - entry point for the criterion adapter
///
/// # Errors
/// * `ParseError::JsonError` - a non-blank line is not valid JSON
/// * `ParseError::InvalidFormat` - a benchmark message has no mean estimate
/// * `ParseError::IoError` - the reader failed
pub fn parse_criterion_output<R: BufRead>(reader: R) -> Result<Vec<RawSample>, ParseError> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(sample) = parse_criterion_line(index + 1, &line)? {
            samples.push(sample);
        }
    }

    debug!("Read {} criterion benchmark records", samples.len());
    Ok(samples)
}

/// Parse one criterion message line
///
/// Returns `Ok(None)` for messages that are not benchmark results.
pub fn parse_criterion_line(line_no: usize, line: &str) -> Result<Option<RawSample>, ParseError> {
    let message: CriterionMessage = serde_json::from_str(line)
        .map_err(|source| ParseError::JsonError { line: line_no, source })?;

    let Some(id) = message.id else {
        return Ok(None);
    };

    let mean = message.mean.ok_or_else(|| ParseError::InvalidFormat {
        line: line_no,
        reason: format!("benchmark '{}' has no mean estimate", id),
    })?;

    let mut sample = RawSample::new(id, mean.estimate, mean.unit);

    if !message.measured_values.is_empty()
        && message.measured_values.len() == message.iteration_count.len()
    {
        sample = sample.with_iterations(IterationTrace {
            unit: message.unit.unwrap_or_else(|| "ns".to_string()),
            measured_values: message.measured_values,
            iteration_counts: message.iteration_count,
        });
    }

    Ok(Some(sample))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_non_benchmark_messages() {
        let line = r#"{"reason": "group-complete", "group_name": "msm"}"#;
        assert!(parse_criterion_line(1, line).unwrap().is_none());
    }

    #[test]
    fn test_missing_mean_is_an_error() {
        let line = r#"{"reason": "benchmark-complete", "id": "msm/G1/16"}"#;
        let err = parse_criterion_line(7, line).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat { line: 7, .. }));
    }

    #[test]
    fn test_mismatched_iteration_arrays_are_dropped() {
        let line = r#"{"id": "add_ff", "mean": {"estimate": 3.5, "unit": "ns"},
                       "unit": "ns", "iteration_count": [1, 2], "measured_values": [4.0]}"#;
        let sample = parse_criterion_line(1, line).unwrap().unwrap();
        assert!(sample.iterations.is_none());
    }
}
