use crate::parser::Harness;
use crate::utils::config::DEFAULT_OUTPUT_PATH;
use std::path::PathBuf;

/// Arguments for the fit command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FitArgs {
    /// Harness output to read (stdin if None)
    pub input: Option<PathBuf>,

    /// Harness that produced the input
    pub harness: Harness,

    /// Keep only benchmarks whose name mentions this curve
    pub curve: Option<String>,

    /// Output path for the cost document (stdout if None)
    pub output: Option<PathBuf>,

    /// Compute per-size standard deviations
    pub with_stddev: bool,

    /// Attach measured range/results arrays to the document
    pub include_samples: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for FitArgs {
    fn default() -> Self {
        Self {
            input: None,
            harness: Harness::Criterion,
            curve: None,
            output: Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
            with_stddev: false,
            include_samples: true,
            print_summary: false,
        }
    }
}

/// Human-readable rendering of nanosecond durations
pub struct TimeDisplay;

impl TimeDisplay {
    /// Format `ns` with the largest unit that keeps the value >= 1
    pub fn format(ns: f64) -> String {
        let (value, unit) = if ns >= 1e9 {
            (ns / 1e9, "s")
        } else if ns >= 1e6 {
            (ns / 1e6, "ms")
        } else if ns >= 1e3 {
            (ns / 1e3, "µs")
        } else {
            (ns, "ns")
        };
        format!("{:.3} {}", value, unit)
    }
}
