//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while converting a time value to nanoseconds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown time unit '{0}' (expected one of ns, µs, ms, s)")]
    UnknownUnit(String),
}

/// Errors that can occur while classifying a benchmark name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("No probe matched benchmark name: {0}")]
    Unclassified(String),
}

/// Errors that can occur while registering a probe
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid probe pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors that abort aggregation of a batch
///
/// Every variant names the offending raw sample so the batch diagnostic
/// can point at it directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Sample '{sample}' has unknown time unit '{unit}'")]
    UnknownUnit { sample: String, unit: String },

    #[error("Sample '{sample}' reports zero repetitions")]
    ZeroRepetitions { sample: String },

    #[error("Sample '{sample}' has invalid time value {value}")]
    InvalidTime { sample: String, value: f64 },
}

/// Errors that can occur while building a cost model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Cannot build a cost model from an empty series")]
    EmptySeries,
}

/// Errors that can occur while reading harness output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Line {line}: JSON deserialization failed: {source}")]
    JsonError {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: invalid benchmark record: {reason}")]
    InvalidFormat { line: usize, reason: String },

    #[error("Failed to read benchmark output: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during document output and import
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid cost model for '{operation}': {reason}")]
    InvalidModel { operation: String, reason: String },
}

/// Errors from running the whole classification and fitting pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
