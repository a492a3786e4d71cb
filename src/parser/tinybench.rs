//! Reader for tinybench table exports (JavaScript harnesses).
//!
//! Each line holds a JSON array of task rows; times are always nanoseconds.

use super::sample::RawSample;
use crate::utils::error::ParseError;
use log::debug;
use serde::Deserialize;
use std::io::BufRead;

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "Task Name")]
    task_name: String,

    #[serde(rename = "Average Time (ns)")]
    average_time_ns: f64,
}

/// Read all benchmark samples from tinybench output
///
/// **Public** - entry point for the tinybench adapter
pub fn parse_tinybench_output<R: BufRead>(reader: R) -> Result<Vec<RawSample>, ParseError> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let rows: Vec<TaskRow> = serde_json::from_str(&line)
            .map_err(|source| ParseError::JsonError { line: index + 1, source })?;

        samples.extend(
            rows.into_iter()
                .map(|row| RawSample::new(row.task_name, row.average_time_ns, "ns")),
        );
    }

    debug!("Read {} tinybench task rows", samples.len());
    Ok(samples)
}
