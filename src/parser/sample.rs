//! Raw benchmark samples as delivered by harness adapters.

use serde::{Deserialize, Serialize};

/// One benchmark measurement, before classification or unit conversion
///
/// The time unit is kept as the harness printed it; it is only
/// validated when the sample is aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Benchmark name as printed by the harness
    pub name: String,

    /// Input size reported next to the name, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<u64>,

    /// Reported time
    pub time_value: f64,

    /// Unit label of `time_value` (ns, µs, ms, s)
    pub time_unit: String,

    /// Number of operations `time_value` covers, when it is an aggregate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u64>,

    /// Per-iteration measurements, used for the dispersion figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<IterationTrace>,
}

/// Raw per-iteration measurements of a sample
///
/// `measured_values[i]` is the total time spent over `iteration_counts[i]`
/// iterations, in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationTrace {
    pub unit: String,
    pub measured_values: Vec<f64>,
    pub iteration_counts: Vec<f64>,
}

impl RawSample {
    /// Create a sample with just a name and a timing
    pub fn new(name: impl Into<String>, time_value: f64, time_unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_hint: None,
            time_value,
            time_unit: time_unit.into(),
            repetitions: None,
            iterations: None,
        }
    }

    pub fn with_size_hint(mut self, size: u64) -> Self {
        self.size_hint = Some(size);
        self
    }

    pub fn with_repetitions(mut self, repetitions: u64) -> Self {
        self.repetitions = Some(repetitions);
        self
    }

    pub fn with_iterations(mut self, iterations: IterationTrace) -> Self {
        self.iterations = Some(iterations);
        self
    }
}

impl IterationTrace {
    /// Average time per iteration for every measurement, in `unit`
    ///
    /// Measurements with a zero iteration count are dropped.
    pub fn per_iteration(&self) -> impl Iterator<Item = f64> + '_ {
        self.measured_values
            .iter()
            .zip(&self.iteration_counts)
            .filter(|(_, count)| **count > 0.0)
            .map(|(value, count)| value / count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_iteration_skips_empty_counts() {
        let trace = IterationTrace {
            unit: "ns".to_string(),
            measured_values: vec![100.0, 50.0, 300.0],
            iteration_counts: vec![10.0, 0.0, 20.0],
        };

        let averages: Vec<f64> = trace.per_iteration().collect();
        assert_eq!(averages, vec![10.0, 15.0]);
    }

    #[test]
    fn test_deserialize_minimal_sample() {
        let sample: RawSample = serde_json::from_str(
            r#"{"name": "msm/G1/16", "time_value": 1.5, "time_unit": "ms"}"#,
        )
        .unwrap();

        assert_eq!(sample, RawSample::new("msm/G1/16", 1.5, "ms"));
    }
}
