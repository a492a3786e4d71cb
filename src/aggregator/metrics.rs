//! Dispersion figures and batch summaries.
//!
//! The dispersion is diagnostic only: it is exported next to the measured
//! times but never weights the fitted model.

use super::series_builder::Aggregation;
use crate::parser::{RawSample, TimeUnit};
use crate::utils::error::{AggregateError, UnitError};

/// Population standard deviation of a sample's per-repetition times
///
/// **Public** - used by the aggregator when dispersion is requested
///
/// # Arguments
/// * `sample` - Sample carrying an iteration trace
/// * `mean_ns` - Amortized mean time of the sample, in nanoseconds
///
/// # Returns
/// `None` if the sample has no usable iteration trace
pub fn dispersion_ns(sample: &RawSample, mean_ns: f64) -> Result<Option<f64>, AggregateError> {
    let Some(trace) = &sample.iterations else {
        return Ok(None);
    };

    let unit: TimeUnit = trace.unit.parse().map_err(|e: UnitError| match e {
        UnitError::UnknownUnit(unit) => AggregateError::UnknownUnit {
            sample: sample.name.clone(),
            unit,
        },
    })?;

    let repetitions = sample.repetitions.unwrap_or(1).max(1) as f64;
    let per_repetition: Vec<f64> = trace
        .per_iteration()
        .map(|t| t * unit.nanos_per_unit() / repetitions)
        .collect();

    if per_repetition.is_empty() {
        return Ok(None);
    }

    Ok(Some(population_stddev(&per_repetition, mean_ns)))
}

/// Population standard deviation of `values` around `mean`
pub fn population_stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Summary statistics of an aggregated batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    pub operations: usize,
    pub points: usize,
    pub classified: usize,
    pub skipped: usize,
    pub overwritten: usize,
    /// Operations backed by a single measured size
    pub single_point_operations: usize,
}

impl AggregateSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the fit summary
    pub fn summary(&self) -> String {
        format!(
            "Operations: {} | Points: {} | Classified: {} | Skipped: {} | Overwritten: {} | Scaling models: {}",
            self.operations,
            self.points,
            self.classified,
            self.skipped,
            self.overwritten,
            self.single_point_operations
        )
    }
}

/// Summarize an aggregation
pub fn summarize(aggregation: &Aggregation) -> AggregateSummary {
    AggregateSummary {
        operations: aggregation.series.len(),
        points: aggregation.series.values().map(|s| s.len()).sum(),
        classified: aggregation.classified,
        skipped: aggregation.skipped.len(),
        overwritten: aggregation.overwritten,
        single_point_operations: aggregation.series.values().filter(|s| s.len() == 1).count(),
    }
}
