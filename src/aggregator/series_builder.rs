//! Build per-operation series from a batch of raw samples.
//!
//! For each sample, in order:
//! 1. Normalize its time to nanoseconds (unknown units abort the batch)
//! 2. Classify its name (unclassifiable samples are skipped)
//! 3. Amortize over the repetition count and check the time is positive
//! 4. Insert `(size, time)` into the operation's series, last write wins

use super::metrics::dispersion_ns;
use super::series::{Measurement, SeriesMap};
use crate::classifier::ProbeRegistry;
use crate::parser::{normalize, RawSample};
use crate::utils::config::UNIT_SIZE;
use crate::utils::error::{AggregateError, ClassifyError, UnitError};
use log::{debug, info, warn};

/// Aggregation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Compute the per-size standard deviation from iteration traces
    pub with_stddev: bool,
}

impl AggregateOptions {
    pub fn with_stddev(mut self, with_stddev: bool) -> Self {
        self.with_stddev = with_stddev;
        self
    }
}

/// Outcome of aggregating one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// One non-empty series per classified operation
    pub series: SeriesMap,

    /// Number of samples that made it into a series
    pub classified: usize,

    /// Names of samples no probe could classify
    pub skipped: Vec<String>,

    /// Number of samples that replaced an earlier sample of the same size
    pub overwritten: usize,
}

/// Aggregate samples into per-operation series
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `AggregateError::UnknownUnit` - a sample's time unit is not recognized
/// * `AggregateError::ZeroRepetitions` - a sample claims zero repetitions
/// * `AggregateError::InvalidTime` - a time is not a positive finite number
pub fn aggregate(
    samples: &[RawSample],
    registry: &ProbeRegistry,
) -> Result<SeriesMap, AggregateError> {
    aggregate_with(samples, registry, AggregateOptions::default()).map(|a| a.series)
}

/// Aggregate samples, returning the series along with batch bookkeeping
///
/// **Public** - used by the fit command for its summary
pub fn aggregate_with(
    samples: &[RawSample],
    registry: &ProbeRegistry,
    options: AggregateOptions,
) -> Result<Aggregation, AggregateError> {
    debug!("Aggregating {} raw samples", samples.len());

    let mut aggregation = Aggregation::default();

    for sample in samples {
        let time_ns = normalized_time_ns(sample)?;

        let classification = match registry.classify(&sample.name) {
            Ok(c) => c,
            Err(ClassifyError::Unclassified(name)) => {
                debug!("Skipping unclassified sample '{}'", name);
                aggregation.skipped.push(name);
                continue;
            }
        };

        let size = classification.size.or(sample.size_hint).unwrap_or(UNIT_SIZE);
        if size == 0 {
            warn!("Skipping sample '{}': size must be positive", sample.name);
            aggregation.skipped.push(sample.name.clone());
            continue;
        }

        let time_ns = amortize(sample, time_ns)?;

        let stddev_ns = if options.with_stddev {
            dispersion_ns(sample, time_ns)?
        } else {
            None
        };

        let operation = classification.operation;
        if !operation.is_known() {
            warn!("Operation '{}' from '{}' is not a known operation id", operation, sample.name);
        }
        let measurement = Measurement::new(time_ns).with_stddev(stddev_ns);
        let series = aggregation.series.entry(operation.clone()).or_default();

        if let Some(previous) = series.insert(size, measurement) {
            debug!(
                "Overwriting {} at size {}: {} ns -> {} ns",
                operation, size, previous.time_ns, time_ns
            );
            aggregation.overwritten += 1;
        }
        aggregation.classified += 1;
    }

    info!(
        "Aggregated {} samples into {} operations ({} skipped)",
        aggregation.classified,
        aggregation.series.len(),
        aggregation.skipped.len()
    );

    Ok(aggregation)
}

/// Reported time of a sample, in nanoseconds
///
/// **Private** - internal helper for aggregate_with
fn normalized_time_ns(sample: &RawSample) -> Result<f64, AggregateError> {
    normalize(sample.time_value, &sample.time_unit).map_err(|UnitError::UnknownUnit(unit)| {
        AggregateError::UnknownUnit {
            sample: sample.name.clone(),
            unit,
        }
    })
}

/// Per-operation time of a classified sample, in nanoseconds
///
/// **Private** - internal helper for aggregate_with
fn amortize(sample: &RawSample, time_ns: f64) -> Result<f64, AggregateError> {
    let time_ns = match sample.repetitions {
        Some(0) => {
            return Err(AggregateError::ZeroRepetitions {
                sample: sample.name.clone(),
            })
        }
        Some(repetitions) => time_ns / repetitions as f64,
        None => time_ns,
    };

    if !time_ns.is_finite() || time_ns <= 0.0 {
        return Err(AggregateError::InvalidTime {
            sample: sample.name.clone(),
            value: sample.time_value,
        });
    }

    Ok(time_ns)
}
