//! Aggregation of raw samples into per-operation series.
//!
//! This module transforms a batch of raw benchmark samples into:
//! - Size-ordered series per canonical operation
//! - Optional dispersion figures per size
//! - Batch summary statistics

pub mod metrics;
pub mod series;
pub mod series_builder;

// Re-export main types and functions
pub use metrics::{dispersion_ns, population_stddev, summarize, AggregateSummary};
pub use series::{Measurement, Series, SeriesMap};
pub use series_builder::{aggregate, aggregate_with, AggregateOptions, Aggregation};
