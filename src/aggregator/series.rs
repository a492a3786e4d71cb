//! Per-operation measurement series.

use crate::classifier::OperationId;
use std::collections::btree_map::{self, BTreeMap};

/// Measured time at one size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub time_ns: f64,

    /// Population standard deviation of per-iteration times, if computed
    pub stddev_ns: Option<f64>,
}

impl Measurement {
    pub fn new(time_ns: f64) -> Self {
        Self {
            time_ns,
            stddev_ns: None,
        }
    }

    pub fn with_stddev(mut self, stddev_ns: Option<f64>) -> Self {
        self.stddev_ns = stddev_ns;
        self
    }
}

/// Size-ordered measurements of one operation
///
/// Sizes are unique; inserting an existing size replaces its measurement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: BTreeMap<u64, Measurement>,
}

/// Series of every operation seen in a batch
pub type SeriesMap = BTreeMap<OperationId, Series>;

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a measurement, returning the one it replaced
    pub fn insert(&mut self, size: u64, measurement: Measurement) -> Option<Measurement> {
        self.points.insert(size, measurement)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, size: u64) -> Option<&Measurement> {
        self.points.get(&size)
    }

    /// `(size, time_ns)` pairs in increasing size order
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.points.iter().map(|(size, m)| (*size, m.time_ns))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, u64, Measurement> {
        self.points.iter()
    }

    pub fn sizes(&self) -> Vec<u64> {
        self.points.keys().copied().collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.values().map(|m| m.time_ns).collect()
    }

    /// Standard deviations aligned with `sizes()`
    ///
    /// `None` unless every point carries one.
    pub fn stddevs(&self) -> Option<Vec<f64>> {
        self.points.values().map(|m| m.stddev_ns).collect()
    }
}

impl FromIterator<(u64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (size, time_ns) in iter {
            series.insert(size, Measurement::new(time_ns));
        }
        series
    }
}
