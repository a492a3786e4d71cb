//! Fit cost models to measured series.

use super::cost_model::{CostModel, Extrapolation, Segment};
use crate::aggregator::{Series, SeriesMap};
use crate::classifier::OperationId;
use crate::utils::error::ModelError;
use log::debug;
use std::collections::BTreeMap;

/// Cost model of every operation in a batch
pub type ModelMap = BTreeMap<OperationId, CostModel>;

/// Build the cost model of one series
///
/// **Public** - main entry point for fitting
///
/// - One point at size `s` with time `t`: scaling model anchored at
///   `(s, t)`, i.e. rate `t / s` with `predict(s) == t`
/// - `k >= 2` points: `k - 1` linear segments through consecutive points,
///   extrapolated with the boundary segments
///
/// # Errors
/// * `ModelError::EmptySeries` - the series has no points; the aggregator
///   never produces such a series
pub fn build(series: &Series) -> Result<CostModel, ModelError> {
    let points: Vec<(u64, f64)> = series.points().collect();

    match points.as_slice() {
        [] => Err(ModelError::EmptySeries),
        [(size, time_ns)] => Ok(CostModel::scale(*time_ns, *size)),
        _ => Ok(CostModel::Piecewise {
            segments: points
                .windows(2)
                .map(|pair| Segment::through(pair[0], pair[1]))
                .collect(),
            extrapolate: Extrapolation::ClampNearestSegment,
        }),
    }
}

/// Build a cost model for every series
///
/// **Public** - used by the pipeline and the fit command
pub fn build_all(series_map: &SeriesMap) -> Result<ModelMap, ModelError> {
    series_map
        .iter()
        .map(|(operation, series)| {
            let model = build(series)?;
            debug!(
                "Built {} model for {} from {} points",
                model.kind(),
                operation,
                series.len()
            );
            Ok((operation.clone(), model))
        })
        .collect()
}
