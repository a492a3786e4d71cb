//! End-to-end pipeline: raw samples in, cost document out.

use crate::aggregator::{aggregate_with, AggregateOptions, Aggregation};
use crate::classifier::ProbeRegistry;
use crate::model::{build_all, ModelMap};
use crate::output::{export, export_with_samples, CostDocument};
use crate::parser::RawSample;
use crate::utils::error::PipelineError;

/// Everything produced by one pipeline run
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub aggregation: Aggregation,
    pub models: ModelMap,
    pub document: CostDocument,
}

/// Classify, aggregate, fit and export one batch of samples
///
/// **Public** - single-call entry point for library users
///
/// # Arguments
/// * `samples` - Fully materialized batch from a harness adapter
/// * `registry` - Probes used to classify sample names
/// * `options` - Aggregation settings
/// * `include_samples` - Attach measured range/results arrays to the document
pub fn fit_samples(
    samples: &[RawSample],
    registry: &ProbeRegistry,
    options: AggregateOptions,
    include_samples: bool,
) -> Result<FitOutcome, PipelineError> {
    let aggregation = aggregate_with(samples, registry, options)?;
    let models = build_all(&aggregation.series)?;

    let document = if include_samples {
        export_with_samples(&models, &aggregation.series)
    } else {
        export(&models)
    };

    Ok(FitOutcome {
        aggregation,
        models,
        document,
    })
}
