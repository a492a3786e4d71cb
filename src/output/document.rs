//! Cost document: the exported form of a model map.
//!
//! The document is a JSON object keyed by operation id. Each entry is
//! self-contained:
//! - `{"kind": "scale", "time_ns": ..., "size": ...}` or
//!   `{"kind": "piecewise", "segments": [{"range": [lo, hi], "coeffs": [...]}], "extrapolate": "clamp-nearest-segment"}`
//! - `evaluator`: JavaScript source of the model as a function of `n`
//! - optional `range`/`results`/`stddev` arrays with the measured samples

use super::expression::evaluator_source;
use crate::aggregator::SeriesMap;
use crate::classifier::OperationId;
use crate::model::{CostModel, ModelMap};
use crate::utils::error::OutputError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exported description of one operation's model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    #[serde(flatten)]
    pub model: CostModel,

    pub evaluator: String,

    /// Measured sizes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Vec<u64>>,

    /// Measured times in nanoseconds, aligned with `range`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<f64>>,

    /// Standard deviations in nanoseconds, aligned with `range`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stddev: Option<Vec<f64>>,
}

impl ModelEntry {
    pub fn new(model: CostModel) -> Self {
        let evaluator = evaluator_source(&model);
        Self {
            model,
            evaluator,
            range: None,
            results: None,
            stddev: None,
        }
    }
}

/// Mapping from operation id to exported model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostDocument {
    pub models: BTreeMap<OperationId, ModelEntry>,
}

/// Export a model map
///
/// **Public** - main entry point for export
pub fn export(models: &ModelMap) -> CostDocument {
    CostDocument {
        models: models
            .iter()
            .map(|(operation, model)| (operation.clone(), ModelEntry::new(model.clone())))
            .collect(),
    }
}

/// Export a model map together with the measured samples behind it
///
/// **Public** - used when the raw arrays are requested
pub fn export_with_samples(models: &ModelMap, series: &SeriesMap) -> CostDocument {
    let mut document = export(models);

    for (operation, entry) in document.models.iter_mut() {
        if let Some(series) = series.get(operation) {
            entry.range = Some(series.sizes());
            entry.results = Some(series.times());
            entry.stddev = series.stddevs();
        }
    }

    document
}

impl CostDocument {
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn get(&self, operation: &str) -> Option<&ModelEntry> {
        self.models.get(operation)
    }

    /// Predicted time of `operation` at size `n`, if the operation is present
    pub fn predict(&self, operation: &str, n: u64) -> Option<f64> {
        self.get(operation).map(|entry| entry.model.predict(n))
    }

    /// Recover the model map, validating every model
    ///
    /// # Errors
    /// * `OutputError::InvalidModel` - a model violates the cost model invariants
    pub fn import(&self) -> Result<ModelMap, OutputError> {
        self.models
            .iter()
            .map(|(operation, entry)| {
                validate_model(operation, &entry.model)?;
                Ok((operation.clone(), entry.model.clone()))
            })
            .collect()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, OutputError> {
        serde_json::to_string_pretty(self).map_err(OutputError::SerializationFailed)
    }

    /// Parse a document from JSON
    pub fn from_json_str(json: &str) -> Result<Self, OutputError> {
        serde_json::from_str(json).map_err(OutputError::SerializationFailed)
    }
}

/// Check the invariants of an imported model
///
/// **Public** - used on import and by the validate command
///
/// Scaling models need a positive finite time at a positive size. Piecewise models need at
/// least one segment, each with `lo < hi` and finite coefficients, and
/// consecutive segments must share their seam.
pub fn validate_model(operation: &OperationId, model: &CostModel) -> Result<(), OutputError> {
    let invalid = |reason: String| OutputError::InvalidModel {
        operation: operation.to_string(),
        reason,
    };

    match model {
        CostModel::Scale { time_ns, size } => {
            if !time_ns.is_finite() || *time_ns <= 0.0 {
                return Err(invalid(format!("time {} is not positive", time_ns)));
            }
            if *size == 0 {
                return Err(invalid("scaling anchor size is zero".to_string()));
            }
        }
        CostModel::Piecewise { segments, .. } => {
            if segments.is_empty() {
                return Err(invalid("piecewise model has no segments".to_string()));
            }
            for segment in segments {
                if segment.lo() >= segment.hi() {
                    return Err(invalid(format!("empty segment range {:?}", segment.range)));
                }
                if !segment.coeffs.iter().all(|c| c.is_finite()) {
                    return Err(invalid(format!("non-finite coefficients {:?}", segment.coeffs)));
                }
            }
            for pair in segments.windows(2) {
                if pair[0].hi() != pair[1].lo() {
                    return Err(invalid(format!(
                        "segments {:?} and {:?} are not adjacent",
                        pair[0].range, pair[1].range
                    )));
                }
            }
        }
    }

    Ok(())
}
