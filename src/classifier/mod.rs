//! Benchmark name classification.
//!
//! Maps heterogeneous benchmark names onto canonical `(operation, size)`
//! pairs through an ordered probe registry:
//! - `operation` - canonical operation ids
//! - `probe` - probes, the registry and first-match-wins evaluation
//! - `conventions` - built-in registries per harness family

pub mod conventions;
pub mod operation;
pub mod probe;

use crate::utils::error::ClassifyError;

// Re-export main types
pub use conventions::{gnark_probes, registry_for, zkalc_probes};
pub use operation::OperationId;
pub use probe::{Anchoring, Classification, Extractor, Probe, ProbeRegistry};

/// Classify `name` into its canonical operation and size
///
/// Size-less operations are reported with size 1.
pub fn classify(registry: &ProbeRegistry, name: &str) -> Result<(OperationId, u64), ClassifyError> {
    let classification = registry.classify(name)?;
    let size = classification.size();
    Ok((classification.operation, size))
}
