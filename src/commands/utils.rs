use super::models::TimeDisplay;
use crate::output::{read_document, validate_model, CostDocument};
use crate::utils::config::{CLAMP_NEAREST_SEGMENT, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a cost document file
pub fn validate_document_file(file_path: &Path) -> Result<CostDocument> {
    println!("Validating cost document: {}", file_path.display());

    let document = read_document(file_path)?;

    for (operation, entry) in &document.models {
        validate_model(operation, &entry.model)?;
    }

    let scaling = document
        .models
        .values()
        .filter(|entry| entry.model.kind() == "scale")
        .count();

    println!("✓ Valid cost document");
    println!("  Operations: {}", document.len());
    println!("  Scaling models: {}", scaling);
    println!("  Piecewise models: {}", document.len() - scaling);

    Ok(document)
}

/// Evaluate one operation of a cost document at the given sizes
///
/// Returns the predicted times in nanoseconds, in the order of `sizes`.
pub fn predict_from_file(file_path: &Path, operation: &str, sizes: &[u64]) -> Result<Vec<f64>> {
    let document = read_document(file_path)?;
    let entry = document
        .get(operation)
        .with_context(|| format!("Operation '{}' not found in {}", operation, file_path.display()))?;

    let predictions: Vec<f64> = sizes.iter().map(|n| entry.model.predict(*n)).collect();

    for (size, ns) in sizes.iter().zip(&predictions) {
        let note = if entry.model.is_extrapolated(*size) { " (extrapolated)" } else { "" };
        println!("{}({}) = {} [{} ns]{}", operation, size, TimeDisplay::format(*ns), ns, note);
    }

    Ok(predictions)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Cost Document Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Document Structure:");
        println!("  <operation_id>: object     - One entry per operation (e.g. 'msm_G1')");
        println!("    kind: string             - 'scale' or 'piecewise'");
        println!("    time_ns: number          - [scale] Time measured at size");
        println!("    size: integer            - [scale] Measured size (default 1)");
        println!("    segments: array          - [piecewise] Adjacent interpolation segments");
        println!("      range: [lo, hi]        - Sizes covered by the segment");
        println!("      coeffs: [t_lo, t_hi]   - Times at lo and hi (Lagrange basis)");
        println!("    extrapolate: string      - [piecewise] '{}'", CLAMP_NEAREST_SEGMENT);
        println!("    evaluator: string        - JavaScript function of n");
        println!("    range: array?            - Measured sizes");
        println!("    results: array?          - Measured times (ns)");
        println!("    stddev: array?           - Standard deviations (ns)");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("zkcost v{}", env!("CARGO_PKG_VERSION"));
    println!("Cost Document Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Benchmark classification and cost-model synthesis for cryptographic primitives.");
}
