//! Evaluator source generation.
//!
//! Every exported model carries a JavaScript arrow function of `n` that
//! performs the same floating-point operations as `CostModel::predict`,
//! so presentation layers can evaluate models without reimplementing them.

use crate::model::{CostModel, Segment};

/// Render the evaluator of `model`
///
/// **Public** - used by the exporter
///
/// Numbers are printed in their shortest round-trip form.
pub fn evaluator_source(model: &CostModel) -> String {
    match model {
        CostModel::Scale { time_ns, size: 1 } => format!("(n) => {:?} * n", time_ns),
        CostModel::Scale { time_ns, size } => format!("(n) => {:?} * (n / {})", time_ns, size),
        CostModel::Piecewise { segments, .. } => format!("(n) => {}", piecewise_body(segments)),
    }
}

/// Nested conditional selecting the segment like `CostModel::segment_for`
///
/// **Private** - internal helper for evaluator_source
fn piecewise_body(segments: &[Segment]) -> String {
    let Some((last, rest)) = segments.split_last() else {
        return "NaN".to_string();
    };

    let mut body = String::new();
    for segment in rest {
        body.push_str(&format!("n <= {} ? {} : ", segment.hi(), segment_source(segment)));
    }
    body.push_str(&segment_source(last));
    body
}

fn segment_source(segment: &Segment) -> String {
    format!(
        "((w) => {:?} * (1 - w) + {:?} * w)((n - {}) / ({} - {}))",
        segment.coeffs[0],
        segment.coeffs[1],
        segment.lo(),
        segment.hi(),
        segment.lo()
    )
}
