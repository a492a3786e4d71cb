//! Cost models: functions from input size to predicted time.
//!
//! Two shapes exist:
//! - `Scale` - a pure per-unit rate, anchored at the measured size:
//!   `time(n) = time_ns * (n / size)`
//! - `Piecewise` - adjacent linear segments through consecutive measured
//!   sizes, extrapolated with the first/last segment outside the measured range

use crate::utils::config::UNIT_SIZE;
use serde::{Deserialize, Serialize};

/// Rule for sizes outside the measured range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extrapolation {
    /// Evaluate the first segment below the range, the last one above it
    #[serde(rename = "clamp-nearest-segment")]
    ClampNearestSegment,
}

/// Interpolating polynomial between two consecutive measured sizes
///
/// `coeffs` are expressed in the Lagrange basis over `range`: they are the
/// times at `range[0]` and `range[1]`. The polynomial is evaluated as
/// `coeffs[0] * (1 - w) + coeffs[1] * w` with `w = (n - lo) / (hi - lo)`,
/// which reproduces both endpoint times exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub range: [u64; 2],
    pub coeffs: [f64; 2],
}

impl Segment {
    /// Segment through `(lo, t_lo)` and `(hi, t_hi)`
    pub fn through(lo: (u64, f64), hi: (u64, f64)) -> Self {
        Self {
            range: [lo.0, hi.0],
            coeffs: [lo.1, hi.1],
        }
    }

    pub fn lo(&self) -> u64 {
        self.range[0]
    }

    pub fn hi(&self) -> u64 {
        self.range[1]
    }

    /// Whether `n` lies within the closed range of this segment
    pub fn covers(&self, n: u64) -> bool {
        self.lo() <= n && n <= self.hi()
    }

    /// Evaluate the segment polynomial at `n` (inside or outside its range)
    pub fn evaluate(&self, n: f64) -> f64 {
        let lo = self.lo() as f64;
        let hi = self.hi() as f64;
        let w = (n - lo) / (hi - lo);
        self.coeffs[0] * (1.0 - w) + self.coeffs[1] * w
    }

}

/// Predicted execution time as a function of input size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CostModel {
    /// Time `time_ns` measured at `size`, scaled linearly.
    ///
    /// The rate is kept as its anchor point rather than as `time_ns / size`
    /// so that predicting at `size` returns `time_ns` bit-exactly.
    #[serde(rename = "scale")]
    Scale {
        time_ns: f64,
        #[serde(default = "unit_size")]
        size: u64,
    },

    /// Ordered, adjacent segments covering `[first.lo, last.hi]`
    Piecewise {
        segments: Vec<Segment>,
        extrapolate: Extrapolation,
    },
}

fn unit_size() -> u64 {
    UNIT_SIZE
}

impl CostModel {
    /// Scaling model through the single measurement `(size, time_ns)`
    pub fn scale(time_ns: f64, size: u64) -> Self {
        Self::Scale { time_ns, size }
    }

    /// Scaling model from a per-unit rate
    pub fn per_unit(rate_ns_per_unit: f64) -> Self {
        Self::scale(rate_ns_per_unit, UNIT_SIZE)
    }

    /// Time per unit of size, for scaling models
    pub fn rate_ns_per_unit(&self) -> Option<f64> {
        match self {
            Self::Scale { time_ns, size } => Some(time_ns / *size as f64),
            Self::Piecewise { .. } => None,
        }
    }

    /// Predicted time in nanoseconds at size `n`
    ///
    /// **Public** - main evaluation entry point
    ///
    /// Sizes on a seam between two segments use the lower segment.
    /// A piecewise model without segments predicts NaN.
    pub fn predict(&self, n: u64) -> f64 {
        match self {
            Self::Scale { time_ns, size } => time_ns * (n as f64 / *size as f64),
            Self::Piecewise { .. } => self
                .segment_for(n)
                .map_or(f64::NAN, |segment| segment.evaluate(n as f64)),
        }
    }

    /// Segment used to evaluate size `n`, for piecewise models
    pub fn segment_for(&self, n: u64) -> Option<&Segment> {
        match self {
            Self::Scale { .. } => None,
            Self::Piecewise { segments, extrapolate } => match extrapolate {
                // The first segment whose upper end reaches `n`: this picks
                // the lower segment on seams and the first one below the range.
                Extrapolation::ClampNearestSegment => segments
                    .iter()
                    .find(|s| n <= s.hi())
                    .or_else(|| segments.last()),
            },
        }
    }

    /// Whether `n` lies outside the measured range
    pub fn is_extrapolated(&self, n: u64) -> bool {
        match self {
            Self::Scale { .. } => false,
            Self::Piecewise { segments, .. } => !segments.iter().any(|s| s.covers(n)),
        }
    }

    /// Short name of the model kind, as exported
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scale { .. } => "scale",
            Self::Piecewise { .. } => "piecewise",
        }
    }
}

/// Predicted time in nanoseconds of `model` at size `n`
pub fn predict(model: &CostModel, n: u64) -> f64 {
    model.predict(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segments() -> CostModel {
        CostModel::Piecewise {
            segments: vec![
                Segment::through((16, 100.0), (64, 300.0)),
                Segment::through((64, 300.0), (256, 1200.0)),
            ],
            extrapolate: Extrapolation::ClampNearestSegment,
        }
    }

    #[test]
    fn test_segment_endpoints_are_exact() {
        let segment = Segment::through((3, 0.1), (7, 0.7));
        assert_eq!(segment.evaluate(3.0), 0.1);
        assert_eq!(segment.evaluate(7.0), 0.7);
    }

    #[test]
    fn test_seam_uses_lower_segment() {
        let model = two_segments();
        assert_eq!(model.segment_for(64).unwrap().range, [16, 64]);
        assert_eq!(model.segment_for(65).unwrap().range, [64, 256]);
    }

    #[test]
    fn test_extrapolation_segments() {
        let model = two_segments();
        assert_eq!(model.segment_for(1).unwrap().range, [16, 64]);
        assert_eq!(model.segment_for(10_000).unwrap().range, [64, 256]);
        assert!(model.is_extrapolated(1));
        assert!(!model.is_extrapolated(100));
    }

    #[test]
    fn test_scale_predict() {
        let model = CostModel::per_unit(500.0);
        assert_eq!(model.predict(1), 500.0);
        assert_eq!(model.predict(10), 5000.0);
        assert!(model.segment_for(1).is_none());
    }

    #[test]
    fn test_scale_is_exact_at_anchor() {
        let model = CostModel::scale(0.1, 11);
        assert_eq!(model.predict(11), 0.1);
        assert_eq!(model.predict(22), 0.2);
        assert_eq!(model.rate_ns_per_unit(), Some(0.1 / 11.0));
    }

    #[test]
    fn test_scale_size_defaults_to_unit() {
        let model: CostModel = serde_json::from_str(r#"{"kind": "scale", "time_ns": 3.5}"#).unwrap();
        assert_eq!(model, CostModel::per_unit(3.5));
    }

    #[test]
    fn test_empty_piecewise_predicts_nan() {
        let model = CostModel::Piecewise {
            segments: vec![],
            extrapolate: Extrapolation::ClampNearestSegment,
        };
        assert!(model.predict(4).is_nan());
    }
}
