//! Cost-model synthesis.
//!
//! Converts per-operation series into scaling or piecewise-linear
//! cost models that can be evaluated at any size.

pub mod builder;
pub mod cost_model;

// Re-export main types and functions
pub use builder::{build, build_all, ModelMap};
pub use cost_model::{predict, CostModel, Extrapolation, Segment};
