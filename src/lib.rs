//! zkcost
//!
//! Turns raw micro-benchmark output from heterogeneous harnesses into a
//! portable cost model: for each cryptographic primitive, a function from
//! input size to predicted execution time.
//!
//! Data flows strictly through:
//! - `parser` - harness readers and unit normalization
//! - `classifier` - ordered probes mapping benchmark names to `(operation, size)`
//! - `aggregator` - per-operation size-ordered series
//! - `model` - scaling and piecewise-linear cost models
//! - `output` - the exported cost document
//!
//! ## Getting Started
//!
//! ```bash
//! cargo bench --message-format=json | zkcost fit --format criterion --curve bls12_381
//! zkcost predict --file models.json --op msm_G1 --size 100000
//! ```

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use aggregator::{aggregate, AggregateOptions, Series, SeriesMap};
pub use classifier::{classify, OperationId, ProbeRegistry};
pub use model::{build, predict, CostModel, ModelMap};
pub use output::{export, CostDocument};
pub use parser::{normalize, RawSample};
pub use pipeline::fit_samples;
