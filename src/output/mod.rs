//! Export of cost models.
//!
//! This module handles:
//! - Building the cost document from a model map
//! - Rendering per-model evaluator source
//! - Writing and reading documents as JSON

pub mod document;
pub mod expression;
pub mod json;

// Re-export main functions
pub use document::{export, export_with_samples, validate_model, CostDocument, ModelEntry};
pub use expression::evaluator_source;
pub use json::{read_document, write_document, write_document_to};
