//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod fit;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use fit::{execute_fit, validate_args};
pub use models::{FitArgs, TimeDisplay};
pub use utils::{display_schema, display_version, predict_from_file, validate_document_file};
