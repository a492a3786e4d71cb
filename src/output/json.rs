//! JSON cost document writer and reader.
//!
//! Writes CostDocument values to JSON files with proper formatting.

use super::document::CostDocument;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a cost document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `document` - Document to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let document = export(&build_all(&series)?);
/// write_document(&document, "models.json")?;
/// ```
pub fn write_document(
    document: &CostDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing cost document to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Cost document written successfully ({} operations, {} bytes)",
        document.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write a cost document as pretty JSON to any writer (e.g. stdout)
pub fn write_document_to<W: Write>(document: &CostDocument, mut writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, document).map_err(OutputError::SerializationFailed)?;
    writeln!(writer).map_err(OutputError::WriteFailed)?;
    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a cost document from a JSON file
///
/// **Public** - used by validate/predict and tests
///
/// # Errors
/// * `OutputError::ReadFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_document(input_path: impl AsRef<Path>) -> Result<CostDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading cost document from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;

    let document: CostDocument = serde_json::from_reader(BufReader::new(file))
        .map_err(OutputError::SerializationFailed)?;

    debug!("Cost document loaded: {} operations", document.len());

    Ok(document)
}
