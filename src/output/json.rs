//! JSON stacktrace output writer.
//!
//! Serializes stacktraces to the report schema and writes them to files.

use crate::model::Stacktrace;
use crate::parser::schema::StacktraceRecord;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serialize a stacktrace to compact JSON
///
/// **Public** - used by `Stacktrace::to_json`
pub fn stacktrace_to_json(trace: &Stacktrace) -> Result<String, OutputError> {
    let record = StacktraceRecord::from(trace);
    serde_json::to_string(&record).map_err(OutputError::SerializationFailed)
}

/// Write a stacktrace to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `trace` - Stacktrace to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_stacktrace(trace: &Stacktrace, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing stacktrace to: {}", output_path.display());

    validate_output_path(output_path)?;

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
    let writer = BufWriter::new(file);

    let record = StacktraceRecord::from(trace);
    serde_json::to_writer_pretty(writer, &record).map_err(OutputError::SerializationFailed)?;

    info!(
        "Stacktrace written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a stacktrace from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::ParseFailed` - JSON parse error
pub fn read_stacktrace(input_path: impl AsRef<Path>) -> Result<Stacktrace, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading stacktrace from: {}", input_path.display());

    let content = std::fs::read_to_string(input_path).map_err(OutputError::WriteFailed)?;
    let trace = Stacktrace::from_json(&content)?;

    debug!(
        "Stacktrace loaded: exception '{}', {} frames",
        trace.exception_name(),
        trace.frames().len()
    );

    Ok(trace)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
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
