//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a text dump or a JSON report
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),

    #[error("Malformed frame at line {line}, column {column}: {reason}")]
    MalformedFrame {
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("Unknown JavaScript platform: {0}")]
    UnknownPlatform(String),
}

/// Errors raised when mutating model values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid argument for {field}: {value} is not a valid unsigned 32-bit value")]
    InvalidArgument { field: &'static str, value: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to parse stacktrace: {0}")]
    ParseFailed(#[from] ParseError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
