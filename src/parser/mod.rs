//! Stacktrace parsers.
//!
//! This module handles:
//! - V8 text dumps (Node.js uncaught exception output)
//! - JSON reports
//! - Dispatch by platform and input format detection

pub mod json;
pub mod schema;
pub mod v8;

use crate::model::{JsEngine, JsPlatform, Stacktrace};
use crate::utils::error::ParseError;
use clap::ValueEnum;
use log::debug;

// Re-export main entry points
pub use json::{parse_stacktrace_json, parse_stacktrace_value};
pub use schema::{FrameRecord, StacktraceRecord};
pub use v8::{parse_frame_line, parse_stacktrace};

/// Encoding of raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Detect from the first non-whitespace character
    #[default]
    Auto,
    /// Engine text dump
    Text,
    /// JSON report
    Json,
}

impl InputFormat {
    /// Resolve `Auto` against actual input
    pub fn detect(self, input: &str) -> InputFormat {
        match self {
            InputFormat::Auto if input.trim_start().starts_with('{') => InputFormat::Json,
            InputFormat::Auto => InputFormat::Text,
            other => other,
        }
    }
}

/// Parse input in the given format
///
/// **Public** - entry point for the command layer
pub fn parse_input(input: &str, format: InputFormat) -> Result<Stacktrace, ParseError> {
    let format = format.detect(input);
    debug!("Parsing input as {:?}", format);

    match format {
        InputFormat::Json => parse_stacktrace_json(input),
        _ => parse_stacktrace(input),
    }
}

/// Parse a text dump written by the given platform's engine
///
/// The platform is stamped on the result.
pub fn parse_for_platform(platform: JsPlatform, input: &str) -> Result<Stacktrace, ParseError> {
    let mut trace = match platform.engine {
        JsEngine::V8 => v8::parse_stacktrace(input)?,
    };

    trace.set_platform(Some(platform));
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::Auto.detect("  {\"a\":1}"), InputFormat::Json);
        assert_eq!(InputFormat::Auto.detect("Error: x"), InputFormat::Text);
        assert_eq!(InputFormat::Text.detect("{"), InputFormat::Text);
    }

    #[test]
    fn test_parse_for_platform_stamps_platform() {
        let platform = JsPlatform::from_runtime("Node.js", None).unwrap();
        let trace = parse_for_platform(platform, "Error: x\n    at f (a.js:1:2)\n").unwrap();
        assert_eq!(trace.platform(), Some(platform));
        assert_eq!(trace.frames().len(), 1);
    }
}
