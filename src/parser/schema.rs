//! JSON report schema.
//!
//! ```json
//! {
//!     "exception_name": "ReferenceError",
//!     "stacktrace": [
//!         { "file_name": "/a/b.js", "function_name": "f", "file_line": 42, "line_column": 24 }
//!     ]
//! }
//! ```
//!
//! Missing or `null` members default to empty strings and zeros. Unknown
//! members are ignored.

use crate::model::{Frame, JsPlatform, Stacktrace};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level stacktrace record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StacktraceRecord {
    /// Exception type (e.g., "ReferenceError")
    #[serde(default, deserialize_with = "null_as_default")]
    pub exception_name: String,

    /// Frames, leaf first
    #[serde(default, rename = "stacktrace", deserialize_with = "null_as_default")]
    pub frames: Vec<FrameRecord>,

    /// Engine/runtime that produced the trace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<JsPlatform>,
}

/// A single frame record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub function_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub file_line: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub line_column: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        Self {
            file_name: frame.file_name().to_string(),
            function_name: frame.function_name().to_string(),
            file_line: frame.file_line(),
            line_column: frame.line_column(),
        }
    }
}

impl From<FrameRecord> for Frame {
    fn from(record: FrameRecord) -> Self {
        Frame::new(
            record.function_name,
            record.file_name,
            record.file_line,
            record.line_column,
        )
    }
}

impl From<&Stacktrace> for StacktraceRecord {
    fn from(trace: &Stacktrace) -> Self {
        Self {
            exception_name: trace.exception_name().to_string(),
            frames: trace.frames().iter().map(FrameRecord::from).collect(),
            platform: trace.platform(),
        }
    }
}

impl From<StacktraceRecord> for Stacktrace {
    fn from(record: StacktraceRecord) -> Self {
        let mut trace = Stacktrace::new(
            record.exception_name,
            record.frames.into_iter().map(Frame::from).collect(),
        );
        trace.set_platform(record.platform);
        trace
    }
}
