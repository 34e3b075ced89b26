//! Output renderers and writers.
//!
//! - `text`: short and full human-readable text
//! - `json`: JSON serialization and file output

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_stacktrace, stacktrace_to_json, write_stacktrace};
pub use text::{full_text, short_text};
