//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components; main.rs only prints.

pub mod fingerprint;
pub mod models;
pub mod render;
pub mod utils;

// Re-export main command functions
pub use fingerprint::{execute_hash, validate_input};
pub use models::{ConvertArgs, HashArgs, HashReport, InputArgs, ShowArgs};
pub use render::{execute_convert, execute_show};
pub use utils::{display_version, load_stacktrace, validate_trace_file};
