//! Configuration and constants shared across the crate.

/// Default number of leading frames covered by the duphash
pub const DEFAULT_DUPHASH_FRAMES: usize = 3;

/// Default number of frames printed by the short text rendering (CLI)
pub const DEFAULT_SHORT_TEXT_FRAMES: usize = 6;

/// Placeholder written into normalized hash text for empty fields
pub const UNKNOWN_PLACEHOLDER: &str = "<unknown>";

/// Function name printed for frames without one
pub const ANONYMOUS_FUNCTION: &str = "<anonymous>";

/// Label used in the one-line summary of a stacktrace
pub const LANGUAGE_NAME: &str = "JavaScript";

// Engine and runtime names as they appear in reports
pub const ENGINE_V8: &str = "V8";
pub const RUNTIME_NODEJS: &str = "Node.js";
