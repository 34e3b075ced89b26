use crate::fingerprint::HashFlags;
use crate::parser::InputFormat;
use crate::utils::config::DEFAULT_DUPHASH_FRAMES;
use std::path::PathBuf;

/// Where and how to read a stacktrace
///
/// **Public** - shared by every command that loads a trace
#[derive(Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to the text dump or JSON report
    pub input: PathBuf,

    /// Input encoding
    pub format: InputFormat,

    /// Runtime that produced a text dump (e.g., "Node.js")
    pub runtime: Option<String>,

    /// Runtime version, only used in error messages
    pub runtime_version: Option<String>,
}

/// Arguments for the hash command
#[derive(Debug, Clone)]
pub struct HashArgs {
    pub input: InputArgs,

    /// Number of leading frames covered by the duphash
    pub frames: usize,

    /// Digest or normalized plain text
    pub flags: HashFlags,
}

impl Default for HashArgs {
    fn default() -> Self {
        Self {
            input: InputArgs::default(),
            frames: DEFAULT_DUPHASH_FRAMES,
            flags: HashFlags::Normal,
        }
    }
}

/// Arguments for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    pub input: InputArgs,

    /// Print the short text limited to this many frames instead of the full text
    pub short: Option<usize>,
}

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: InputArgs,

    /// Output path for the JSON report
    pub output: PathBuf,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: InputArgs::default(),
            output: PathBuf::from("stacktrace.json"),
        }
    }
}

/// Both fingerprints of one trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub bthash: String,
    pub duphash: String,
}
