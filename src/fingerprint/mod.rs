//! Duplicate-detection fingerprints.
//!
//! Two fingerprints are computed from a normalized text form of a trace:
//! - bthash: exception name plus every frame (full context)
//! - duphash: exception name plus only the leading frames, with file
//!   names reduced to their base name
//!
//! Line and column numbers never take part, so rebuilding a script with
//! shifted lines keeps both hashes stable.
//!
//! # Example
//! ```ignore
//! use js_crash_trace::fingerprint::HashFlags;
//!
//! let trace = Stacktrace::parse(&dump)?;
//! let bug_id = trace.get_bthash(HashFlags::Normal);
//! let debug_text = trace.get_duphash(HashFlags::NoHash, 3);
//! ```

mod digest;
mod normalizer;

use crate::model::StacktraceKind;
use log::debug;

pub use digest::sha1_hex;
pub use normalizer::{bthash_text, duphash_text};

/// Output mode of the hash functions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashFlags {
    /// Lowercase hex SHA-1 digest of the normalized text
    #[default]
    Normal,
    /// Return the normalized text itself (debugging aid)
    NoHash,
}

/// Bug tracker hash of a trace
///
/// **Public** - used by `Stacktrace::get_bthash`
pub fn bthash<T: StacktraceKind>(trace: &T, flags: HashFlags) -> String {
    let text = bthash_text(trace);
    debug!(
        "Computed bthash text for {} trace ({} bytes)",
        trace.language(),
        text.len()
    );
    finish(text, flags)
}

/// Duplicate hash over the first `frames` frames of a trace
///
/// **Public** - used by `Stacktrace::get_duphash`
pub fn duphash<T: StacktraceKind>(trace: &T, flags: HashFlags, frames: usize) -> String {
    let text = duphash_text(trace, frames);
    debug!(
        "Computed duphash text for {} trace over {} of {} frames",
        trace.language(),
        frames.min(trace.frames().len()),
        trace.frames().len()
    );
    finish(text, flags)
}

fn finish(text: String, flags: HashFlags) -> String {
    match flags {
        HashFlags::Normal => sha1_hex(&text),
        HashFlags::NoHash => text,
    }
}
