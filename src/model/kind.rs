//! Capability traits shared by every report format.
//!
//! Fingerprinting and short text rendering only need what these traits
//! expose, so a Python or Java trace could plug into the same passes by
//! implementing them for its own frame and stacktrace types.

use std::fmt::Display;

/// Per-frame hooks used by the fingerprint normalizer
pub trait FrameKind: Display {
    /// Append this frame's line of bthash input, newline terminated
    fn append_bthash_text(&self, out: &mut String);

    /// Append this frame's line of duphash input, newline terminated
    fn append_duphash_text(&self, out: &mut String);
}

/// A stacktrace of one report format
pub trait StacktraceKind {
    type Frame: FrameKind;

    /// Human-readable language label (e.g., "JavaScript")
    fn language(&self) -> &'static str;

    /// Exception type, empty when unknown
    fn exception_name(&self) -> &str;

    /// Frames, leaf first
    fn frames(&self) -> &[Self::Frame];

    /// The thread that crashed
    ///
    /// Formats without a thread model report the trace itself.
    fn crash_thread(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }
}
