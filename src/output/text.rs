//! Human-readable renderings.

use crate::model::StacktraceKind;
use std::fmt::Write;

/// Compact rendering, one numbered line per frame
///
/// Only the first `max_frames` frames are printed and no marker is added
/// for the omitted ones. Empty when `max_frames` is 0 or there are no frames.
///
/// ```text
/// #1 at Object.<anonymous> (/home/user/testapp/index.js:2:1)
/// #2 at Module._compile (module.js:570:32)
/// ```
pub fn short_text<T: StacktraceKind>(trace: &T, max_frames: usize) -> String {
    let mut out = String::new();
    for (index, frame) in trace.frames().iter().take(max_frames).enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "#{} {}", index + 1, frame);
    }
    out
}

/// Full rendering: exception name, then every frame indented like V8 prints it
pub fn full_text<T: StacktraceKind>(trace: &T) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", trace.exception_name());
    for frame in trace.frames() {
        let _ = writeln!(out, "    {}", frame);
    }
    out
}
