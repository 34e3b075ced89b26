//! Normalized text forms fed into the digests.
//!
//! Format (one field per line, every line newline-terminated):
//!
//! ```text
//! ReferenceError
//! Object.<anonymous> /home/user/testapp/index.js
//! Module._compile module.js
//! ```
//!
//! Empty or whitespace-only names become `<unknown>`. Frame lines come from
//! the frame type's [`FrameKind`] hooks.

use crate::model::{FrameKind, StacktraceKind};
use crate::utils::config::UNKNOWN_PLACEHOLDER;

/// Normalized text of the whole trace
pub fn bthash_text<T: StacktraceKind>(trace: &T) -> String {
    let mut out = header(trace);
    for frame in trace.frames() {
        frame.append_bthash_text(&mut out);
    }
    out
}

/// Normalized text of the first `frames` frames
pub fn duphash_text<T: StacktraceKind>(trace: &T, frames: usize) -> String {
    let mut out = header(trace);
    for frame in trace.frames().iter().take(frames) {
        frame.append_duphash_text(&mut out);
    }
    out
}

fn header<T: StacktraceKind>(trace: &T) -> String {
    let name = trace.exception_name().trim();
    let mut out = String::new();
    out.push_str(if name.is_empty() { UNKNOWN_PLACEHOLDER } else { name });
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, Stacktrace};
    use pretty_assertions::assert_eq;

    fn sample() -> Stacktrace {
        Stacktrace::new(
            "ReferenceError",
            vec![
                Frame::new("Object.<anonymous>", "/home/user/testapp/index.js", 2, 1),
                Frame::new("Module._compile", "module.js", 570, 32),
                Frame::new("", "bootstrap_node.js", 509, 3),
            ],
        )
    }

    #[test]
    fn test_bthash_text() {
        assert_eq!(
            bthash_text(&sample()),
            "ReferenceError\n\
             Object.<anonymous> /home/user/testapp/index.js\n\
             Module._compile module.js\n\
             <unknown> bootstrap_node.js\n"
        );
    }

    #[test]
    fn test_duphash_text_truncates_and_strips_paths() {
        assert_eq!(
            duphash_text(&sample(), 2),
            "ReferenceError\nObject.<anonymous> index.js\nModule._compile module.js\n"
        );
    }

    #[test]
    fn test_unknown_exception_name() {
        let trace = Stacktrace::new("  ", vec![]);
        assert_eq!(bthash_text(&trace), "<unknown>\n");
        assert_eq!(duphash_text(&trace, 3), "<unknown>\n");
    }
}
