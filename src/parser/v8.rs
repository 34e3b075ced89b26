//! Parser for V8 text dumps.
//!
//! Handles the output Node.js prints for an uncaught exception:
//!
//! ```text
//! /home/user/testapp/index.js:2
//! nonexistentFunc();
//! ^
//!
//! ReferenceError: nonexistentFunc is not defined
//!     at Object.<anonymous> (/home/user/testapp/index.js:2:1)
//!     at bootstrap_node.js:509:3
//! ```
//!
//! Frame lines become frames in input order. The last header line seen
//! before the first frame names the exception. Everything else is skipped.

use crate::model::{Frame, Stacktrace};
use crate::utils::error::ParseError;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// `at <body>` with optional indentation
static FRAME_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*at(?:\s+(.*?))?\s*$").unwrap());

/// `<file>:<line>:<column>`, file names may contain colons
static LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*):(\d+):(\d+)$").unwrap());

/// `ReferenceError: message`, `TypeError [ERR_CODE]: message`, `Error`
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][\w$.]*)(?:\s\[[^\]]*\])?(?::(?:\s.*)?)?$").unwrap()
});

/// Parse a complete text dump
///
/// **Public** - used by `Stacktrace::parse` and the platform dispatcher
///
/// # Arguments
/// * `input` - Raw dump as printed by the runtime
///
/// # Returns
/// Stacktrace with frames in input order (leaf first). Empty input yields
/// an empty stacktrace.
///
/// # Errors
/// * `ParseError::MalformedFrame` - a frame line is broken
pub fn parse_stacktrace(input: &str) -> Result<Stacktrace, ParseError> {
    let mut exception_name = String::new();
    let mut frames = Vec::new();
    let mut skipped = 0usize;
    // Set once a header matched; message lines that follow it may look like
    // headers too, so only a blank line lets a later header replace it
    let mut header_locked = false;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;

        if let Some(frame) = parse_frame_line(line, line_number)? {
            frames.push(frame);
            continue;
        }

        if line.trim().is_empty() {
            header_locked = false;
            continue;
        }

        // The header always precedes the frames
        if frames.is_empty() && !header_locked {
            if let Some(name) = parse_header_line(line) {
                exception_name = name.to_string();
                header_locked = true;
                continue;
            }
        }

        skipped += 1;
    }

    debug!(
        "Parsed V8 dump: exception '{}', {} frames, {} lines skipped",
        exception_name,
        frames.len(),
        skipped
    );

    Ok(Stacktrace::new(exception_name, frames))
}

/// Parse one line as a frame
///
/// **Public** - also backs `Frame::parse_line`
///
/// # Returns
/// * `Ok(Some(frame))` - the line is a frame line
/// * `Ok(None)` - the line is not a frame line
///
/// # Errors
/// * `ParseError::MalformedFrame` - the line starts like a frame but cannot
///   be parsed; `line_number` is reported back
pub fn parse_frame_line(line: &str, line_number: usize) -> Result<Option<Frame>, ParseError> {
    let Some(caps) = FRAME_LINE_REGEX.captures(line) else {
        return Ok(None);
    };

    let Some(body) = caps.get(1).filter(|m| !m.as_str().is_empty()) else {
        return Err(malformed(
            line_number,
            line.len() + 1,
            "Expected function or location after 'at'",
        ));
    };

    // Node.js appends " {" when the error object has extra properties
    let text = body.as_str();
    let text = text.strip_suffix('{').map(str::trim_end).unwrap_or(text);

    parse_frame_body(text, body.start(), line_number).map(Some)
}

/// Parse the part after `at `
///
/// Forms:
/// * `Object.<anonymous> ([stdin]-wrapper:6:22)`
/// * `bootstrap_node.js:357:29`
/// * `Array.forEach`
fn parse_frame_body(body: &str, offset: usize, line_number: usize) -> Result<Frame, ParseError> {
    if let Some(inner) = body.strip_suffix(')') {
        let open = body
            .find(" (")
            .map(|i| i + 1)
            .or_else(|| body.find('('))
            .ok_or_else(|| {
                malformed(
                    line_number,
                    offset + body.len(),
                    "Opening brace with file information not found",
                )
            })?;

        let function_name = body[..open].trim_end();
        let location = &inner[open + 1..];
        let (file_name, file_line, line_column) =
            parse_location(location, offset + open + 1, line_number)?
                .unwrap_or((location, 0, 0));

        return Ok(Frame::new(function_name, file_name, file_line, line_column));
    }

    match parse_location(body, offset, line_number)? {
        Some((file_name, file_line, line_column)) => {
            Ok(Frame::new("", file_name, file_line, line_column))
        }
        None => Ok(Frame::new(body, "", 0, 0)),
    }
}

/// Split `<file>:<line>:<column>`; `None` when there is no numeric suffix
fn parse_location(
    location: &str,
    offset: usize,
    line_number: usize,
) -> Result<Option<(&str, u32, u32)>, ParseError> {
    let Some(caps) = LOCATION_REGEX.captures(location) else {
        return Ok(None);
    };

    let (Some(file), Some(line), Some(column)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return Ok(None);
    };

    let file_line = line.as_str().parse::<u32>().map_err(|_| {
        malformed(
            line_number,
            offset + line.start() + 1,
            format!("Failed to parse file line '{}'", line.as_str()),
        )
    })?;

    let line_column = column.as_str().parse::<u32>().map_err(|_| {
        malformed(
            line_number,
            offset + column.start() + 1,
            format!("Failed to parse line column '{}'", column.as_str()),
        )
    })?;

    Ok(Some((file.as_str(), file_line, line_column)))
}

/// Exception name of a header line, if the line is one
fn parse_header_line(line: &str) -> Option<&str> {
    HEADER_REGEX
        .captures(line.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn malformed(line: usize, column: usize, reason: impl Into<String>) -> ParseError {
    ParseError::MalformedFrame {
        line,
        column,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame(line: &str) -> Frame {
        parse_frame_line(line, 1).unwrap().unwrap()
    }

    #[test]
    fn test_frame_with_function_and_location() {
        assert_eq!(
            frame("    at Object.<anonymous> ([stdin]-wrapper:6:22)"),
            Frame::new("Object.<anonymous>", "[stdin]-wrapper", 6, 22)
        );
    }

    #[test]
    fn test_frame_location_only() {
        assert_eq!(
            frame("    at bootstrap_node.js:357:29"),
            Frame::new("", "bootstrap_node.js", 357, 29)
        );
    }

    #[test]
    fn test_frame_function_only() {
        assert_eq!(frame("    at Array.forEach"), Frame::new("Array.forEach", "", 0, 0));
    }

    #[test]
    fn test_frame_file_name_with_colons() {
        assert_eq!(
            frame("at Module._compile (node:internal/modules/cjs/loader:1105:14)"),
            Frame::new("Module._compile", "node:internal/modules/cjs/loader", 1105, 14)
        );
        assert_eq!(
            frame("at file:///C:/app/main.mjs:3:9"),
            Frame::new("", "file:///C:/app/main.mjs", 3, 9)
        );
    }

    #[test]
    fn test_frame_location_without_numbers() {
        assert_eq!(
            frame("    at async Promise.all (index 0)"),
            Frame::new("async Promise.all", "index 0", 0, 0)
        );
    }

    #[test]
    fn test_frame_eval_origin() {
        assert_eq!(
            frame("    at eval (eval at run (/srv/app.js:10:5), <anonymous>:1:1)"),
            Frame::new("eval", "eval at run (/srv/app.js:10:5), <anonymous>", 1, 1)
        );
    }

    #[test]
    fn test_frame_with_trailing_brace() {
        assert_eq!(
            frame("    at async main (/srv/app/src/index.js:8:3) {"),
            Frame::new("async main", "/srv/app/src/index.js", 8, 3)
        );
    }

    #[test]
    fn test_not_a_frame() {
        assert_eq!(parse_frame_line("ReferenceError: boom", 1).unwrap(), None);
        assert_eq!(parse_frame_line("attach: foo", 1).unwrap(), None);
        assert_eq!(parse_frame_line("", 1).unwrap(), None);
    }

    #[test]
    fn test_frame_missing_opening_brace() {
        let err = parse_frame_line("    at foo bar.js:1:2)", 7).unwrap_err();
        match err {
            ParseError::MalformedFrame { line, reason, .. } => {
                assert_eq!(line, 7);
                assert!(reason.contains("Opening brace"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_frame_empty_body() {
        assert!(matches!(
            parse_frame_line("    at   ", 3),
            Err(ParseError::MalformedFrame { line: 3, .. })
        ));
    }

    #[test]
    fn test_frame_line_number_overflow() {
        let err = parse_frame_line("at f (a.js:99999999999:1)", 2).unwrap_err();
        match err {
            ParseError::MalformedFrame { line, column, reason } => {
                assert_eq!(line, 2);
                assert_eq!(column, 12);
                assert!(reason.contains("file line"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            parse_header_line("ReferenceError: nonexistentFunc is not defined"),
            Some("ReferenceError")
        );
        assert_eq!(
            parse_header_line("TypeError [ERR_INVALID_ARG_TYPE]: The \"path\" argument"),
            Some("TypeError")
        );
        assert_eq!(parse_header_line("Error"), Some("Error"));
        assert_eq!(parse_header_line("/home/user/testapp/index.js:2"), None);
        assert_eq!(parse_header_line("nonexistentFunc();"), None);
        assert_eq!(parse_header_line("^"), None);
    }

    #[test]
    fn test_parse_stacktrace_skips_source_excerpt() {
        let input = "/home/user/testapp/index.js:2\n\
                     nonexistentFunc();\n\
                     ^\n\
                     \n\
                     ReferenceError: nonexistentFunc is not defined\n    \
                     at Object.<anonymous> (/home/user/testapp/index.js:2:1)\n    \
                     at bootstrap_node.js:509:3\n";

        let trace = parse_stacktrace(input).unwrap();
        assert_eq!(trace.exception_name(), "ReferenceError");
        assert_eq!(trace.frames().len(), 2);
        assert_eq!(trace.frames()[1].file_line(), 509);
    }

    #[test]
    fn test_parse_stacktrace_keeps_header_over_message_lines() {
        let input = "Error: Command failed: git status\n\
                     fatal: not a git repository\n\
                     \n    \
                     at checkExecSyncError (node:child_process:841:11)\n";

        let trace = parse_stacktrace(input).unwrap();
        assert_eq!(trace.exception_name(), "Error");
        assert_eq!(trace.frames().len(), 1);
    }

    #[test]
    fn test_parse_stacktrace_ignores_trailer() {
        let input = "Error: boom\n    at f (a.js:1:1)\n\nNode.js v18.12.0\n";
        let trace = parse_stacktrace(input).unwrap();
        assert_eq!(trace.exception_name(), "Error");
        assert_eq!(trace.frames().len(), 1);
    }

    #[test]
    fn test_parse_empty_input() {
        let trace = parse_stacktrace("").unwrap();
        assert_eq!(trace.exception_name(), "");
        assert!(trace.frames().is_empty());
    }

    #[test]
    fn test_parse_reports_line_number() {
        let input = "Error: boom\n    at f (a.js:1:1)\n    at g b.js:2:2)\n";
        assert!(matches!(
            parse_stacktrace(input),
            Err(ParseError::MalformedFrame { line: 3, .. })
        ));
    }
}
