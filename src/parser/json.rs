//! JSON report parser.
//!
//! Accepts the schema in [`super::schema`]. Trailing commas before a closing
//! `}` or `]` are tolerated since hand-written and older reports carry them.

use super::schema::StacktraceRecord;
use crate::model::Stacktrace;
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;

/// Parse a JSON report into a stacktrace
///
/// **Public** - used by `Stacktrace::from_json`
///
/// # Arguments
/// * `input` - JSON text; empty or whitespace-only text yields an empty trace
///
/// # Errors
/// * `ParseError::JsonError` - invalid JSON or a member of the wrong type
/// * `ParseError::InvalidFormat` - the root value is not an object
pub fn parse_stacktrace_json(input: &str) -> Result<Stacktrace, ParseError> {
    let cleaned = strip_trailing_commas(input);
    if cleaned.trim().is_empty() {
        debug!("Empty JSON input, returning empty stacktrace");
        return Ok(Stacktrace::default());
    }

    let root: Value = serde_json::from_str(&cleaned)?;
    parse_stacktrace_value(root)
}

/// Build a stacktrace from an already parsed JSON value
///
/// **Public** - for callers embedding the trace in a larger document
pub fn parse_stacktrace_value(root: Value) -> Result<Stacktrace, ParseError> {
    if !root.is_object() {
        return Err(ParseError::InvalidFormat(format!(
            "Stacktrace must be a JSON object, found {}",
            json_type_name(&root)
        )));
    }

    let record: StacktraceRecord = serde_json::from_value(root)?;
    debug!(
        "Parsed JSON stacktrace: exception '{}', {} frames",
        record.exception_name,
        record.frames.len()
    );

    Ok(record.into())
}

/// Remove commas that directly precede `}` or `]`, outside string literals
///
/// **Private** - leniency pass before handing the text to serde_json
///
/// A comma is only dropped when it follows a complete value, so `[,]` and
/// `{,}` stay malformed.
fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, c) in input.char_indices() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = input[index + 1..].trim_start().chars().next();
                let closes = matches!(next, Some('}') | Some(']'));
                if !(closes && ends_with_value(&out)) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Whether the text so far ends with a string, number, literal or container
fn ends_with_value(text: &str) -> bool {
    matches!(
        text.trim_end().chars().last(),
        Some('"' | ']' | '}' | 'e' | 'l') | Some('0'..='9')
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
