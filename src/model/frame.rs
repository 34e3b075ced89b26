//! A single JavaScript stack frame.
//!
//! Frames are plain values: equality, ordering and hashing are field-wise
//! and a frame never knows which stacktrace holds it.

use crate::model::kind::FrameKind;
use crate::parser::v8::parse_frame_line;
use crate::utils::config::{ANONYMOUS_FUNCTION, UNKNOWN_PLACEHOLDER};
use crate::utils::error::{ModelError, ParseError};
use std::cmp::Ordering;
use std::fmt;

/// One entry of a JavaScript stack trace
///
/// Field order matters: the derived `Ord` compares function name first,
/// then file name, line and column.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frame {
    function_name: String,
    file_name: String,
    file_line: u32,
    line_column: u32,
}

impl Frame {
    /// Create a frame from all four fields
    ///
    /// **Public** - constructor
    pub fn new(
        function_name: impl Into<String>,
        file_name: impl Into<String>,
        file_line: u32,
        line_column: u32,
    ) -> Self {
        Self {
            function_name: function_name.into(),
            file_name: file_name.into(),
            file_line,
            line_column,
        }
    }

    /// Parse a single `at ...` line
    ///
    /// Returns `Ok(None)` when the text is not a frame line at all.
    pub fn parse_line(text: &str) -> Result<Option<Self>, ParseError> {
        parse_frame_line(text, 1)
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    pub fn set_function_name(&mut self, function_name: impl Into<String>) {
        self.function_name = function_name.into();
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    pub fn file_line(&self) -> u32 {
        self.file_line
    }

    /// Set the line number
    ///
    /// # Errors
    /// * `ModelError::InvalidArgument` - value is negative or exceeds `u32::MAX`
    pub fn set_file_line<T>(&mut self, file_line: T) -> Result<(), ModelError>
    where
        T: TryInto<u32> + fmt::Display + Copy,
    {
        self.file_line = checked_u32("file_line", file_line)?;
        Ok(())
    }

    pub fn line_column(&self) -> u32 {
        self.line_column
    }

    /// Set the column number
    ///
    /// # Errors
    /// * `ModelError::InvalidArgument` - value is negative or exceeds `u32::MAX`
    pub fn set_line_column<T>(&mut self, line_column: T) -> Result<(), ModelError>
    where
        T: TryInto<u32> + fmt::Display + Copy,
    {
        self.line_column = checked_u32("line_column", line_column)?;
        Ok(())
    }

    /// Field-wise comparison
    pub fn equals(&self, other: &Frame) -> bool {
        self == other
    }

    /// Independent copy of this frame
    pub fn dup(&self) -> Frame {
        self.clone()
    }

    /// Compare frames the way distance metrics expect: line first, then
    /// function and file name. Columns are ignored.
    pub fn cmp_distance(&self, other: &Frame) -> Ordering {
        self.file_line
            .cmp(&other.file_line)
            .then_with(|| self.function_name.cmp(&other.function_name))
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function_name = if self.function_name.is_empty() {
            ANONYMOUS_FUNCTION
        } else {
            &self.function_name
        };

        write!(f, "at {}", function_name)?;

        if !self.file_name.is_empty() {
            write!(
                f,
                " ({}:{}:{})",
                self.file_name, self.file_line, self.line_column
            )?;
        }

        Ok(())
    }
}

impl FrameKind for Frame {
    fn append_bthash_text(&self, out: &mut String) {
        out.push_str(or_unknown(&self.function_name));
        out.push(' ');
        out.push_str(or_unknown(&self.file_name));
        out.push('\n');
    }

    fn append_duphash_text(&self, out: &mut String) {
        out.push_str(or_unknown(&self.function_name));
        out.push(' ');
        out.push_str(or_unknown(base_name(&self.file_name)));
        out.push('\n');
    }
}

/// Trimmed value, or the placeholder when nothing is left
fn or_unknown(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        UNKNOWN_PLACEHOLDER
    } else {
        trimmed
    }
}

/// Final path component; install prefixes differ between machines
fn base_name(path: &str) -> &str {
    let path = path.trim();
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn checked_u32<T>(field: &'static str, value: T) -> Result<u32, ModelError>
where
    T: TryInto<u32> + fmt::Display + Copy,
{
    value.try_into().map_err(|_| ModelError::InvalidArgument {
        field,
        value: value.to_string(),
    })
}
