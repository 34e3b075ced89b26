//! The JavaScript stacktrace: exception type plus ordered frames.
//!
//! A stacktrace is the hub of the crate. Parsers build it, the renderer
//! and the fingerprint normalizer consume it.

use crate::fingerprint::{bthash, duphash, HashFlags};
use crate::model::frame::Frame;
use crate::model::kind::StacktraceKind;
use crate::model::platform::JsPlatform;
use crate::output::{json, text};
use crate::parser;
use crate::utils::config::{DEFAULT_DUPHASH_FRAMES, LANGUAGE_NAME};
use crate::utils::error::{OutputError, ParseError};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A parsed JavaScript exception trace
///
/// Equality and `Hash` only look at the exception name and the frames.
/// The platform is metadata and never affects identity.
#[derive(Debug, Clone, Default)]
pub struct Stacktrace {
    exception_name: String,
    frames: Vec<Frame>,
    platform: Option<JsPlatform>,
}

impl Stacktrace {
    pub fn new(exception_name: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            exception_name: exception_name.into(),
            frames,
            platform: None,
        }
    }

    /// Parse a V8 text dump (e.g., Node.js uncaught exception output)
    ///
    /// **Public** - main entry point for text input
    ///
    /// # Errors
    /// * `ParseError::MalformedFrame` - an `at ...` line cannot be parsed
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parser::v8::parse_stacktrace(input)
    }

    /// Parse a JSON report
    ///
    /// **Public** - main entry point for JSON input
    ///
    /// # Errors
    /// * `ParseError::JsonError` - invalid JSON or wrongly typed member
    /// * `ParseError::InvalidFormat` - root is not an object
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        parser::json::parse_stacktrace_json(input)
    }

    /// Serialize to the JSON report format
    pub fn to_json(&self) -> Result<String, OutputError> {
        json::stacktrace_to_json(self)
    }

    pub fn exception_name(&self) -> &str {
        &self.exception_name
    }

    pub fn set_exception_name(&mut self, exception_name: impl Into<String>) {
        self.exception_name = exception_name.into();
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Mutable access to the owned frame sequence (truncate, push, reorder)
    pub fn frames_mut(&mut self) -> &mut Vec<Frame> {
        &mut self.frames
    }

    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn platform(&self) -> Option<JsPlatform> {
        self.platform
    }

    pub fn set_platform(&mut self, platform: Option<JsPlatform>) {
        self.platform = platform;
    }

    /// Deep copy with its own frame sequence
    pub fn dup(&self) -> Stacktrace {
        self.clone()
    }

    /// Field-wise comparison (exception name and frames)
    pub fn equals(&self, other: &Stacktrace) -> bool {
        self == other
    }

    /// One line per frame for at most `max_frames` frames
    pub fn to_short_text(&self, max_frames: usize) -> String {
        text::short_text(self, max_frames)
    }

    /// Exception name followed by every frame, one per line
    pub fn to_text(&self) -> String {
        text::full_text(self)
    }

    /// Bug tracker hash over the whole trace
    pub fn get_bthash(&self, flags: HashFlags) -> String {
        bthash(self, flags)
    }

    /// Duplicate hash over the first `frames` frames
    pub fn get_duphash(&self, flags: HashFlags, frames: usize) -> String {
        duphash(self, flags, frames)
    }

    /// Duplicate hash over the default number of frames
    pub fn get_default_duphash(&self) -> String {
        duphash(self, HashFlags::Normal, DEFAULT_DUPHASH_FRAMES)
    }
}

impl StacktraceKind for Stacktrace {
    type Frame = Frame;

    fn language(&self) -> &'static str {
        LANGUAGE_NAME
    }

    fn exception_name(&self) -> &str {
        &self.exception_name
    }

    fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl PartialEq for Stacktrace {
    fn eq(&self, other: &Self) -> bool {
        self.exception_name == other.exception_name && self.frames == other.frames
    }
}

impl Eq for Stacktrace {}

impl Hash for Stacktrace {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exception_name.hash(state);
        self.frames.hash(state);
    }
}

impl fmt::Display for Stacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stacktrace with {} frames",
            LANGUAGE_NAME,
            self.frames.len()
        )
    }
}
