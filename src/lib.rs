//! JS Crash Trace
//!
//! Normalizes JavaScript (V8 / Node.js) crash stacktraces into a canonical
//! model that can be compared, rendered, round-tripped through JSON and
//! fingerprinted for duplicate detection.
//!
//! ## Getting Started
//!
//! ```ignore
//! use js_crash_trace::{HashFlags, Stacktrace};
//!
//! let trace = Stacktrace::parse(&std::fs::read_to_string("crash.txt")?)?;
//! println!("{}", trace);
//! println!("bthash:  {}", trace.get_bthash(HashFlags::Normal));
//! println!("duphash: {}", trace.get_duphash(HashFlags::Normal, 3));
//! ```
//!
//! The `js-crash-trace` binary wraps the same operations for files.

pub mod commands;
pub mod fingerprint;
pub mod model;
pub mod output;
pub mod parser;
pub mod utils;

pub use fingerprint::HashFlags;
pub use model::{Frame, FrameKind, JsEngine, JsPlatform, JsRuntime, Stacktrace, StacktraceKind};
pub use utils::error::{ModelError, OutputError, ParseError};
