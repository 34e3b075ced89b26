//! In-memory model of a JavaScript crash report.

pub mod frame;
pub mod kind;
pub mod platform;
pub mod stacktrace;

// Re-export main types
pub use frame::Frame;
pub use kind::{FrameKind, StacktraceKind};
pub use platform::{JsEngine, JsPlatform, JsRuntime};
pub use stacktrace::Stacktrace;
