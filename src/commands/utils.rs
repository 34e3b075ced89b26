use crate::commands::models::InputArgs;
use crate::model::{JsPlatform, Stacktrace};
use crate::output::read_stacktrace;
use crate::parser::{parse_for_platform, parse_input, InputFormat};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Read and parse the input described by `args`
///
/// A runtime name only applies to text dumps; JSON reports carry their
/// own platform member.
pub fn load_stacktrace(args: &InputArgs) -> Result<Stacktrace> {
    info!("Loading stacktrace from: {}", args.input.display());

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let format = args.format.detect(&content);
    let trace = match (&args.runtime, format) {
        (Some(runtime), InputFormat::Text) => {
            let platform = JsPlatform::from_runtime(runtime, args.runtime_version.as_deref())?;
            debug!("Using platform {}", platform);
            parse_for_platform(platform, &content)?
        }
        _ => parse_input(&content, format)?,
    };

    info!("Loaded {}", trace);
    Ok(trace)
}

/// Validate a stacktrace JSON file
pub fn validate_trace_file(file_path: PathBuf) -> Result<()> {
    println!("Validating stacktrace: {}", file_path.display());

    let trace = read_stacktrace(&file_path)?;

    println!("✓ Valid stacktrace JSON");
    println!("  Exception: {}", trace.exception_name());
    println!("  Frames: {}", trace.frames().len());
    if let Some(platform) = trace.platform() {
        println!("  Platform: {}", platform);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("JS Crash Trace v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Normalization and duplicate-detection hashing for JavaScript crash stacktraces.");
}
