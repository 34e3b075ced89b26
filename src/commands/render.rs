//! Show and convert command implementations.

use crate::commands::fingerprint::validate_input;
use crate::commands::models::{ConvertArgs, ShowArgs};
use crate::commands::utils::load_stacktrace;
use crate::output::write_stacktrace;
use anyhow::{Context, Result};
use log::info;

/// Execute the show command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Full text rendering, or the short text when `args.short` is set
pub fn execute_show(args: &ShowArgs) -> Result<String> {
    validate_input(&args.input)?;

    let trace = load_stacktrace(&args.input)?;
    let text = match args.short {
        Some(max_frames) => trace.to_short_text(max_frames),
        None => trace.to_text(),
    };

    Ok(text)
}

/// Execute the convert command: any supported input to a JSON report
///
/// **Public** - main entry point called from main.rs
pub fn execute_convert(args: &ConvertArgs) -> Result<()> {
    validate_input(&args.input)?;

    let trace = load_stacktrace(&args.input)?;
    write_stacktrace(&trace, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Converted {} to {}", args.input.input.display(), args.output.display());
    Ok(())
}
