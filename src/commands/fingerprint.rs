//! Hash command implementation.
//!
//! Loads a trace and computes its bthash and duphash.

use crate::commands::models::{HashArgs, HashReport, InputArgs};
use crate::commands::utils::load_stacktrace;
use anyhow::Result;
use log::info;

/// Execute the hash command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Both fingerprints; printing is left to the caller
pub fn execute_hash(args: &HashArgs) -> Result<HashReport> {
    validate_input(&args.input)?;

    let trace = load_stacktrace(&args.input)?;
    let report = HashReport {
        bthash: trace.get_bthash(args.flags),
        duphash: trace.get_duphash(args.flags, args.frames),
    };

    info!("Computed fingerprints for {}", trace);
    Ok(report)
}

/// Reject obviously unusable input settings
///
/// **Public** - shared with the show and convert commands
pub fn validate_input(args: &InputArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    if args.runtime_version.is_some() && args.runtime.is_none() {
        anyhow::bail!("A runtime version requires a runtime name");
    }

    Ok(())
}
