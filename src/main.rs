//! JS Crash Trace CLI
//!
//! Parses JavaScript crash stacktraces and prints their fingerprints,
//! renderings or JSON form.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use js_crash_trace::commands::{
    display_version, execute_convert, execute_hash, execute_show, validate_trace_file,
    ConvertArgs, HashArgs, InputArgs, ShowArgs,
};
use js_crash_trace::parser::InputFormat;
use js_crash_trace::utils::config::{DEFAULT_DUPHASH_FRAMES, DEFAULT_SHORT_TEXT_FRAMES};
use js_crash_trace::HashFlags;

/// JS Crash Trace - normalization and hashing for JavaScript crashes
#[derive(Parser, Debug)]
#[command(name = "js-crash-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Input options shared by the trace-reading commands
#[derive(Args, Debug)]
struct InputOpts {
    /// Text dump or JSON report to read
    #[arg(short, long)]
    input: PathBuf,

    /// Input encoding
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Runtime that produced a text dump (e.g., "Node.js")
    #[arg(long, env = "JS_CRASH_TRACE_RUNTIME")]
    runtime: Option<String>,

    /// Runtime version
    #[arg(long)]
    runtime_version: Option<String>,
}

impl From<InputOpts> for InputArgs {
    fn from(opts: InputOpts) -> Self {
        Self {
            input: opts.input,
            format: opts.format,
            runtime: opts.runtime,
            runtime_version: opts.runtime_version,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the bthash and duphash of a trace
    Hash {
        #[command(flatten)]
        input: InputOpts,

        /// Number of leading frames covered by the duphash
        #[arg(long, default_value_t = DEFAULT_DUPHASH_FRAMES)]
        frames: usize,

        /// Print the normalized text instead of digests
        #[arg(long)]
        plain: bool,
    },

    /// Render a trace as text
    Show {
        #[command(flatten)]
        input: InputOpts,

        /// Print the compact one-line-per-frame form, limited to N frames
        #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = DEFAULT_SHORT_TEXT_FRAMES.to_string())]
        short: Option<usize>,
    },

    /// Convert a trace to a JSON report
    Convert {
        #[command(flatten)]
        input: InputOpts,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "stacktrace.json")]
        output: PathBuf,
    },

    /// Validate a stacktrace JSON file
    Validate {
        /// Path to stacktrace JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Hash {
            input,
            frames,
            plain,
        } => {
            let args = HashArgs {
                input: input.into(),
                frames,
                flags: if plain {
                    HashFlags::NoHash
                } else {
                    HashFlags::Normal
                },
            };

            let report = execute_hash(&args)?;
            if plain {
                println!("--- bthash text ---");
                print!("{}", report.bthash);
                println!("--- duphash text ---");
                print!("{}", report.duphash);
            } else {
                println!("bthash:  {}", report.bthash);
                println!("duphash: {}", report.duphash);
            }
        }

        Commands::Show { input, short } => {
            let args = ShowArgs {
                input: input.into(),
                short,
            };

            print!("{}", execute_show(&args)?);
        }

        Commands::Convert { input, output } => {
            let args = ConvertArgs {
                input: input.into(),
                output,
            };

            execute_convert(&args)?;
        }

        Commands::Validate { file } => {
            validate_trace_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
