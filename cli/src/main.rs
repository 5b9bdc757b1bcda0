//! mycopy - copy the contents of one file over another
//!
//! Validates its two arguments, then overwrites the destination with the
//! exact bytes of the source.

use clap::Parser;
use mycopy::{CopyOptions, Result, check_arg_count, copy_file_with_stats, validate_pair};
use std::ffi::OsString;
use std::io;
use std::iter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Number of paths the command takes: source and destination.
const REQUIRED_ARGS: usize = 2;

/// Environment variable holding the diagnostic log filter (stderr only).
const LOG_ENV: &str = "MYCOPY_LOG";

/// mycopy - Copy the contents of one file to another
///
/// Overwrites DESTINATION with the contents of SOURCE. Both files must
/// already exist and must be given as two different paths.
///
/// Usage:
///   mycopy SOURCE DESTINATION
///
/// There are no flags: `-h`, `--version` and `--` are paths like any other.
#[derive(Parser, Debug)]
#[command(
    name = "mycopy",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// SOURCE and DESTINATION file paths
    #[arg(
        value_name = "PATH",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    paths: Vec<PathBuf>,
}

impl Args {
    /// Parse the process arguments, taking every one of them as a path.
    ///
    /// An escape `--` is inserted ahead of the user's arguments, so clap
    /// never interprets an argument itself, including a literal `--`.
    fn parse_paths() -> Self {
        let mut argv = std::env::args_os();
        let bin = argv.next().unwrap_or_else(|| OsString::from("mycopy"));
        Self::parse_from(
            iter::once(bin)
                .chain(iter::once(OsString::from("--")))
                .chain(argv),
        )
    }
}

fn main() {
    init_logging();

    if let Err(error) = run() {
        tracing::error!(code = %error.code(), "{error}");
        println!("ERROR: {error}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<()> {
    let args = Args::parse_paths();

    check_arg_count(args.paths.len(), REQUIRED_ARGS)?;
    let [src, dst] = args.paths.as_slice() else {
        unreachable!("argument count checked above");
    };

    let options = CopyOptions::default();
    validate_pair(src, dst, &options)?;

    println!(
        "Copying contents from file '{}' to '{}'.",
        src.display(),
        dst.display()
    );

    let stats = copy_file_with_stats(src, dst, &options)?;
    tracing::info!(
        bytes = stats.bytes_copied,
        duration = ?stats.duration,
        "copy completed"
    );

    Ok(())
}
