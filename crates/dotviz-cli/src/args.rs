//! Command-line argument definitions for the dotviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Path that stands for standard input or standard output.
pub const STDIO_PATH: &str = "-";

/// Command-line arguments for the dotviz renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input DOT file, or `-` for standard input
    #[arg(help = "Path to the input file (`-` reads standard input)")]
    pub input: String,

    /// Path to the output file, or `-` for standard output
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format; only `svg` is produced
    #[arg(short, long, default_value = "svg")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
