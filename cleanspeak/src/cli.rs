// cleanspeak/src/cli.rs
//! Command-line interface definition for the cleanspeak binary.
//! License: MIT OR APACHE 2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleanspeak",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter profanity out of text, leet-speak included",
    long_about = "Cleanspeak reads text from a file or stdin and rewrites restricted words according to a per-severity action table (mask, placeholder, remove, flag or highlight). Obfuscated spellings such as 'f@ck' or 'fuuuck' are caught as well."
)]
pub struct Cli {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Persist the plain rendering to this file.
    #[arg(long, short = 'o', value_name = "FILE", help = "Also write the plain rendering to a file.")]
    pub output: Option<PathBuf>,

    /// Path to a filter configuration file (YAML or JSON).
    #[arg(long = "config", value_name = "FILE", env = "CLEANSPEAK_CONFIG", help = "Path to a filter configuration file (YAML or JSON).")]
    pub config: Option<PathBuf>,

    /// Do not load the built-in word list.
    #[arg(long = "no-defaults", help = "Do not load the built-in word list.")]
    pub no_defaults: bool,

    /// Always print the plain rendering on stdout.
    #[arg(long, conflicts_with = "console", help = "Print the plain rendering even on a terminal.")]
    pub plain: bool,

    /// Always print the console rendering on stdout.
    #[arg(long, help = "Print the console rendering even when stdout is not a terminal.")]
    pub console: bool,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,

    /// Print a statistics table to stderr when done.
    #[arg(long, help = "Print a statistics summary to stderr.")]
    pub stats: bool,

    /// Print the statistics snapshot as JSON on stdout after the text.
    #[arg(long = "stats-json", help = "Print statistics as JSON on stdout after the filtered text.")]
    pub stats_json: bool,

    /// Write a sample configuration to FILE and exit.
    #[arg(long = "sample-config", value_name = "FILE", help = "Write a sample configuration file and exit.")]
    pub sample_config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
