//! CLI argument definitions for datapick.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "datapick",
    version,
    about = "Pick a CSV file from a directory and profile it",
    long_about = "Discover CSV files in a directory, pick one interactively,\n\
                  load it with encoding fallback, and print shape, columns,\n\
                  head rows, dtypes, and missing-value counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pick a CSV file, load it, and print its profile.
    Load(LoadArgs),

    /// List the CSV files a load would offer.
    List(ListArgs),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Directory to search for CSV files.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Pick candidate N (1-based) without prompting.
    #[arg(long = "select", value_name = "N")]
    pub select: Option<usize>,

    /// Number of preview rows in the profile.
    #[arg(long = "head", value_name = "ROWS", default_value_t = 5)]
    pub head: usize,

    /// Print the profile as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Directory to search for CSV files.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the listing as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
