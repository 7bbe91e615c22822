//! CLI argument definitions for roster.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Check import column mappings and preview autocomplete candidates",
    long_about = "Check import column mappings and preview autocomplete candidates.\n\n\
                  Reads column configurations and option lists as JSON and reports\n\
                  which columns still block an import and which candidates an\n\
                  autocomplete would offer for a query."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Show the autocomplete candidates for a query.
    Filter(FilterArgs),

    /// Report which columns still block an import.
    Check(CheckArgs),

    /// Show created and updated totals of a finished import.
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct FilterArgs {
    /// JSON file holding an array of `{ "label", "value" }` options.
    #[arg(long = "options", value_name = "FILE")]
    pub options: PathBuf,

    /// Text typed into the autocomplete.
    #[arg(long = "query", default_value = "")]
    pub query: String,

    /// Fuzzy threshold, 0.0 (exact) to 1.0 (anything). Overrides --settings.
    #[arg(long = "threshold")]
    pub threshold: Option<f64>,

    /// JSON file with merger settings.
    #[arg(long = "settings", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print candidates as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// JSON file holding an array of columns.
    #[arg(long = "columns", value_name = "FILE")]
    pub columns: PathBuf,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// JSON file holding `{ "created": { "total" }, "updated": { "total" } }`.
    #[arg(long = "file", value_name = "FILE")]
    pub file: PathBuf,
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
