//! roster CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use roster_cli::commands::{
    EXIT_FAILURE, EXIT_SUCCESS, load_json, load_settings, run_check, run_filter,
};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_model::{Column, ImportSummary, SelectOption};
use tracing::level_filters::LevelFilter;

mod cli;
mod output;

use crate::cli::{CheckArgs, Cli, Command, FilterArgs, LogFormatArg, LogLevelArg, SummaryArgs};
use crate::output::{print_check, print_filter, print_import_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }
    let result = match &cli.command {
        Command::Filter(args) => filter(args),
        Command::Check(args) => check(args),
        Command::Summary(args) => summary(args),
    };
    let exit_code = result.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        EXIT_FAILURE
    });
    std::process::exit(exit_code);
}

fn filter(args: &FilterArgs) -> Result<i32> {
    let options: Vec<SelectOption> = load_json(&args.options)?;
    let settings = load_settings(args.settings.as_deref(), args.threshold)?;
    let report = run_filter(&options, &args.query, settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_filter(&report);
    }
    Ok(EXIT_SUCCESS)
}

fn check(args: &CheckArgs) -> Result<i32> {
    let columns: Vec<Column> = load_json(&args.columns)?;
    let report = run_check(columns);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_check(&report);
    }
    Ok(report.exit_code())
}

fn summary(args: &SummaryArgs) -> Result<i32> {
    let summary: ImportSummary = load_json(&args.file)?;
    print_import_summary(&summary);
    Ok(EXIT_SUCCESS)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
