//! sra2cmap CLI.

use clap::{ColorChoice, Parser};
use cmap_cli::logging::{LogConfig, LogFormat, init_logging};
use cmap_ingest::Delimiter;
use std::io::{self, IsTerminal};

mod cli;
mod commands;
mod pipeline;
mod summary;
mod types;

use crate::cli::{Cli, LogFormatArg};
use crate::commands::run_batch;
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let delimiter = match &cli.delimiter {
        Some(literal) => Delimiter::Literal(literal.clone()),
        None => Delimiter::WhitespaceRun,
    };
    let result = run_batch(&cli.files, &delimiter, &cli.outdir);
    print_summary(&result);
    std::process::exit(if result.any_succeeded() { 0 } else { 1 });
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
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
