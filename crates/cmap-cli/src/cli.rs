//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sra2cmap",
    version,
    about = "Convert SRA metadata to CMAP import sheets",
    long_about = "Convert NCBI SRA run-report metadata to CMAP import sheets.\n\n\
                  Each input file yields a data sheet with the canonical columns\n\
                  time, lat, lon and depth first, plus dataset and variable\n\
                  metadata sheets when companion files are present."
)]
pub struct Cli {
    /// SRA metadata files to convert.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Literal field delimiter (default: split on runs of whitespace).
    #[arg(short = 'd', long = "delimiter", value_name = "STR")]
    pub delimiter: Option<String>,

    /// Output directory for the generated sheets.
    #[arg(
        short = 'o',
        long = "outdir",
        value_name = "DIR",
        default_value = "export"
    )]
    pub outdir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
