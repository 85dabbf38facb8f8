// crates/cli/src/args.rs
use crate::options::{LogFormat, OutputFormat};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tidbit_scan",
    version,
    about = "Scan text files for outline headings ending in 'tidbits'"
)]
pub struct Args {
    /// File paths to be processed
    #[arg(short = 'p', long = "path", required = true, value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Generate report for matched lines
    #[arg(short = 'm', long)]
    pub report_matches: bool,

    /// Generate report for duplicate name counts
    #[arg(short = 'n', long)]
    pub report_name_counts: bool,

    /// Generate statistics report
    #[arg(short = 's', long)]
    pub report_stats: bool,

    /// Report rendering
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Log format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Show verbose debug information, each -v bumps log level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
