use std::path::PathBuf;

use clap::{Args, Parser};
use filetop_runtime::PROGRAM_NAME;

use crate::printer::{ColorChoice, OutputFormat, PrinterConfig};

/// Any value not given as a flag is asked for interactively.
#[derive(Debug, Default, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "List the largest or most recently modified files under a directory"
)]
pub struct Cli {
    /// Directory to scan
    #[arg(long, short = 'p')]
    pub path: Option<PathBuf>,

    /// Number of files to show; zero or negative shows none
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Sort order: 1 = by size, 2 = by modification time
    #[arg(long, short = 's', allow_negative_numbers = true)]
    pub sort: Option<i64>,

    /// Start of the modification-time window, YYYY-MM-DD (sort order 2 only)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the modification-time window, YYYY-MM-DD (sort order 2 only)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Debug, Default, Args)]
pub struct OutputOptions {
    /// Output results as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Suppress timing statistics
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn printer_config(&self) -> PrinterConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        PrinterConfig {
            format,
            color: ColorChoice::parse(&self.color),
            show_timing: !self.quiet,
        }
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
