//! Command-line argument definitions for rowparse
//!
//! Every parsing flag is optional: an absent flag leaves the value from the
//! config file or environment in place.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ParserConfig;
use crate::tokenizer::TokenizerStrategy;

/// CLI arguments for the rowparse tool
///
/// Parses a delimited text file and prints its header and rows.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rowparse",
    version,
    about = "Parse delimited text into validated rows",
    long_about = "Parses a line-oriented delimited text file with one of four quoting strategies, \
                  optionally validates every row against a column schema, and prints the header \
                  and records. Batch mode reports the exact failing row; streaming mode prints \
                  records as they are read."
)]
pub struct Args {
    /// Delimited text file to parse
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Treat the first row as data instead of a header
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Quoting strategy used to split lines
    #[arg(short = 's', long = "strategy", value_enum, value_name = "STRATEGY")]
    pub strategy: Option<TokenizerStrategy>,

    /// Single ASCII field separator
    #[arg(long = "separator", value_name = "CHAR")]
    pub separator: Option<char>,

    /// Column schema, e.g. `name:text,age:number,email:text?`
    ///
    /// Types: text, integer, number, boolean. A trailing `?` makes the
    /// column optional.
    #[arg(long = "columns", value_name = "SPEC")]
    pub columns: Option<String>,

    /// Use the streaming parser instead of batch
    #[arg(long = "stream")]
    pub stream: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// YAML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// How records are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Header: [...]` followed by one `Row: ...` line per record
    Human,
    /// One JSON value per line, header first
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Overlay the flags that were given onto a loaded configuration
    pub fn apply_to(&self, config: &mut ParserConfig) {
        if self.no_header {
            config.has_header = false;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(separator) = self.separator {
            config.separator = separator;
        }
        if let Some(columns) = &self.columns {
            config.columns = Some(columns.clone());
        }
    }
}
