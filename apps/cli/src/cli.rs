//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Validate request parameters and normalize JSON documents
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log output format, written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the headers and query of a request document
    Check {
        /// JSON file with `{"query": {...}, "headers": {...}}`
        #[arg(long)]
        request: PathBuf,

        /// Comma-separated field names a projection may request
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        /// Comma-separated field names results may be sorted by
        #[arg(long, value_delimiter = ',')]
        sort: Option<Vec<String>>,

        /// TOML file with parameter settings
        #[arg(long, env = "VIGIL_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Rewrite the keys of a JSON document from snake_case to camelCase
    Normalize {
        /// JSON file to normalize
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human-readable output
    Compact,
    /// Multi-line human-readable output
    Pretty,
    /// One JSON object per event
    Json,
}
