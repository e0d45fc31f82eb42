//! Command line argument parsing for the fuzzhop CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::document::InputFormat;
use crate::document::converter::lines::DEFAULT_TEXT_FIELD;

/// fuzzhop - fuzzy filtering for lists of records
#[derive(Parser, Debug, Clone)]
#[command(name = "fuzzhop")]
#[command(about = "Fuzzy match and filter records by substring and word-prefix hops")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FuzzhopArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FuzzhopArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Match one search string against one target string
    Match(MatchArgs),

    /// Filter and rank the records of a file
    Filter(FilterArgs),

    /// Time repeated filtering of a file
    Benchmark(BenchmarkArgs),
}

/// Arguments for matching a single target
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Text to match against
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Search string; wrap in a leading double quote for substring-only
    #[arg(value_name = "SEARCH", allow_hyphen_values = true)]
    pub search: String,

    #[command(flatten)]
    pub markers: MarkerArgs,
}

/// Where records come from and which fields are searched
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Record file (CSV, JSONL or plain lines)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input format (guessed from the file extension when omitted)
    #[arg(short = 'i', long = "input-format")]
    pub input_format: Option<InputFormat>,

    /// Fields to search, in tie-break order (comma-separated)
    #[arg(short = 'F', long = "fields", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Field name for plain line records
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    pub text_field: String,

    /// Read numeric and boolean CSV cells as typed values (not searched)
    #[arg(long)]
    pub infer_types: bool,

    /// Match records on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for filtering a record file
#[derive(Parser, Debug, Clone)]
pub struct FilterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Search string
    #[arg(value_name = "SEARCH", allow_hyphen_values = true)]
    pub search: String,

    /// Maximum number of results to print
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// How many results will be shown; enables partial sorting for large inputs
    #[arg(long)]
    pub max_results_shown: Option<usize>,

    #[command(flatten)]
    pub markers: MarkerArgs,
}

/// Arguments for benchmarking
#[derive(Parser, Debug, Clone)]
pub struct BenchmarkArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Search strings to run (repeatable)
    #[arg(short, long = "search", required = true, allow_hyphen_values = true)]
    pub searches: Vec<String>,

    /// Number of iterations
    #[arg(short = 'n', long, default_value = "100")]
    pub iterations: usize,

    /// Warmup iterations before benchmarking
    #[arg(long, default_value = "10")]
    pub warmup: usize,

    /// Output file for results (JSON)
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,
}

/// Markers wrapped around matched segments in human output
#[derive(Parser, Debug, Clone)]
pub struct MarkerArgs {
    /// Text inserted before each matched segment
    #[arg(long, default_value = "[")]
    pub open: String,

    /// Text inserted after each matched segment
    #[arg(long, default_value = "]")]
    pub close: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
