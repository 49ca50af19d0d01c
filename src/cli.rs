//! CLI argument parsing for Medir

use clap::{Parser, ValueEnum};

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "medir")]
#[command(version)]
#[command(about = "Percentile and trend analyzer for benchmark latency logs", long_about = None)]
pub struct Cli {
    /// Input path pattern with {} as the group placeholder
    /// (e.g. outputs/output_client_{}.txt)
    #[arg(long = "pattern", value_name = "PATTERN")]
    pub pattern: String,

    /// Comma-separated group labels substituted into the pattern
    #[arg(long = "groups", value_name = "GROUPS", value_delimiter = ',')]
    pub groups: Vec<String>,

    /// Parse the tagged `opcode value` input format instead of one integer
    /// per line
    #[arg(short = 't', long = "tagged")]
    pub tagged: bool,

    /// Moving-average window for the tagged pipeline
    #[arg(long = "window", value_name = "SIZE", default_value = "1000")]
    pub window: usize,

    /// Fit a least-squares trend line over each smoothed series
    #[arg(long = "trend")]
    pub trend: bool,

    /// Include mean/stddev/min/max alongside percentiles
    #[arg(long = "stats-extended")]
    pub stats_extended: bool,

    /// Histogram bin count (enables histogram counts in the report)
    #[arg(long = "histogram-bins", value_name = "BINS")]
    pub histogram_bins: Option<usize>,

    /// Upper bound of the histogram range in nanoseconds
    #[arg(long = "histogram-max", value_name = "NS", default_value = "5000")]
    pub histogram_max: f64,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
