//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Distiller CLI - Extract findings and corrective action plans from audit reports.
#[derive(Debug, Parser)]
#[command(name = "distiller")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DISTILLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every page and sentence decision
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per item)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract audit records from one document
    Analyze(AnalyzeArgs),

    /// Show the tagged entities of a document
    Tag(TagArgs),

    /// List header sentences per page
    Findings(FindingsArgs),

    /// Analyze every document in a directory
    Batch(BatchArgs),

    /// Print the effective pattern table as TOML
    Patterns,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Page dump (.json) or page-text cache directory
    pub input: PathBuf,
}

/// Arguments for the tag command.
#[derive(Debug, Parser)]
pub struct TagArgs {
    /// Page dump (.json) or page-text cache directory
    pub input: PathBuf,

    /// Only tag this page
    #[arg(short, long)]
    pub page: Option<u32>,
}

/// Arguments for the findings command.
#[derive(Debug, Parser)]
pub struct FindingsArgs {
    /// Page dump (.json) or page-text cache directory
    pub input: PathBuf,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory of page dumps and page-text cache directories
    pub dir: PathBuf,

    /// Documents analyzed at the same time
    #[arg(short, long, default_value = "4")]
    pub jobs: usize,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
