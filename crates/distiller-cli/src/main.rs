//! Distiller CLI - Command-line interface for audit report extraction.

use distiller_cli::commands;
use distiller_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> distiller_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        Command::Analyze(args) => {
            commands::execute_analyze(args, &config.analyzer()?, &formatter)?;
        }
        Command::Tag(args) => {
            commands::execute_tag(args, &config.tagger()?, &formatter)?;
        }
        Command::Findings(args) => {
            commands::execute_findings(args, &config.tagger()?, &formatter)?;
        }
        Command::Batch(args) => {
            let analyzer = Arc::new(config.analyzer()?);
            commands::execute_batch(args, analyzer, &formatter).await?;
        }
        Command::Patterns => {
            let table = config.pattern_table()?;
            table.validate()?;
            commands::execute_patterns(&table)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` picks the filter unless `--verbose` is given
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
