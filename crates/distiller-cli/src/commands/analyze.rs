//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use crate::source::{load_pages, DocumentSource};
use distiller_domain::traits::PageSource;
use distiller_extractor::{AnalysisOutcome, Analyzer};
use tracing::info;

/// Read a document and run the full analysis over it.
pub fn analyze_document(source: &DocumentSource, analyzer: &Analyzer) -> Result<AnalysisOutcome> {
    let pages = load_pages(source)?;
    info!("Analyzing {} ({} pages)", source.document_name(), pages.len());
    Ok(analyzer.analyze(&pages))
}

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let source = DocumentSource::open(&args.input)?;
    let outcome = analyze_document(&source, analyzer)?;

    println!("{}", formatter.format_records(&outcome.records)?);

    if formatter.format() == OutputFormat::Table {
        let metadata = &outcome.metadata;
        println!(
            "{}",
            formatter.info(&format!(
                "{} record(s) from {} page(s), {} dropped by heuristics ({} ms)",
                outcome.records.len(),
                metadata.pages_processed,
                metadata.records_dropped,
                metadata.processing_time_ms
            ))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_text_cache() {
        let dir = TempDir::new().unwrap();
        let cache = dir.path().join("report");
        fs::create_dir(&cache).unwrap();
        fs::write(cache.join("report.0.txt"), "Financial Statement Findings ..... 2019-001").unwrap();
        fs::write(
            cache.join("report.7.txt"),
            "Financial Statement Findings\n\n2019-001 Condition: Condition: late.",
        )
        .unwrap();

        let analyzer = Analyzer::with_defaults().unwrap();
        let source = DocumentSource::open(&cache).unwrap();
        let outcome = analyze_document(&source, &analyzer).unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].page_number, 7);
        assert_eq!(outcome.metadata.records_dropped, 1);
    }
}
