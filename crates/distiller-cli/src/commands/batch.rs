//! Batch command implementation.
//!
//! Documents are analyzed on tokio's blocking pool, at most `--jobs` at a
//! time. A document that cannot be read is logged and skipped; the others
//! are unaffected. Records are printed as JSON lines in document order.

use crate::cli::BatchArgs;
use crate::commands::analyze::analyze_document;
use crate::error::{CliError, Result};
use crate::output::{record_json, Formatter};
use crate::source::DocumentSource;
use distiller_domain::traits::PageSource;
use distiller_domain::AuditRecord;
use distiller_extractor::Analyzer;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// `(document name, records)` for every analyzed document, in discovery order
    pub documents: Vec<(String, Vec<AuditRecord>)>,

    /// `(document name, error)` for every skipped document
    pub failures: Vec<(String, String)>,
}

/// Analyze every document under `args.dir`.
pub async fn run_batch(args: &BatchArgs, analyzer: Arc<Analyzer>) -> Result<BatchReport> {
    if args.jobs == 0 {
        return Err(CliError::InvalidInput("--jobs must be at least 1".to_string()));
    }

    let sources = DocumentSource::discover(&args.dir)?;
    info!("Found {} document(s) in {}", sources.len(), args.dir.display());

    let permits = Arc::new(Semaphore::new(args.jobs));
    let mut tasks = JoinSet::new();

    for (index, source) in sources.into_iter().enumerate() {
        let analyzer = Arc::clone(&analyzer);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let name = source.document_name().to_string();
            let result = match permits.acquire_owned().await {
                Ok(_permit) => tokio::task::spawn_blocking(move || analyze_document(&source, &analyzer))
                    .await
                    .map_err(|e| CliError::Task(e.to_string()))
                    .and_then(|r| r),
                Err(e) => Err(CliError::Task(e.to_string())),
            };
            (index, name, result)
        });
    }

    let mut finished = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        finished.push(joined.map_err(|e| CliError::Task(e.to_string()))?);
    }
    finished.sort_by_key(|(index, _, _)| *index);

    let mut report = BatchReport::default();
    for (_, name, result) in finished {
        match result {
            Ok(outcome) => {
                info!("{}: {} record(s)", name, outcome.records.len());
                report.documents.push((name, outcome.records));
            }
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                report.failures.push((name, e.to_string()));
            }
        }
    }

    Ok(report)
}

/// Execute the batch command.
pub async fn execute_batch(args: BatchArgs, analyzer: Arc<Analyzer>, formatter: &Formatter) -> Result<()> {
    let report = run_batch(&args, analyzer).await?;

    for (name, records) in &report.documents {
        for record in records {
            let mut line = record_json(record);
            if let Value::Object(object) = &mut line {
                object.insert("document".to_string(), Value::from(name.as_str()));
            }
            println!("{}", serde_json::to_string(&line)?);
        }
    }

    let records: usize = report.documents.iter().map(|(_, r)| r.len()).sum();
    eprintln!(
        "{}",
        formatter.info(&format!(
            "{} document(s) analyzed, {} record(s)",
            report.documents.len(),
            records
        ))
    );
    if !report.failures.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} document(s) skipped", report.failures.len()))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_report(dir: &std::path::Path, name: &str, audit: &str) {
        let json = serde_json::json!([
            { "page_number": 0, "text": "Contents" },
            { "page_number": 4, "text": format!("Financial Statement Findings\n\n{} Cause: x.", audit) },
        ]);
        fs::write(dir.join(format!("{}.json", name)), json.to_string()).unwrap();
    }

    #[tokio::test]
    async fn test_batch_skips_bad_documents() {
        let dir = TempDir::new().unwrap();
        write_report(dir.path(), "alpha", "2019-001");
        write_report(dir.path(), "gamma", "2020-002");
        fs::write(dir.path().join("beta.json"), "[]").unwrap();
        fs::write(dir.path().join("delta.json"), "not json").unwrap();

        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            jobs: 2,
        };
        let analyzer = Arc::new(Analyzer::with_defaults().unwrap());
        let report = run_batch(&args, analyzer).await.unwrap();

        let names: Vec<&str> = report.documents.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
        assert_eq!(report.documents[1].1[0].audit.as_str(), "2020-002");

        let failed: Vec<&str> = report.failures.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(failed, vec!["beta", "delta"]);
    }

    #[tokio::test]
    async fn test_zero_jobs_rejected() {
        let dir = TempDir::new().unwrap();
        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            jobs: 0,
        };
        let analyzer = Arc::new(Analyzer::with_defaults().unwrap());
        assert!(run_batch(&args, analyzer).await.is_err());
    }
}
