//! Core Analyzer implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::finding::extract_finding;
use crate::heuristics::apply_all_heuristics;
use crate::paragraph::extract_cap;
use crate::secondary::collect_secondaries;
use crate::types::{AnalysisMetadata, AnalysisOutcome};
use distiller_domain::record::{FINDING_KEY, PAGE_NUMBER_KEY, PLAN_KEY};
use distiller_domain::{AuditNumber, AuditRecord, FieldMap, Page};
use distiller_nlp::{EntityTagger, TaggedPage};
use std::time::Instant;
use tracing::{debug, info, warn};

/// The Analyzer turns the pages of one audit report into audit records
///
/// It holds no per-document state, so one instance can be shared across
/// threads and reused for any number of documents.
#[derive(Debug)]
pub struct Analyzer {
    tagger: EntityTagger,
    config: ExtractorConfig,
}

impl Analyzer {
    /// Create a new Analyzer
    pub fn new(tagger: EntityTagger, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { tagger, config })
    }

    /// Create an Analyzer with the default pattern table and configuration
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(EntityTagger::with_defaults()?, ExtractorConfig::default())
    }

    /// The tagger used for every page
    pub fn tagger(&self) -> &EntityTagger {
        &self.tagger
    }

    /// Analyze every page of a document and post-process the records
    pub fn analyze(&self, pages: &[Page]) -> AnalysisOutcome {
        let start_time = Instant::now();

        let mut ordered: Vec<&Page> = pages.iter().collect();
        ordered.sort_by_key(|p| p.page_number());

        let mut metadata = AnalysisMetadata {
            pages_processed: ordered.len(),
            ..AnalysisMetadata::default()
        };
        let mut candidates = Vec::new();

        for page in ordered {
            debug!("Processing page {}", page.page_number());
            let tagged = self.tagger.tag(page.text());
            metadata.entities_tagged += tagged.entities().len();
            candidates.extend(self.records_for(&tagged, page.page_number()));
        }

        metadata.candidates = candidates.len();
        let records = apply_all_heuristics(candidates, &self.config.heuristics);
        metadata.records_dropped = metadata.candidates - records.len();
        metadata.processing_time_ms = start_time.elapsed().as_millis() as u64;

        for record in &records {
            info!("Found audit {} on page {}", record.audit, record.page_number);
        }
        info!(
            "Analyzed {} pages: {} records ({} dropped by heuristics)",
            metadata.pages_processed,
            records.len(),
            metadata.records_dropped
        );

        AnalysisOutcome { records, metadata }
    }

    /// Candidate records for a single page, before post-processing
    pub fn analyze_page(&self, page: &Page) -> Vec<AuditRecord> {
        let tagged = self.tagger.tag(page.text());
        self.records_for(&tagged, page.page_number())
    }

    fn records_for(&self, page: &TaggedPage<'_>, page_number: u32) -> Vec<AuditRecord> {
        let mut records = Vec::new();

        for audit in page.audit_numbers() {
            let audit = match AuditNumber::new(audit) {
                Ok(audit) => audit,
                Err(e) => {
                    warn!("Skipping tagged audit number on page {}: {}", page_number, e);
                    continue;
                }
            };

            let mut finding_data = FieldMap::new();
            if let Some(finding) = extract_finding(page, audit.as_str()) {
                finding_data.insert(FINDING_KEY, finding);
                finding_data.insert(PAGE_NUMBER_KEY, page_number);
                finding_data.extend(collect_secondaries(page));
            }

            let mut cap_data = FieldMap::new();
            if let Some(plan) = extract_cap(page, audit.as_str(), &self.config) {
                cap_data.insert(PLAN_KEY, plan);
                cap_data.insert(PAGE_NUMBER_KEY, page_number);
            }

            match AuditRecord::new(audit, finding_data, cap_data, page_number) {
                Some(record) => {
                    debug!("Candidate record for {} on page {}", record.audit, page_number);
                    records.push(record);
                }
                None => debug!("Nothing found near audit number on page {}", page_number),
            }
        }

        records
    }
}
