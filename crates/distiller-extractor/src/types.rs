//! Result types for document analysis

use distiller_domain::AuditRecord;

/// A corrective action plan paragraph found on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapParagraph {
    /// Audit number in effect when the paragraph started, if any
    pub audit: Option<String>,

    /// Cleaned paragraph text, starting at the trigger phrase
    pub text: String,
}

/// Result of analyzing one document
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Post-processed records, in page order
    pub records: Vec<AuditRecord>,

    /// Metadata about the analysis
    pub metadata: AnalysisMetadata,
}

/// Metadata about an analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisMetadata {
    /// Pages handed to the analyzer
    pub pages_processed: usize,

    /// Entities tagged across all pages
    pub entities_tagged: usize,

    /// Records built before post-processing
    pub candidates: usize,

    /// Records removed by post-processing
    pub records_dropped: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
