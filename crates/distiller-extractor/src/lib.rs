//! Distiller Extractor
//!
//! Turns the page text of a single audit report into structured audit
//! records.
//!
//! # Overview
//!
//! Every page is tagged independently. For each distinct audit number on a
//! page the extractor looks for a finding (a header sentence followed by the
//! audit number) and for a corrective action plan paragraph, and builds one
//! record from whatever it found. After the last page the post-processing
//! heuristics clean up the accumulated records.
//!
//! # Architecture
//!
//! ```text
//! Pages → EntityTagger → { Finding, Secondaries, CAP paragraphs } → Records
//!       → Heuristics → AnalysisOutcome
//! ```
//!
//! # Key Features
//!
//! - **Finding Extraction**: Header sentences paired with the audit number that follows
//! - **Secondary Fields**: Condition, criteria, cause and friends, keyed by the literal phrase
//! - **CAP Aggregation**: Per-page state machine with a sentence limit
//! - **Heuristics**: Table of contents removal, duplicate values, key prefixes
//!
//! # Example Usage
//!
//! ```
//! use distiller_domain::Page;
//! use distiller_extractor::Analyzer;
//!
//! let analyzer = Analyzer::with_defaults().unwrap();
//! let pages = vec![
//!     Page::new(0, "Table of Contents"),
//!     Page::new(3, "Financial Statement Findings\n\n2019-001 Condition: late filing."),
//! ];
//!
//! let outcome = analyzer.analyze(&pages);
//! assert_eq!(outcome.records.len(), 1);
//! assert_eq!(outcome.records[0].audit.as_str(), "2019-001");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod finding;
mod heuristics;
mod paragraph;
mod secondary;
mod text;
mod types;


pub use analyzer::Analyzer;
pub use config::{ExtractorConfig, HeuristicConfig};
pub use error::ExtractorError;
pub use finding::{extract_finding, findings};
pub use heuristics::{
    apply_all_heuristics, handle_keyword_duplicates, remove_toc, strip_if_first_match,
};
pub use paragraph::{aggregate_paragraphs, extract_cap, ScanState};
pub use secondary::collect_secondaries;
pub use text::clean;
pub use types::{AnalysisMetadata, AnalysisOutcome, CapParagraph};
