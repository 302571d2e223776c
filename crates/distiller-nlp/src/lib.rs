//! Distiller NLP
//!
//! Pattern-based tagging of audit report page text.
//!
//! # Overview
//!
//! The tagger labels spans of one page's text with the fixed set of
//! [`Label`](distiller_domain::Label)s and groups the page into sentences.
//! It is a small explicit pipeline:
//!
//! ```text
//! text → Tokenizer → Sentencizer
//!      → Matchers (regex identifiers, literal phrases) → Resolver → TaggedPage
//! ```
//!
//! Audit number matches always win over phrase matches on overlap; among
//! phrases the longest match wins.
//!
//! # Example Usage
//!
//! ```
//! use distiller_nlp::{EntityTagger, PatternTable};
//! use distiller_domain::Label;
//!
//! let tagger = EntityTagger::new(PatternTable::default()).unwrap();
//! let page = tagger.tag("Findings and Questioned Costs 2019-001");
//!
//! assert_eq!(page.audit_numbers(), vec!["2019-001"]);
//! assert_eq!(page.entities()[0].label, Label::Header);
//! ```

#![warn(missing_docs)]

mod error;
mod matcher;
mod patterns;
mod resolver;
mod sentencizer;
mod tagger;
mod tokenizer;

pub use error::NlpError;
pub use matcher::{MatchPriority, Matcher, PhraseMatcher, RegexSpanMatcher};
pub use patterns::{PatternTable, PhrasePattern, DEFAULT_AUDIT_NUMBER_PATTERN};
pub use resolver::{resolve, Candidate};
pub use sentencizer::{find_paragraph_break, has_paragraph_break, Sentence, Sentencizer};
pub use tagger::{EntityTagger, TaggedPage};
pub use tokenizer::{Token, TokenKind, Tokenizer};
