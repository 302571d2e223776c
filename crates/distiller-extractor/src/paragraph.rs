//! Corrective action plan aggregation
//!
//! A single pass over the sentences of one page with two states:
//!
//! ```text
//!            trigger phrase
//!   Idle ─────────────────────▶ Collecting
//!    ▲                            │  plain sentence: append
//!    │   blank line, or more      │
//!    └─── than the sentence limit ┘
//! ```
//!
//! The most recent audit number seen on the page is carried along in
//! [`ScanState`] and snapshotted when collection begins. Nothing survives
//! the end of the page.

use crate::config::ExtractorConfig;
use crate::text::clean;
use crate::types::CapParagraph;
use distiller_domain::Label;
use distiller_nlp::{has_paragraph_break, Sentence, TaggedPage};
use tracing::debug;

#[derive(Debug, Default)]
enum Collect {
    #[default]
    Idle,
    Collecting {
        audit: Option<String>,
        buffer: String,
        overflow: usize,
    },
}

/// Per-page scan state of the aggregator
#[derive(Debug, Default)]
pub struct ScanState {
    current_audit: Option<String>,
    collect: Collect,
}

impl ScanState {
    /// Fresh state for the start of a page
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a plan is being collected
    pub fn is_collecting(&self) -> bool {
        matches!(self.collect, Collect::Collecting { .. })
    }

    /// Feed one sentence, returning a plan if one was completed
    pub fn step(
        &mut self,
        page: &TaggedPage<'_>,
        sentence: &Sentence,
        config: &ExtractorConfig,
    ) -> Option<CapParagraph> {
        let mut trigger_start = None;
        let mut audit_seen = false;
        let mut has_secondary = false;

        for entity in page.sentence_entities(sentence) {
            match entity.label {
                Label::AuditNumber if !audit_seen => {
                    self.current_audit = Some(entity.text.clone());
                    audit_seen = true;
                }
                Label::CorrectiveAction if trigger_start.is_none() => {
                    trigger_start = Some(entity.start);
                }
                label if label.is_secondary() => has_secondary = true,
                _ => {}
            }
        }

        if let Some(trigger_start) = trigger_start {
            if config.skip_triggers_with_secondaries && has_secondary {
                debug!("Skipping corrective action trigger at {} inside finding text", trigger_start);
                return None;
            }
            if self.is_collecting() {
                debug!("Corrective action trigger at {} restarts collection", trigger_start);
            }
            let seed_start = if config.seed_from_trigger {
                trigger_start
            } else {
                sentence.start
            };
            self.collect = Collect::Collecting {
                audit: self.current_audit.clone(),
                buffer: page.text()[seed_start..sentence.end].to_string(),
                overflow: 0,
            };
            return None;
        }

        let Collect::Collecting { buffer, overflow, .. } = &mut self.collect else {
            return None;
        };

        let text = page.sentence_text(sentence);
        if has_paragraph_break(text) {
            return self.emit();
        }

        buffer.push_str(text);
        *overflow += 1;
        if *overflow > config.cap_sentence_limit {
            debug!("Corrective action plan exceeded {} sentences, cutting off", config.cap_sentence_limit);
            return self.emit();
        }
        None
    }

    /// Emit whatever is being collected and return to idle
    pub fn finish(&mut self) -> Option<CapParagraph> {
        self.emit()
    }

    fn emit(&mut self) -> Option<CapParagraph> {
        match std::mem::take(&mut self.collect) {
            Collect::Idle => None,
            Collect::Collecting { audit, buffer, .. } => Some(CapParagraph {
                audit,
                text: clean(&buffer),
            }),
        }
    }
}

/// Collect every corrective action plan paragraph on a page
pub fn aggregate_paragraphs(page: &TaggedPage<'_>, config: &ExtractorConfig) -> Vec<CapParagraph> {
    let mut state = ScanState::new();
    let mut paragraphs: Vec<CapParagraph> = page
        .sentences()
        .iter()
        .filter_map(|sentence| state.step(page, sentence, config))
        .collect();

    if state.is_collecting() {
        if config.flush_at_page_end {
            paragraphs.extend(state.finish());
        } else {
            debug!("Dropping unterminated corrective action plan at end of page");
        }
    }

    paragraphs
}

/// The first corrective action plan on the page that belongs to `audit`
pub fn extract_cap(page: &TaggedPage<'_>, audit: &str, config: &ExtractorConfig) -> Option<String> {
    aggregate_paragraphs(page, config)
        .into_iter()
        .find(|p| p.audit.as_deref() == Some(audit))
        .map(|p| p.text)
}
