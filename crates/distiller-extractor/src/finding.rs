//! Finding extraction: pair a header sentence with an audit number

use crate::text::clean;
use distiller_domain::Label;
use distiller_nlp::TaggedPage;

/// Find the finding text for `audit` on a page
///
/// For every sentence holding a header phrase, in page order, look for an
/// audit number entity equal to `audit` that starts after the sentence
/// start (anywhere later on the page). The first such header sentence,
/// cleaned, is the finding.
pub fn extract_finding(page: &TaggedPage<'_>, audit: &str) -> Option<String> {
    page.sentences_with(Label::Header)
        .into_iter()
        .find(|sentence| {
            page.entities()
                .iter()
                .filter(|e| e.start > sentence.start)
                .any(|e| e.label == Label::AuditNumber && e.text == audit)
        })
        .map(|sentence| clean(page.sentence_text(sentence)))
}

/// Every header sentence on the page, cleaned, in page order
pub fn findings(page: &TaggedPage<'_>) -> Vec<String> {
    let mut sentences = page.sentences_with(Label::Header);
    sentences.dedup_by_key(|s| s.start);
    sentences
        .into_iter()
        .map(|s| clean(page.sentence_text(s)))
        .collect()
}
