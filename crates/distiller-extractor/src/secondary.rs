//! Secondary field collection (condition, criteria, cause, ...)

use crate::text::{clean, first_paragraph};
use distiller_nlp::TaggedPage;

/// Collect `(matched phrase, first paragraph of its sentence)` pairs
///
/// Keys are the matched text verbatim, so "Condition" and "condition" are
/// different keys. Every secondary entity on the page contributes, in page
/// order.
pub fn collect_secondaries(page: &TaggedPage<'_>) -> Vec<(String, String)> {
    page.entities()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.label.is_secondary())
        .filter_map(|(idx, entity)| {
            let sentence = page.enclosing_sentence(idx)?;
            let text = page.sentence_text(sentence).trim();
            Some((entity.text.clone(), clean(first_paragraph(text))))
        })
        .collect()
}
