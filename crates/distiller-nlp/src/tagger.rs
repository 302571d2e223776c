//! Entity tagger: tokenizer → sentencizer → matchers → resolver

use crate::error::NlpError;
use crate::matcher::{Matcher, PhraseMatcher, RegexSpanMatcher};
use crate::patterns::PatternTable;
use crate::resolver::{resolve, Candidate};
use crate::sentencizer::{Sentence, Sentencizer};
use crate::tokenizer::Tokenizer;
use distiller_domain::{Entity, Label};
use tracing::{debug, warn};

/// Labels the spans of page text according to a [`PatternTable`]
///
/// The tagger is immutable after construction and can be shared between
/// threads.
pub struct EntityTagger {
    patterns: PatternTable,
    tokenizer: Tokenizer,
    sentencizer: Sentencizer,
    matchers: Vec<Box<dyn Matcher>>,
}

impl std::fmt::Debug for EntityTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityTagger")
            .field("patterns", &self.patterns)
            .field("matchers", &self.matchers.iter().map(|m| m.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl EntityTagger {
    /// Validate and compile a pattern table
    pub fn new(patterns: PatternTable) -> Result<Self, NlpError> {
        patterns.validate()?;

        let identifiers = RegexSpanMatcher::new(&patterns.audit_number_pattern, Label::AuditNumber)?;
        let mut phrases = PhraseMatcher::new();
        for pattern in &patterns.phrases {
            phrases.add(&pattern.phrase, pattern.label()?)?;
        }

        debug!(
            "Compiled tagger with {} phrases, audit number pattern {:?}",
            phrases.len(),
            patterns.audit_number_pattern
        );

        Ok(Self {
            patterns,
            tokenizer: Tokenizer::new(),
            sentencizer: Sentencizer::new(),
            matchers: vec![Box::new(identifiers), Box::new(phrases)],
        })
    }

    /// Tagger for the built-in pattern table
    pub fn with_defaults() -> Result<Self, NlpError> {
        Self::new(PatternTable::default())
    }

    /// Tag one page of text
    pub fn tag<'a>(&self, text: &'a str) -> TaggedPage<'a> {
        let tokens = self.tokenizer.tokenize(text);

        let candidates: Vec<Candidate> = self
            .matchers
            .iter()
            .flat_map(|matcher| {
                let priority = matcher.priority();
                matcher
                    .find(text, &tokens)
                    .into_iter()
                    .map(move |entity| Candidate { priority, entity })
            })
            .collect();
        let candidate_count = candidates.len();
        let entities = resolve(candidates);

        let mut sentences = self.sentencizer.split(text, &tokens);
        let owners = self.sentencizer.attach(&mut sentences, &entities);
        for (entity, owner) in entities.iter().zip(&owners) {
            if owner.is_none() {
                warn!("Entity {:?} at {} is not inside any sentence", entity.text, entity.start);
            }
        }

        debug!(
            "Tagged {} tokens: {} candidates, {} entities, {} sentences",
            tokens.len(),
            candidate_count,
            entities.len(),
            sentences.len()
        );

        TaggedPage {
            text,
            entities,
            sentences,
            owners,
        }
    }
}

/// One page of text with its entities and sentences
#[derive(Debug, Clone)]
pub struct TaggedPage<'a> {
    text: &'a str,
    entities: Vec<Entity>,
    sentences: Vec<Sentence>,
    owners: Vec<Option<usize>>,
}

impl<'a> TaggedPage<'a> {
    /// Page text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Entities, ordered by start offset
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Sentences, in text order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Text of a sentence
    pub fn sentence_text(&self, sentence: &Sentence) -> &'a str {
        sentence.text(self.text)
    }

    /// Entities contained in a sentence, in text order
    pub fn sentence_entities<'s>(&'s self, sentence: &'s Sentence) -> impl Iterator<Item = &'s Entity> + 's {
        sentence.entities.iter().map(move |&idx| &self.entities[idx])
    }

    /// Sentence containing the entity at `entity_idx`
    pub fn enclosing_sentence(&self, entity_idx: usize) -> Option<&Sentence> {
        self.owners
            .get(entity_idx)
            .copied()
            .flatten()
            .map(|idx| &self.sentences[idx])
    }

    /// The enclosing sentence of every entity with `label`, one per entity
    pub fn sentences_with(&self, label: Label) -> Vec<&Sentence> {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.label == label)
            .filter_map(|(idx, _)| self.enclosing_sentence(idx))
            .collect()
    }

    /// Distinct audit number texts, in order of first appearance
    pub fn audit_numbers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entity in self.entities.iter().filter(|e| e.label == Label::AuditNumber) {
            if !seen.contains(&entity.text.as_str()) {
                seen.push(&entity.text);
            }
        }
        seen
    }

    /// `(trimmed text, label)` for every entity
    pub fn results(&self) -> Vec<(String, Label)> {
        self.entities
            .iter()
            .map(|e| (e.text.trim().to_string(), e.label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> EntityTagger {
        EntityTagger::with_defaults().unwrap()
    }

    #[test]
    fn test_empty_page() {
        let tagger = tagger();
        let page = tagger.tag("");
        assert!(page.entities().is_empty());
        assert!(page.sentences().is_empty());
        assert!(page.audit_numbers().is_empty());
    }

    #[test]
    fn test_tags_each_pass() {
        let tagger = tagger();
        let page = tagger.tag("Schedule of Findings and Questioned Costs\n\n2019-001 Condition: late filing.");
        assert_eq!(
            page.results(),
            vec![
                ("Findings and Questioned Costs".to_string(), Label::Header),
                ("2019-001".to_string(), Label::AuditNumber),
                ("Condition".to_string(), Label::Condition),
            ]
        );
    }

    #[test]
    fn test_longest_phrase_wins() {
        let tagger = tagger();
        let page = tagger.tag("Criteria or specific requirement: the rule.");
        assert_eq!(page.entities().len(), 1);
        assert_eq!(page.entities()[0].text, "Criteria or specific requirement");
    }

    #[test]
    fn test_entities_attach_to_sentences() {
        let tagger = tagger();
        let page = tagger.tag("Intro text. Cause: timing of invoices.");
        let sentence = page.enclosing_sentence(0).unwrap();
        assert_eq!(page.sentence_text(sentence), "Cause: timing of invoices.");
        assert_eq!(page.sentence_entities(sentence).count(), 1);
    }

    #[test]
    fn test_audit_numbers_distinct_in_order() {
        let tagger = tagger();
        let page = tagger.tag("2019-002 then 2019-001 and 2019-002 again.");
        assert_eq!(page.audit_numbers(), vec!["2019-002", "2019-001"]);
    }

    #[test]
    fn test_custom_table() {
        let table = PatternTable::empty().with_phrase(Label::Header, "schedule of findings");
        let tagger = EntityTagger::new(table).unwrap();
        let page = tagger.tag("SCHEDULE OF FINDINGS 2020-010 condition");
        assert_eq!(
            page.results(),
            vec![
                ("SCHEDULE OF FINDINGS".to_string(), Label::Header),
                ("2020-010".to_string(), Label::AuditNumber),
            ]
        );
    }
}
