//! Span matchers
//!
//! Two matcher variants implement the [`Matcher`] trait:
//! - [`RegexSpanMatcher`]: regular expression over the raw text, accepted
//!   only when the match is aligned on token boundaries
//! - [`PhraseMatcher`]: case-insensitive literal token sequences

use crate::error::NlpError;
use crate::tokenizer::{Token, Tokenizer};
use distiller_domain::{Entity, Label};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Priority of a matcher when spans conflict. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchPriority {
    /// Strict identifier patterns
    Identifier = 0,
    /// Literal phrases
    Phrase = 1,
}

/// A source of candidate entities for one page
pub trait Matcher: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Conflict priority of this matcher's spans
    fn priority(&self) -> MatchPriority;

    /// Find all candidate spans in `text`, given its tokens
    fn find(&self, text: &str, tokens: &[Token]) -> Vec<Entity>;
}

/// Tags every token-aligned regex match with one label
#[derive(Debug, Clone)]
pub struct RegexSpanMatcher {
    regex: Regex,
    label: Label,
}

impl RegexSpanMatcher {
    /// Compile a regex matcher
    pub fn new(pattern: &str, label: Label) -> Result<Self, NlpError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            label,
        })
    }
}

impl Matcher for RegexSpanMatcher {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn priority(&self) -> MatchPriority {
        MatchPriority::Identifier
    }

    fn find(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        let starts: HashSet<usize> = tokens.iter().map(|t| t.start).collect();
        let ends: HashSet<usize> = tokens.iter().map(|t| t.end).collect();

        self.regex
            .find_iter(text)
            .filter(|m| starts.contains(&m.start()) && ends.contains(&m.end()))
            .filter_map(|m| Entity::from_source(text, m.start(), m.end(), self.label))
            .collect()
    }
}

#[derive(Debug, Clone)]
struct Phrase {
    words: Vec<String>,
    label: Label,
}

/// Matches literal phrases as case-insensitive token sequences
///
/// Phrases are tokenized with the page tokenizer. Consecutive phrase tokens
/// must be separated on the page by nothing but horizontal whitespace.
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher {
    tokenizer: Tokenizer,
    phrases: Vec<Phrase>,
    by_first_word: HashMap<String, Vec<usize>>,
}

impl PhraseMatcher {
    /// Create an empty phrase matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase bound to a label
    pub fn add(&mut self, phrase: &str, label: Label) -> Result<(), NlpError> {
        let words: Vec<String> = self
            .tokenizer
            .tokenize(phrase)
            .iter()
            .map(|t| t.text(phrase).to_lowercase())
            .collect();

        let Some(first) = words.first().cloned() else {
            return Err(NlpError::InvalidPhrase {
                phrase: phrase.to_string(),
                reason: "phrase has no tokens".to_string(),
            });
        };

        self.by_first_word
            .entry(first)
            .or_default()
            .push(self.phrases.len());
        self.phrases.push(Phrase { words, label });
        Ok(())
    }

    /// Number of phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether no phrases were added
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    fn matches_at(&self, text: &str, tokens: &[Token], lowered: &[String], at: usize, phrase: &Phrase) -> bool {
        let n = phrase.words.len();
        if at + n > tokens.len() {
            return false;
        }
        if lowered[at..at + n] != phrase.words[..] {
            return false;
        }
        tokens[at..at + n]
            .windows(2)
            .all(|pair| !text[pair[0].end..pair[1].start].contains(['\n', '\r']))
    }
}

impl Matcher for PhraseMatcher {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn priority(&self) -> MatchPriority {
        MatchPriority::Phrase
    }

    fn find(&self, text: &str, tokens: &[Token]) -> Vec<Entity> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.text(text).to_lowercase()).collect();
        let mut found = Vec::new();

        for (at, word) in lowered.iter().enumerate() {
            let Some(candidates) = self.by_first_word.get(word) else {
                continue;
            };
            for &idx in candidates {
                let phrase = &self.phrases[idx];
                if !self.matches_at(text, tokens, &lowered, at, phrase) {
                    continue;
                }
                let start = tokens[at].start;
                let end = tokens[at + phrase.words.len() - 1].end;
                if let Some(entity) = Entity::from_source(text, start, end, phrase.label) {
                    found.push(entity);
                }
            }
        }

        found
    }
}
