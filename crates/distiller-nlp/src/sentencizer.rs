//! Rule-based sentence segmentation

use crate::tokenizer::{Token, TokenKind};
use distiller_domain::Entity;
use std::ops::Range;

/// Characters that end a sentence
const TERMINATORS: &[char] = &['.', '!', '?', '\u{2026}', '\u{3002}', '\u{ff01}', '\u{ff1f}'];

/// Punctuation that stays attached to the sentence it closes
const CLOSERS: &[char] = &[')', ']', '}', '"', '\'', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Byte range of the first paragraph break in `text`
///
/// A paragraph break is a run of whitespace holding at least two line
/// breaks, so `"\r\n\r\n"` and `"\n \n"` count as blank lines too.
pub fn find_paragraph_break(text: &str) -> Option<Range<usize>> {
    let mut run_start = None;
    let mut newlines = 0;

    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            run_start.get_or_insert(idx);
            if c == '\n' {
                newlines += 1;
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            if newlines >= 2 {
                return Some(start..idx);
            }
        }
        newlines = 0;
    }

    run_start.filter(|_| newlines >= 2).map(|start| start..text.len())
}

/// Whether `text` contains a paragraph break
pub fn has_paragraph_break(text: &str) -> bool {
    find_paragraph_break(text).is_some()
}

/// A sentence: a contiguous region of page text and the entities inside it
///
/// Sentences partition the page text. Whitespace between two sentences
/// belongs to the following sentence when it contains a line break, so a
/// paragraph break shows up at the head of the next sentence's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Byte offset where the sentence starts
    pub start: usize,
    /// Byte offset where the sentence ends (start of the next sentence)
    pub end: usize,
    /// Indices of the page entities contained in this sentence
    pub entities: Vec<usize>,
}

impl Sentence {
    /// Text of this sentence within `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Splits tokenized text into sentences
///
/// A new sentence begins at the first token after a terminator (closing
/// quotes and brackets stay with the sentence they close), and at the first
/// token after a blank line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sentencizer;

impl Sentencizer {
    /// Create a sentencizer
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` given its tokens. Entities are attached separately.
    pub fn split(&self, text: &str, tokens: &[Token]) -> Vec<Sentence> {
        let mut starts = Vec::new();
        let mut seen_terminator = false;

        for (i, token) in tokens.iter().enumerate() {
            let punct = token.punct_char(text);

            if i == 0 {
                starts.push(0);
            } else {
                let gap = &text[tokens[i - 1].end..token.start];
                let closes = punct.map_or(false, |c| TERMINATORS.contains(&c) || CLOSERS.contains(&c));
                if has_paragraph_break(gap) || (seen_terminator && !closes) {
                    let previous_end = tokens[i - 1].end;
                    // Line breaks travel with the following sentence
                    starts.push(if gap.contains('\n') { previous_end } else { token.start });
                    seen_terminator = false;
                }
            }

            if token.kind == TokenKind::Punct && punct.map_or(false, |c| TERMINATORS.contains(&c)) {
                seen_terminator = true;
            }
        }

        starts
            .iter()
            .enumerate()
            .map(|(idx, &start)| Sentence {
                start,
                end: starts.get(idx + 1).copied().unwrap_or(text.len()),
                entities: Vec::new(),
            })
            .collect()
    }

    /// Attach every entity to the sentence that contains it
    ///
    /// Returns, for each entity, the index of its sentence (`None` if no
    /// sentence contains it).
    pub fn attach(&self, sentences: &mut [Sentence], entities: &[Entity]) -> Vec<Option<usize>> {
        let mut owners = Vec::with_capacity(entities.len());
        for (entity_idx, entity) in entities.iter().enumerate() {
            let owner = sentences
                .iter()
                .position(|s| entity.is_within(s.start, s.end));
            if let Some(sentence_idx) = owner {
                sentences[sentence_idx].entities.push(entity_idx);
            }
            owners.push(owner);
        }
        owners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;
    use distiller_domain::Label;

    fn sentences(text: &str) -> Vec<String> {
        let tokens = Tokenizer::new().tokenize(text);
        Sentencizer::new()
            .split(text, &tokens)
            .iter()
            .map(|s| s.text(text).to_string())
            .collect()
    }

    #[test]
    fn test_splits_on_terminators() {
        assert_eq!(
            sentences("First one. Second one! Third?"),
            vec!["First one. ", "Second one! ", "Third?"]
        );
    }

    #[test]
    fn test_paragraph_break_goes_to_next_sentence() {
        assert_eq!(
            sentences("First one.\n\nSecond one."),
            vec!["First one.", "\n\nSecond one."]
        );
    }

    #[test]
    fn test_blank_line_splits_without_terminator() {
        assert_eq!(
            sentences("Schedule of Findings\n\n2019-001 Condition"),
            vec!["Schedule of Findings", "\n\n2019-001 Condition"]
        );
    }

    #[test]
    fn test_crlf_and_padded_blank_lines_split() {
        assert_eq!(
            sentences("Schedule of Findings\r\n\r\n2019-001 Condition"),
            vec!["Schedule of Findings", "\r\n\r\n2019-001 Condition"]
        );
        assert_eq!(
            sentences("Schedule of Findings\n \t\n2019-001 Condition"),
            vec!["Schedule of Findings", "\n \t\n2019-001 Condition"]
        );
    }

    #[test]
    fn test_find_paragraph_break() {
        assert_eq!(find_paragraph_break("one\ntwo\n\nthree"), Some(7..9));
        assert_eq!(find_paragraph_break("one \r\n \r\n three"), Some(3..10));
        assert_eq!(find_paragraph_break("tail\n\n"), Some(4..6));
        assert_eq!(find_paragraph_break("one\ntwo \n three"), None);
        assert_eq!(find_paragraph_break(""), None);
    }

    #[test]
    fn test_single_newline_does_not_split() {
        assert_eq!(sentences("wrapped\nline."), vec!["wrapped\nline."]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            sentences("He said \"stop.\" Then left."),
            vec!["He said \"stop.\" ", "Then left."]
        );
    }

    #[test]
    fn test_sentences_partition_text() {
        let text = "  Lead. Next line\nwraps.\n\nNew paragraph.  ";
        let joined: String = sentences(text).concat();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert!(sentences("").is_empty());
        assert!(sentences("\n\n").is_empty());
    }

    #[test]
    fn test_attach_by_containment() {
        let text = "Condition: x. Cause: y.";
        let tokens = Tokenizer::new().tokenize(text);
        let sentencizer = Sentencizer::new();
        let mut sents = sentencizer.split(text, &tokens);
        let entities = vec![
            Entity::from_source(text, 0, 9, Label::Condition).unwrap(),
            Entity::from_source(text, 14, 19, Label::Cause).unwrap(),
        ];

        let owners = sentencizer.attach(&mut sents, &entities);
        assert_eq!(owners, vec![Some(0), Some(1)]);
        assert_eq!(sents[0].entities, vec![0]);
        assert_eq!(sents[1].entities, vec![1]);
    }
}
