//! Tokenizer for page text

/// Kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of alphanumeric characters (numbers may carry inner `.` or `,`)
    Word,
    /// Any other single non-whitespace character
    Punct,
}

/// A token: a byte range of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Token kind
    pub kind: TokenKind,
}

impl Token {
    /// Text of this token within `source`
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// The single character of a punctuation token
    pub fn punct_char(&self, source: &str) -> Option<char> {
        match self.kind {
            TokenKind::Punct => self.text(source).chars().next(),
            TokenKind::Word => None,
        }
    }
}

/// Splits text into word and punctuation tokens
///
/// Whitespace is never part of a token. Hyphens are always separate tokens,
/// so `2019-001` yields `2019`, `-`, `001`. A `.` or `,` between two digits
/// stays inside the number (`83,644.00` is one token).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize the given text
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();
        let mut word_start: Option<usize> = None;
        let mut prev: Option<char> = None;

        while let Some((idx, c)) = chars.next() {
            if c.is_alphanumeric() {
                word_start.get_or_insert(idx);
                prev = Some(c);
                continue;
            }

            // Keep number separators inside the word
            if matches!(c, '.' | ',') && word_start.is_some() {
                let prev_digit = prev.map_or(false, |p| p.is_ascii_digit());
                let next_digit = chars.peek().map_or(false, |&(_, n)| n.is_ascii_digit());
                if prev_digit && next_digit {
                    prev = Some(c);
                    continue;
                }
            }

            if let Some(start) = word_start.take() {
                tokens.push(Token {
                    start,
                    end: idx,
                    kind: TokenKind::Word,
                });
            }

            if !c.is_whitespace() {
                tokens.push(Token {
                    start: idx,
                    end: idx + c.len_utf8(),
                    kind: TokenKind::Punct,
                });
            }
            prev = Some(c);
        }

        if let Some(start) = word_start {
            tokens.push(Token {
                start,
                end: text.len(),
                kind: TokenKind::Word,
            });
        }

        tokens
    }
}
