//! Entity module - labeled spans of page text

use crate::Label;

/// A labeled span of one page's text
///
/// `start` and `end` are byte offsets into the page text and `text` is the
/// exact slice they cover. Entities are recomputed for every page and never
/// span a page boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Byte offset of the first character
    pub start: usize,

    /// Byte offset one past the last character
    pub end: usize,

    /// Label assigned by the tagger
    pub label: Label,

    /// The matched text, verbatim
    pub text: String,
}

impl Entity {
    /// Create an entity covering `source[start..end]`
    ///
    /// Returns `None` if the range is empty, out of bounds or not on
    /// character boundaries.
    pub fn from_source(source: &str, start: usize, end: usize, label: Label) -> Option<Self> {
        if start >= end {
            return None;
        }
        let text = source.get(start..end)?;
        Some(Self {
            start,
            end,
            label,
            text: text.to_string(),
        })
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether two spans share at least one byte
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether this span lies entirely within `[start, end)`
    pub fn is_within(&self, start: usize, end: usize) -> bool {
        start <= self.start && self.end <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source() {
        let text = "Finding 2019-001 here";
        let entity = Entity::from_source(text, 8, 16, Label::AuditNumber).unwrap();
        assert_eq!(entity.text, "2019-001");
        assert_eq!(entity.len(), 8);
    }

    #[test]
    fn test_from_source_rejects_bad_ranges() {
        let text = "caf\u{e9}";
        assert!(Entity::from_source(text, 2, 2, Label::Header).is_none());
        assert!(Entity::from_source(text, 0, 40, Label::Header).is_none());
        // Splits the two-byte 'é'
        assert!(Entity::from_source(text, 0, 4, Label::Header).is_none());
    }

    #[test]
    fn test_overlap_and_containment() {
        let text = "criteria or specific requirement";
        let long = Entity::from_source(text, 0, text.len(), Label::Criteria).unwrap();
        let short = Entity::from_source(text, 0, 8, Label::Criteria).unwrap();
        assert!(long.overlaps(&short));
        assert!(short.is_within(0, 8));
        assert!(!long.is_within(0, 8));
    }
}
