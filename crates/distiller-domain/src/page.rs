//! Page module - text of one page of a report

/// The extracted text of one page
///
/// Pages are produced by a page source and are immutable afterwards.
/// Page numbers are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    page_number: u32,
    text: String,
}

impl Page {
    /// Create a new page
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }

    /// 0-based page number
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Page text, with embedded newlines
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the page carries no text other than whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
