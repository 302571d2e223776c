//! Record module - the structured output of document analysis

use crate::AuditNumber;
use std::fmt;

/// Key of the cleaned header sentence in finding data
pub const FINDING_KEY: &str = "Finding";

/// Key of the page number in finding and CAP data
pub const PAGE_NUMBER_KEY: &str = "Page number";

/// Key of the corrective action plan narrative in CAP data
pub const PLAN_KEY: &str = "Plan";

/// A value stored in finding or CAP data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Extracted text
    Text(String),

    /// Page number
    Number(u32),
}

impl FieldValue {
    /// Get the text, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value)
    }
}

/// Insertion-ordered mapping from field name to value
///
/// Key order is significant: the post-processing heuristics keep the first
/// key of duplicated values. Inserting an existing key replaces its value in
/// place without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Keep only the entries for which `f` returns true, preserving order
    pub fn retain(&mut self, mut f: impl FnMut(&str, &FieldValue) -> bool) {
        self.entries.retain(|(k, v)| f(k, v));
    }

    /// Mutable access to every value in insertion order
    pub fn values_mut(&mut self) -> impl Iterator<Item = (&str, &mut FieldValue)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Finding and corrective action plan data for one audit number on one page
///
/// Records are created by the analyzer, mutated only by the post-processing
/// heuristics and then handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Audit number the data belongs to
    pub audit: AuditNumber,

    /// Finding text, page number and secondary fields
    pub finding_data: FieldMap,

    /// Corrective action plan text and page number
    pub cap_data: FieldMap,

    /// Page the data was found on
    pub page_number: u32,
}

impl AuditRecord {
    /// Create a record, or `None` if both maps are empty
    pub fn new(
        audit: AuditNumber,
        finding_data: FieldMap,
        cap_data: FieldMap,
        page_number: u32,
    ) -> Option<Self> {
        if finding_data.is_empty() && cap_data.is_empty() {
            return None;
        }
        Some(Self {
            audit,
            finding_data,
            cap_data,
            page_number,
        })
    }

    /// Cleaned header sentence, if a finding was extracted
    pub fn finding(&self) -> Option<&str> {
        self.finding_data.get(FINDING_KEY).and_then(FieldValue::as_text)
    }

    /// Corrective action plan narrative, if one was extracted
    pub fn plan(&self) -> Option<&str> {
        self.cap_data.get(PLAN_KEY).and_then(FieldValue::as_text)
    }
}
