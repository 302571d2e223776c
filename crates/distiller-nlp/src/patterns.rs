//! The pattern table: what the tagger looks for
//!
//! A `PatternTable` is an immutable configuration value. It is built once
//! (from the defaults or from TOML) and handed to the tagger, which compiles
//! it. Several tables can be in use at the same time.

use crate::error::NlpError;
use distiller_domain::Label;
use serde::{Deserialize, Serialize};

/// Default audit number pattern: four-digit year, hyphen, three-digit sequence
pub const DEFAULT_AUDIT_NUMBER_PATTERN: &str = r"[0-9]{4}-[0-9]{3}";

/// Boilerplate that opens a findings section
const HEADER_PHRASES: &[&str] = &[
    "findings and questioned costs",
    "status of prior year findings",
    "questioned costs for federal awards",
    "federal award findings and questioned costs",
    "financial statement findings",
    "major federal award programs audit",
    "findings \u{2013} financial statement audit",
    "findings related to the financial statements",
    "major federal award findings and questioned costs",
    "summary schedule of prior audit findings",
];

/// Structured sub-fields of a finding
const SECONDARY_PHRASES: &[(Label, &str)] = &[
    (Label::Condition, "observation"),
    (Label::Condition, "condition"),
    (Label::Criteria, "criteria"),
    (Label::Criteria, "criteria or specific requirement"),
    (Label::Context, "context"),
    (Label::Cause, "cause"),
    (Label::Cause, "cause of the condition"),
    (Label::Effect, "effect"),
    (Label::Effect, "effect or possible effect"),
    (Label::Recommendation, "recommendation"),
    (Label::Recommendation, "recommendations"),
    (Label::Response, "response"),
];

/// Phrases that open a corrective action plan
const CORRECTIVE_ACTION_PHRASES: &[&str] = &[
    "corrective action",
    "corrective action plan",
    "planned corrective actions",
    "planned corrective action",
];

/// A literal phrase bound to a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasePattern {
    /// Label name, e.g. `HEADER` or `CONDITION`
    pub label: String,

    /// Phrase, matched case-insensitively token by token
    pub phrase: String,
}

impl PhrasePattern {
    /// Create a phrase pattern
    pub fn new(label: Label, phrase: impl Into<String>) -> Self {
        Self {
            label: label.as_str().to_string(),
            phrase: phrase.into(),
        }
    }

    /// Parse the label name
    pub fn label(&self) -> Result<Label, NlpError> {
        Label::parse(&self.label).ok_or_else(|| NlpError::UnknownLabel(self.label.clone()))
    }
}

/// Configuration of the entity tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternTable {
    /// Regex for audit numbers
    #[serde(default = "default_audit_number_pattern")]
    pub audit_number_pattern: String,

    /// Literal phrases
    #[serde(default)]
    pub phrases: Vec<PhrasePattern>,
}

fn default_audit_number_pattern() -> String {
    DEFAULT_AUDIT_NUMBER_PATTERN.to_string()
}

impl Default for PatternTable {
    /// The built-in table for single audit reports
    fn default() -> Self {
        let headers = HEADER_PHRASES
            .iter()
            .map(|p| PhrasePattern::new(Label::Header, *p));
        let secondaries = SECONDARY_PHRASES
            .iter()
            .map(|(label, p)| PhrasePattern::new(*label, *p));
        let caps = CORRECTIVE_ACTION_PHRASES
            .iter()
            .map(|p| PhrasePattern::new(Label::CorrectiveAction, *p));

        Self {
            audit_number_pattern: default_audit_number_pattern(),
            phrases: secondaries.chain(headers).chain(caps).collect(),
        }
    }
}

impl PatternTable {
    /// A table with no phrases, only the audit number pattern
    pub fn empty() -> Self {
        Self {
            audit_number_pattern: default_audit_number_pattern(),
            phrases: Vec::new(),
        }
    }

    /// Add a phrase, returning the extended table
    pub fn with_phrase(mut self, label: Label, phrase: impl Into<String>) -> Self {
        self.phrases.push(PhrasePattern::new(label, phrase));
        self
    }

    /// Phrases bound to one label
    pub fn phrases_for(&self, label: Label) -> impl Iterator<Item = &str> {
        self.phrases
            .iter()
            .filter(move |p| p.label().ok() == Some(label))
            .map(|p| p.phrase.as_str())
    }

    /// Validate the table
    pub fn validate(&self) -> Result<(), NlpError> {
        if self.audit_number_pattern.trim().is_empty() {
            return Err(NlpError::Config("audit_number_pattern must not be empty".to_string()));
        }
        for pattern in &self.phrases {
            let label = pattern.label()?;
            if label == Label::AuditNumber {
                return Err(NlpError::InvalidPhrase {
                    phrase: pattern.phrase.clone(),
                    reason: "AUDIT_NUMBER is reserved for the audit number pattern".to_string(),
                });
            }
            if pattern.phrase.trim().is_empty() {
                return Err(NlpError::InvalidPhrase {
                    phrase: pattern.phrase.clone(),
                    reason: "phrase is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load a table from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, NlpError> {
        toml::from_str(toml_str).map_err(|e| NlpError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize the table to a TOML string
    pub fn to_toml(&self) -> Result<String, NlpError> {
        toml::to_string_pretty(self)
            .map_err(|e| NlpError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(PatternTable::default().validate().is_ok());
    }

    #[test]
    fn test_default_table_contents() {
        let table = PatternTable::default();
        assert_eq!(table.phrases_for(Label::Header).count(), 10);
        assert_eq!(table.phrases_for(Label::CorrectiveAction).count(), 4);
        assert!(table
            .phrases_for(Label::Criteria)
            .any(|p| p == "criteria or specific requirement"));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let table = PatternTable::empty();
        let mut table = table.with_phrase(Label::Header, "schedule of findings");
        table.phrases.push(PhrasePattern {
            label: "FINDING".to_string(),
            phrase: "finding".to_string(),
        });
        assert!(matches!(table.validate(), Err(NlpError::UnknownLabel(_))));
    }

    #[test]
    fn test_audit_number_label_reserved() {
        let table = PatternTable::empty().with_phrase(Label::AuditNumber, "finding number");
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut table = PatternTable::default();
        table.audit_number_pattern = " ".to_string();
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let table = PatternTable::default();
        let toml_str = table.to_toml().unwrap();
        let parsed = PatternTable::from_toml(&toml_str).unwrap();
        assert_eq!(table, parsed);
    }

    #[test]
    fn test_from_partial_toml() {
        let parsed = PatternTable::from_toml(
            r#"
            [[phrases]]
            label = "header"
            phrase = "schedule of findings"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.audit_number_pattern, DEFAULT_AUDIT_NUMBER_PATTERN);
        assert_eq!(parsed.phrases_for(Label::Header).collect::<Vec<_>>(), vec!["schedule of findings"]);
    }
}
