//! Label module - the fixed set of span labels

use std::fmt;

/// Label attached to a tagged span of page text
///
/// Labels fall into four groups:
/// - `AuditNumber`: the `YYYY-NNN` identifier of a finding
/// - `Header`: boilerplate that opens a findings section
/// - Secondary labels: the structured sub-fields of a finding
/// - `CorrectiveAction`: phrases that open a corrective action plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Finding identifier such as `2019-001`
    AuditNumber,

    /// Start of a findings section
    Header,

    /// Condition (or observation) found by the auditor
    Condition,

    /// Criteria or specific requirement that was not met
    Criteria,

    /// Context of the condition
    Context,

    /// Cause of the condition
    Cause,

    /// Effect or possible effect
    Effect,

    /// Auditor recommendation
    Recommendation,

    /// Auditee response
    Response,

    /// Corrective action plan trigger
    CorrectiveAction,
}

impl Label {
    /// All labels, in declaration order
    pub const ALL: [Label; 10] = [
        Label::AuditNumber,
        Label::Header,
        Label::Condition,
        Label::Criteria,
        Label::Context,
        Label::Cause,
        Label::Effect,
        Label::Recommendation,
        Label::Response,
        Label::CorrectiveAction,
    ];

    /// Get the canonical label name
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::AuditNumber => "AUDIT_NUMBER",
            Label::Header => "HEADER",
            Label::Condition => "CONDITION",
            Label::Criteria => "CRITERIA",
            Label::Context => "CONTEXT",
            Label::Cause => "CAUSE",
            Label::Effect => "EFFECT",
            Label::Recommendation => "RECOMMENDATION",
            Label::Response => "RESPONSE",
            Label::CorrectiveAction => "CORRECTIVE_ACTION",
        }
    }

    /// Parse a label from its canonical name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Whether this label names one of the structured sub-fields of a finding
    pub fn is_secondary(&self) -> bool {
        matches!(
            self,
            Label::Condition
                | Label::Criteria
                | Label::Context
                | Label::Cause
                | Label::Effect
                | Label::Recommendation
                | Label::Response
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid label: {}", s))
    }
}
