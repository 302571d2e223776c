//! Audit number module - the identifier of one audit finding

use std::fmt;

/// Identifier of one audit finding within a report, e.g. `2019-001`
///
/// The format is a four-digit year, a hyphen and a three-digit sequence.
/// Audit numbers are only ever built from text that was tagged on a page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuditNumber(String);

impl AuditNumber {
    /// Create an audit number from its textual form
    ///
    /// # Examples
    ///
    /// ```
    /// use distiller_domain::AuditNumber;
    ///
    /// let audit = AuditNumber::new("2019-001").unwrap();
    /// assert_eq!(audit.year(), 2019);
    /// assert_eq!(audit.sequence(), 1);
    /// assert!(AuditNumber::new("19-001").is_err());
    /// ```
    ///
    /// # Errors
    /// Returns error if the value is not `YYYY-NNN`
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 8
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if !well_formed {
            return Err(format!("Invalid audit number: {:?}", value));
        }

        Ok(Self(value))
    }

    /// Get the audit number as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year component
    pub fn year(&self) -> u16 {
        // Digits were validated in `new`
        self.0[..4].parse().unwrap_or_default()
    }

    /// Sequence component within the year
    pub fn sequence(&self) -> u16 {
        self.0[5..].parse().unwrap_or_default()
    }
}

impl fmt::Display for AuditNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AuditNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AuditNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_audit_numbers() {
        assert!(AuditNumber::new("2019-001").is_ok());
        assert!(AuditNumber::new("2020-123").is_ok());
    }

    #[test]
    fn test_invalid_audit_numbers() {
        assert!(AuditNumber::new("").is_err());
        assert!(AuditNumber::new("2019-01").is_err());
        assert!(AuditNumber::new("2019-0001").is_err());
        assert!(AuditNumber::new("2019_001").is_err());
        assert!(AuditNumber::new("20a9-001").is_err());
        // U+2010 hyphen is not accepted
        assert!(AuditNumber::new("2018\u{2010}001").is_err());
    }

    #[test]
    fn test_components() {
        let audit = AuditNumber::new("2018-042").unwrap();
        assert_eq!(audit.year(), 2018);
        assert_eq!(audit.sequence(), 42);
        assert_eq!(audit.to_string(), "2018-042");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every YYYY-NNN string is accepted and keeps its components
        #[test]
        fn test_well_formed_accepted(year in 0u16..10000, seq in 0u16..1000) {
            let text = format!("{:04}-{:03}", year, seq);
            let audit = AuditNumber::new(text.clone()).unwrap();
            prop_assert_eq!(audit.as_str(), text.as_str());
            prop_assert_eq!(audit.year(), year);
            prop_assert_eq!(audit.sequence(), seq);
        }

        /// Property: strings of the wrong length are rejected
        #[test]
        fn test_wrong_length_rejected(s in "[0-9-]{0,7}|[0-9-]{9,12}") {
            prop_assert!(AuditNumber::new(s).is_err());
        }
    }
}
