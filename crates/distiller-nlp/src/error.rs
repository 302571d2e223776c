//! Error types for the tagging pipeline

use thiserror::Error;

/// Errors that can occur while building a tagger
#[derive(Error, Debug)]
pub enum NlpError {
    /// Audit number pattern failed to compile
    #[error("Invalid audit number pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A phrase entry is unusable
    #[error("Invalid phrase pattern {phrase:?}: {reason}")]
    InvalidPhrase {
        /// The offending phrase
        phrase: String,
        /// Why it was rejected
        reason: String,
    },

    /// Unknown label name in a pattern table
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
