//! Error types for the CLI application.

use distiller_extractor::ExtractorError;
use distiller_nlp::NlpError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pattern table error
    #[error("Pattern error: {0}")]
    Nlp(#[from] NlpError),

    /// Analyzer setup error
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document has no text to analyze
    #[error("Document '{document}' is not extractable: {reason}")]
    NotExtractable {
        /// Document name
        document: String,
        /// What is missing
        reason: String,
    },

    /// A background task failed
    #[error("Task failed: {0}")]
    Task(String),
}
