//! Error types for the Extractor

use distiller_nlp::NlpError;
use thiserror::Error;

/// Errors that can occur while setting up an analyzer
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Tagger construction failed
    #[error("Tagger error: {0}")]
    Nlp(#[from] NlpError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
