//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration of the post-processing heuristics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Run the heuristics at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Records on this page or earlier are treated as table of contents
    #[serde(default = "default_toc_page_cutoff")]
    pub toc_page_cutoff: u32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            toc_page_cutoff: default_toc_page_cutoff(),
        }
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Sentences a corrective action plan may grow by before it is cut off
    #[serde(default = "default_cap_sentence_limit")]
    pub cap_sentence_limit: usize,

    /// Start the plan text at the trigger phrase rather than at the start
    /// of its sentence
    #[serde(default = "default_true")]
    pub seed_from_trigger: bool,

    /// Ignore trigger sentences that also carry a secondary label; those
    /// are usually the finding itself ("Views of responsible officials and
    /// planned corrective action: ...")
    #[serde(default)]
    pub skip_triggers_with_secondaries: bool,

    /// Emit a plan that is still being collected when the page ends
    #[serde(default)]
    pub flush_at_page_end: bool,

    /// Post-processing heuristics
    #[serde(default)]
    pub heuristics: HeuristicConfig,
}

fn default_true() -> bool {
    true
}

fn default_toc_page_cutoff() -> u32 {
    2
}

fn default_cap_sentence_limit() -> usize {
    20
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.cap_sentence_limit == 0 {
            return Err(ExtractorError::Config(
                "cap_sentence_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict preset: skip trigger sentences that look like finding text
    pub fn strict() -> Self {
        Self {
            skip_triggers_with_secondaries: true,
            ..Self::default()
        }
    }

    /// Lenient preset: longer plans, kept even when the page ends first
    pub fn lenient() -> Self {
        Self {
            cap_sentence_limit: 40,
            flush_at_page_end: true,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    /// Default configuration, matching the reference behavior
    fn default() -> Self {
        Self {
            cap_sentence_limit: default_cap_sentence_limit(),
            seed_from_trigger: true,
            skip_triggers_with_secondaries: false,
            flush_at_page_end: false,
            heuristics: HeuristicConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cap_sentence_limit, 20);
        assert_eq!(config.heuristics.toc_page_cutoff, 2);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::strict().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_cap_sentence_limit() {
        let mut config = ExtractorConfig::default();
        config.cap_sentence_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml(
            r#"
            cap_sentence_limit = 5

            [heuristics]
            toc_page_cutoff = 0
            "#,
        )
        .unwrap();
        assert_eq!(parsed.cap_sentence_limit, 5);
        assert!(parsed.seed_from_trigger);
        assert!(parsed.heuristics.enabled);
        assert_eq!(parsed.heuristics.toc_page_cutoff, 0);
    }
}
