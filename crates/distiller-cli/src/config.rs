//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use distiller_extractor::{Analyzer, ExtractorConfig};
use distiller_nlp::{EntityTagger, PatternTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pattern table file (TOML); the built-in table when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Analyzer configuration; the defaults when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extractor: Option<ExtractorConfig>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".distiller").join("config.toml"))
    }

    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            debug!("Loading configuration from {}", path.display());
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// The pattern table to tag with.
    pub fn pattern_table(&self) -> Result<PatternTable> {
        match &self.patterns {
            Some(path) => {
                debug!("Loading pattern table from {}", path.display());
                let contents = fs::read_to_string(path)?;
                Ok(PatternTable::from_toml(&contents)?)
            }
            None => Ok(PatternTable::default()),
        }
    }

    /// The analyzer configuration.
    pub fn extractor_config(&self) -> ExtractorConfig {
        self.extractor.clone().unwrap_or_default()
    }

    /// Build a tagger from the configured pattern table.
    pub fn tagger(&self) -> Result<EntityTagger> {
        Ok(EntityTagger::new(self.pattern_table()?)?)
    }

    /// Build an analyzer from the configured pattern table and settings.
    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::new(self.tagger()?, self.extractor_config())?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
