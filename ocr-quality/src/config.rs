//! Configuration management for OCR quality assessment
//!
//! Loads scoring and batch settings from TOML files. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::ScorerOptions;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Sequence matcher settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Enable the popular-element heuristic for long texts
    #[serde(default)]
    pub autojunk: bool,
}

/// Directory pairing and report output for batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Extension of reference files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Prefix removed from a reference file name to get the candidate name
    #[serde(default = "default_reference_prefix")]
    pub reference_prefix: String,
    /// Where the JSON report is written
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            reference_prefix: default_reference_prefix(),
            report_file: default_report_file(),
        }
    }
}

fn default_extension() -> String { "md".to_string() }
fn default_reference_prefix() -> String { "ground_truth_".to_string() }
fn default_report_file() -> String { "quality_report.json".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from default config location or return defaults
    pub fn load_or_default() -> Self {
        let config_paths = ["config/ocr-quality.toml", "ocr-quality.toml"];

        for path in &config_paths {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path);
                    return config;
                }
                Err(ConfigError::Parse(e)) => {
                    tracing::warn!("Ignoring invalid configuration {}: {}", path, e);
                }
                Err(ConfigError::Io(_)) => {}
            }
        }

        tracing::debug!("Using default configuration");
        Self::default()
    }

    /// Save configuration to a TOML file
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Matcher options derived from the scoring section
    pub fn scorer_options(&self) -> ScorerOptions {
        ScorerOptions {
            autojunk: self.scoring.autojunk,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.batch.extension, "md");
        assert_eq!(config.batch.reference_prefix, "ground_truth_");
        assert_eq!(config.batch.report_file, "quality_report.json");
        assert!(!config.scorer_options().autojunk);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[scoring]
autojunk = true

[batch]
extension = "txt"
reference_prefix = "gt_"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert!(config.scoring.autojunk);
        assert_eq!(config.batch.extension, "txt");
        assert_eq!(config.batch.reference_prefix, "gt_");
        assert_eq!(config.batch.report_file, "quality_report.json");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml("[batch]\nextension = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocr-quality.toml");

        let mut config = Config::default();
        config.batch.extension = "txt".to_string();
        config.save_toml(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/ocr-quality.toml");
        assert_eq!(Config::from_file(path).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/ocr-quality.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
