//! Pair and batch assessment of OCR output against ground truth

pub mod batch;

pub use batch::{batch_assess, AverageScores, BatchReport};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analysis::{ScorerOptions, TextScorer};
use crate::config::{BatchConfig, Config};

/// Error type for assessment runs
#[derive(Debug, thiserror::Error)]
pub enum AssessError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl AssessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssessError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Scores for one reference/candidate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Reference file name
    pub file: String,
    pub character_accuracy: f64,
    pub character_error_rate: f64,
    pub word_accuracy: f64,
    pub word_error_rate: f64,
    pub line_accuracy: f64,
    pub line_error_rate: f64,
    pub insertion_errors: usize,
    pub deletion_errors: usize,
    pub substitution_errors: usize,
    /// Character-level Levenshtein distance, independent of the accuracies
    pub edit_distance: usize,
}

/// Runs the scorer over files and directories
#[derive(Debug, Clone, Default)]
pub struct OcrQualityAssessor {
    scorer: TextScorer,
    batch: BatchConfig,
}

impl OcrQualityAssessor {
    /// Create an assessor with default scoring and batch settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            scorer: TextScorer::with_options(config.scorer_options()),
            batch: config.batch.clone(),
        }
    }

    pub fn with_options(mut self, options: ScorerOptions) -> Self {
        self.scorer = TextScorer::with_options(options);
        self
    }

    pub fn with_batch_config(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    pub fn scorer(&self) -> &TextScorer {
        &self.scorer
    }

    pub fn batch_config(&self) -> &BatchConfig {
        &self.batch
    }

    /// Read a UTF-8 text file, trimmed
    pub fn load_file(path: impl AsRef<Path>) -> Result<String, AssessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AssessError::io(path, e))?;
        Ok(content.trim().to_string())
    }

    /// Score two in-memory texts
    pub fn assess_texts(
        &self,
        file: impl Into<String>,
        reference: &str,
        candidate: &str,
    ) -> ComparisonResult {
        let chars = self.scorer.character_accuracy(reference, candidate);
        let words = self.scorer.word_accuracy(reference, candidate);
        let lines = self.scorer.line_accuracy(reference, candidate);

        ComparisonResult {
            file: file.into(),
            character_accuracy: chars.accuracy,
            character_error_rate: chars.error_rate,
            word_accuracy: words.accuracy,
            word_error_rate: words.error_rate,
            line_accuracy: lines.accuracy,
            line_error_rate: lines.error_rate,
            insertion_errors: chars.insertions,
            deletion_errors: chars.deletions,
            substitution_errors: chars.substitutions,
            edit_distance: self.scorer.edit_distance(reference, candidate),
        }
    }

    /// Load and score a reference/candidate file pair.
    ///
    /// The result is tagged with the reference file's name.
    pub fn assess_pair(
        &self,
        reference_path: impl AsRef<Path>,
        candidate_path: impl AsRef<Path>,
    ) -> Result<ComparisonResult, AssessError> {
        let reference_path = reference_path.as_ref();
        let candidate_path = candidate_path.as_ref();

        let reference = Self::load_file(reference_path)?;
        let candidate = Self::load_file(candidate_path)?;

        let file = reference_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| reference_path.display().to_string());

        let result = self.assess_texts(file, &reference, &candidate);
        tracing::debug!(
            "{}: char {:.2}%, word {:.2}%, line {:.2}%",
            result.file,
            result.character_accuracy,
            result.word_accuracy,
            result.line_accuracy
        );
        Ok(result)
    }
}

/// Assess one pair with default settings
pub fn assess_pair(
    reference_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
) -> Result<ComparisonResult, AssessError> {
    OcrQualityAssessor::new().assess_pair(reference_path, candidate_path)
}
