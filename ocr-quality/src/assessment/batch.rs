//! Directory-level assessment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{AssessError, ComparisonResult, OcrQualityAssessor};

/// Label used for the averages row
pub const AVERAGE_LABEL: &str = "AVERAGE";

/// Mean accuracies across all assessed pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageScores {
    pub file: String,
    pub character_accuracy: f64,
    pub character_error_rate: f64,
    pub word_accuracy: f64,
    pub word_error_rate: f64,
    pub line_accuracy: f64,
    pub line_error_rate: f64,
}

impl AverageScores {
    /// Arithmetic means over `results`, or `None` when there is nothing to average
    pub fn from_results(results: &[ComparisonResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let n = results.len() as f64;
        let mean = |metric: fn(&ComparisonResult) -> f64| results.iter().map(metric).sum::<f64>() / n;

        let character_accuracy = mean(|r| r.character_accuracy);
        let word_accuracy = mean(|r| r.word_accuracy);
        let line_accuracy = mean(|r| r.line_accuracy);

        Some(Self {
            file: AVERAGE_LABEL.to_string(),
            character_accuracy,
            character_error_rate: 100.0 - character_accuracy,
            word_accuracy,
            word_error_rate: 100.0 - word_accuracy,
            line_accuracy,
            line_error_rate: 100.0 - line_accuracy,
        })
    }
}

/// Results of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// One entry per assessed pair, ordered by reference file name
    pub per_file: Vec<ComparisonResult>,
    /// `None` when no pair could be assessed
    pub averages: Option<AverageScores>,
    /// Reference files without a matching candidate
    #[serde(default)]
    pub skipped: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn new(per_file: Vec<ComparisonResult>, skipped: Vec<String>) -> Self {
        let averages = AverageScores::from_results(&per_file);
        Self {
            per_file,
            averages,
            skipped,
            generated_at: Utc::now(),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, AssessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write to JSON file
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), AssessError> {
        crate::reporting::write_json(self, path)
    }
}

impl OcrQualityAssessor {
    /// Candidate file name for a reference file name.
    ///
    /// The configured prefix is removed when present; otherwise the name is
    /// used unchanged.
    pub fn candidate_name<'n>(&self, reference_name: &'n str) -> &'n str {
        reference_name
            .strip_prefix(self.batch_config().reference_prefix.as_str())
            .unwrap_or(reference_name)
    }

    /// Reference files in `reference_dir` carrying the configured extension,
    /// sorted by name. Hidden files are ignored.
    fn reference_files(&self, reference_dir: &Path) -> Result<Vec<PathBuf>, AssessError> {
        let entries =
            std::fs::read_dir(reference_dir).map_err(|e| AssessError::io(reference_dir, e))?;

        let extension = self.batch_config().extension.as_str();
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| AssessError::io(reference_dir, e))?.path();
            let visible = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| !n.starts_with('.'))
                .unwrap_or(false);
            let matches_ext = path.extension().map(|e| e == extension).unwrap_or(false);
            if visible && matches_ext && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Assess every reference file in `reference_dir` against its counterpart
    /// in `candidate_dir`.
    ///
    /// A reference without a candidate is skipped with a warning. An unreadable
    /// reference directory, or a pair that fails to load, is an error.
    ///
    /// Nothing is written or printed; see [`Self::batch_assess_and_report`].
    pub fn batch_assess(
        &self,
        reference_dir: impl AsRef<Path>,
        candidate_dir: impl AsRef<Path>,
    ) -> Result<BatchReport, AssessError> {
        let reference_dir = reference_dir.as_ref();
        let candidate_dir = candidate_dir.as_ref();

        let mut per_file = Vec::new();
        let mut skipped = Vec::new();

        for reference in self.reference_files(reference_dir)? {
            let Some(name) = reference.file_name().and_then(|n| n.to_str()) else {
                tracing::warn!("Skipping non UTF-8 file name: {}", reference.display());
                continue;
            };

            let candidate = candidate_dir.join(self.candidate_name(name));
            if candidate.is_file() {
                per_file.push(self.assess_pair(&reference, &candidate)?);
            } else {
                tracing::warn!("No OCR output for {} (expected {})", name, candidate.display());
                skipped.push(name.to_string());
            }
        }

        tracing::info!(
            "Assessed {} pair(s), skipped {}",
            per_file.len(),
            skipped.len()
        );
        Ok(BatchReport::new(per_file, skipped))
    }

    /// Run [`Self::batch_assess`], write the JSON report to `report_path` and
    /// print the summary table to stdout.
    pub fn batch_assess_and_report(
        &self,
        reference_dir: impl AsRef<Path>,
        candidate_dir: impl AsRef<Path>,
        report_path: impl AsRef<Path>,
    ) -> Result<BatchReport, AssessError> {
        let report = self.batch_assess(reference_dir, candidate_dir)?;
        report.write_to_file(report_path.as_ref())?;
        crate::reporting::print_batch_table(&report);
        Ok(report)
    }
}

/// Assess a directory pair with default settings
pub fn batch_assess(
    reference_dir: impl AsRef<Path>,
    candidate_dir: impl AsRef<Path>,
) -> Result<BatchReport, AssessError> {
    OcrQualityAssessor::new().batch_assess(reference_dir, candidate_dir)
}
