//! Results reporting

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::assessment::{AssessError, BatchReport, ComparisonResult};

/// Coarse quality band for a character accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityGrade {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 98.0 {
            QualityGrade::Excellent
        } else if accuracy >= 95.0 {
            QualityGrade::Good
        } else if accuracy >= 90.0 {
            QualityGrade::Fair
        } else {
            QualityGrade::Poor
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityGrade::Excellent => "Excellent",
            QualityGrade::Good => "Good",
            QualityGrade::Fair => "Fair",
            QualityGrade::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Write any report value as pretty-printed JSON
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<(), AssessError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| AssessError::io(path, e))
}

const BATCH_HEADERS: [&str; 4] = ["File", "Char Acc (%)", "Word Acc (%)", "Line Acc (%)"];

/// Batch table: one row per file plus an `AVERAGE` row
pub struct BatchTable<'a>(pub &'a BatchReport);

impl fmt::Display for BatchTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let mut rows: Vec<(&str, f64, f64, f64)> = report
            .per_file
            .iter()
            .map(|r| (r.file.as_str(), r.character_accuracy, r.word_accuracy, r.line_accuracy))
            .collect();
        if let Some(avg) = &report.averages {
            rows.push((avg.file.as_str(), avg.character_accuracy, avg.word_accuracy, avg.line_accuracy));
        }

        let name_width = rows
            .iter()
            .map(|row| row.0.chars().count())
            .chain(std::iter::once(BATCH_HEADERS[0].len()))
            .max()
            .unwrap_or(0);
        let num_width = BATCH_HEADERS[1].len();
        let rule = "-".repeat(name_width + 3 * (num_width + 2));

        writeln!(
            f,
            "{:<name_width$}  {:>num_width$}  {:>num_width$}  {:>num_width$}",
            BATCH_HEADERS[0], BATCH_HEADERS[1], BATCH_HEADERS[2], BATCH_HEADERS[3],
        )?;
        writeln!(f, "{}", rule)?;

        let averages_at = report.per_file.len();
        for (i, (file, chars, words, lines)) in rows.iter().enumerate() {
            if i == averages_at && i > 0 {
                writeln!(f, "{}", rule)?;
            }
            writeln!(
                f,
                "{:<name_width$}  {:>num_width$.2}  {:>num_width$.2}  {:>num_width$.2}",
                file, chars, words, lines,
            )?;
        }
        writeln!(f, "{}", rule)
    }
}

/// Render the batch table to a string
pub fn render_batch_table(report: &BatchReport) -> String {
    BatchTable(report).to_string()
}

/// Print the batch table to stdout
pub fn print_batch_table(report: &BatchReport) {
    println!("\n=== OCR Quality Report ===\n");
    if report.per_file.is_empty() {
        println!("No OCR outputs matched any ground-truth file.");
    }
    print!("{}", BatchTable(report));
    if !report.skipped.is_empty() {
        println!("\nSkipped (no OCR output): {}", report.skipped.join(", "));
    }
}

/// Detailed report for a single pair
pub struct PairReport<'a>(pub &'a ComparisonResult);

impl fmt::Display for PairReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "=== OCR Quality Report ===\n")?;
        writeln!(f, "File:  {}", result.file)?;
        writeln!(f, "Grade: {}\n", QualityGrade::from_accuracy(result.character_accuracy))?;

        writeln!(f, "{:<12} {:>14} {:>16}", "Level", "Accuracy (%)", "Error Rate (%)")?;
        writeln!(f, "{:-<44}", "")?;
        for (level, accuracy, error_rate) in [
            ("Character", result.character_accuracy, result.character_error_rate),
            ("Word", result.word_accuracy, result.word_error_rate),
            ("Line", result.line_accuracy, result.line_error_rate),
        ] {
            writeln!(f, "{:<12} {:>14.2} {:>16.2}", level, accuracy, error_rate)?;
        }
        writeln!(f, "{:-<44}", "")?;

        writeln!(f, "\nCharacter edit spans:")?;
        writeln!(f, "  Insertions:    {}", result.insertion_errors)?;
        writeln!(f, "  Deletions:     {}", result.deletion_errors)?;
        writeln!(f, "  Substitutions: {}", result.substitution_errors)?;
        writeln!(f, "  Edit distance: {}", result.edit_distance)
    }
}

/// Render the detailed report for a single pair
pub fn render_pair_report(result: &ComparisonResult) -> String {
    PairReport(result).to_string()
}

/// Print the detailed single-pair report to stdout
pub fn print_pair_report(result: &ComparisonResult) {
    print!("{}", PairReport(result));
}
