//! OCR Quality Assessment
//!
//! Scores extracted text (typically OCR output) against a ground-truth
//! reference at three granularities, using Ratcliff/Obershelp sequence
//! alignment from [`seqalign`].
//!
//! # Features
//!
//! - Character, word and line accuracy with complementary error rates
//! - Character-level edit span counts (insertions, deletions, substitutions)
//! - Levenshtein edit distance reported alongside the similarity ratios
//! - Batch assessment of a ground-truth directory against an output directory
//! - JSON reports and console tables
//!
//! # Example
//!
//! ```rust
//! use ocr_quality::analysis::TextScorer;
//!
//! let scorer = TextScorer::new();
//!
//! let chars = scorer.character_accuracy("Hello   World", "hello world");
//! assert_eq!(chars.accuracy, 100.0);
//! assert_eq!(chars.error_rate, 0.0);
//!
//! let words = scorer.word_accuracy("the quick brown fox", "the quick fox");
//! assert!((words.accuracy - 600.0 / 7.0).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod assessment;
pub mod config;
pub mod reporting;

pub use config::Config;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::analysis::{
        normalize, CharacterScore, GranularScore, ScorerOptions, TextScorer,
    };
    pub use crate::assessment::{
        assess_pair, batch_assess, AssessError, AverageScores, BatchReport, ComparisonResult,
        OcrQualityAssessor,
    };
    pub use crate::config::{BatchConfig, Config, ConfigError, ScoringConfig};
    pub use crate::reporting::{print_batch_table, print_pair_report, BatchTable, PairReport, QualityGrade};
}
