//! Character, word and line accuracy

use std::hash::Hash;

use seqalign::{levenshtein, OpTag, SequenceMatcher};
use serde::{Deserialize, Serialize};

use super::normalize::{lines, normalize, words};

/// Character-level score with edit span counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterScore {
    /// Similarity ratio as a percentage (0.0 - 100.0)
    pub accuracy: f64,
    /// `100.0 - accuracy`
    pub error_rate: f64,
    /// Number of insert spans
    pub insertions: usize,
    /// Number of delete spans
    pub deletions: usize,
    /// Number of replace spans
    pub substitutions: usize,
}

/// Word- or line-level score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GranularScore {
    pub accuracy: f64,
    pub error_rate: f64,
}

impl GranularScore {
    fn from_ratio(ratio: f64) -> Self {
        let accuracy = ratio * 100.0;
        Self {
            accuracy,
            error_rate: 100.0 - accuracy,
        }
    }
}

/// Options for the underlying sequence matcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerOptions {
    /// Drop elements occurring in more than 1% of a long candidate from the
    /// match index. Faster on large documents, but identical texts made of a
    /// few repeated symbols no longer score 100%.
    ///
    /// Off by default, unlike the classic difflib matcher where it is on, so
    /// long documents score differently than under that default.
    pub autojunk: bool,
}

/// Scores a candidate text against a reference text
#[derive(Debug, Clone, Default)]
pub struct TextScorer {
    options: ScorerOptions,
}

impl TextScorer {
    /// Create a scorer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom matcher options
    pub fn with_options(options: ScorerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScorerOptions {
        self.options
    }

    /// Align the normalized character sequences.
    ///
    /// Edit spans are counted once per contiguous opcode, not per character,
    /// and always describe the reference -> candidate direction.
    pub fn character_accuracy(&self, reference: &str, candidate: &str) -> CharacterScore {
        let reference: Vec<char> = normalize(reference).chars().collect();
        let candidate: Vec<char> = normalize(candidate).chars().collect();

        let forward = SequenceMatcher::with_autojunk(&reference, &candidate, self.options.autojunk);
        let ratio = self.symmetric_ratio(&forward, &reference, &candidate);

        let (mut insertions, mut deletions, mut substitutions) = (0, 0, 0);
        for op in forward.opcodes() {
            match op.tag {
                OpTag::Insert => insertions += 1,
                OpTag::Delete => deletions += 1,
                OpTag::Replace => substitutions += 1,
                OpTag::Equal => {}
            }
        }

        let GranularScore { accuracy, error_rate } = GranularScore::from_ratio(ratio);
        CharacterScore {
            accuracy,
            error_rate,
            insertions,
            deletions,
            substitutions,
        }
    }

    /// Align the normalized word sequences
    pub fn word_accuracy(&self, reference: &str, candidate: &str) -> GranularScore {
        self.sequence_score(&words(reference), &words(candidate))
    }

    /// Align the sequences of non-blank normalized lines
    pub fn line_accuracy(&self, reference: &str, candidate: &str) -> GranularScore {
        self.sequence_score(&lines(reference), &lines(candidate))
    }

    /// Levenshtein distance between the normalized character sequences
    pub fn edit_distance(&self, reference: &str, candidate: &str) -> usize {
        let reference: Vec<char> = normalize(reference).chars().collect();
        let candidate: Vec<char> = normalize(candidate).chars().collect();
        levenshtein(&reference, &candidate)
    }

    fn sequence_score<T: Eq + Hash>(&self, reference: &[T], candidate: &[T]) -> GranularScore {
        let forward = SequenceMatcher::with_autojunk(reference, candidate, self.options.autojunk);
        GranularScore::from_ratio(self.symmetric_ratio(&forward, reference, candidate))
    }

    /// Block selection breaks ties by position, so the two orientations can
    /// disagree ("tide" vs "diet"). Report the better of the two.
    fn symmetric_ratio<T: Eq + Hash>(
        &self,
        forward: &SequenceMatcher<'_, T>,
        reference: &[T],
        candidate: &[T],
    ) -> f64 {
        let ratio = forward.ratio();
        if ratio == 1.0 {
            return ratio;
        }
        let reverse = SequenceMatcher::with_autojunk(candidate, reference, self.options.autojunk);
        ratio.max(reverse.ratio())
    }
}
