//! seqalign - Ratcliff/Obershelp sequence matching
//!
//! Aligns two sequences of hashable elements by repeatedly taking the longest
//! contiguous matching block and recursing on the unmatched pieces on either
//! side. The resulting matching blocks drive a similarity ratio and a list of
//! opcodes describing how to turn the first sequence into the second.
//!
//! The ratio is `2 * M / T` where `M` is the number of matched elements and
//! `T` the combined length of both sequences. It is a heuristic similarity,
//! not a normalized edit distance; use [`levenshtein`] when the minimum
//! number of edits is what you need.
//!
//! # Example
//!
//! ```rust
//! use seqalign::{OpTag, SequenceMatcher};
//!
//! let a: Vec<char> = "qabxcd".chars().collect();
//! let b: Vec<char> = "abycdf".chars().collect();
//! let matcher = SequenceMatcher::new(&a, &b);
//!
//! assert!((matcher.ratio() - 2.0 * 4.0 / 12.0).abs() < 1e-12);
//!
//! let tags: Vec<OpTag> = matcher.opcodes().iter().map(|op| op.tag).collect();
//! assert_eq!(
//!     tags,
//!     vec![OpTag::Delete, OpTag::Equal, OpTag::Replace, OpTag::Equal, OpTag::Insert]
//! );
//! ```

mod distance;
mod matcher;

pub use distance::levenshtein;
pub use matcher::{Match, OpTag, Opcode, SequenceMatcher, AUTOJUNK_MIN_LEN};

/// Similarity ratio of two sequences with the default matcher settings.
pub fn ratio<T: Eq + std::hash::Hash>(a: &[T], b: &[T]) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
