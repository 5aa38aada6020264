//! Text alignment scoring

pub mod normalize;
pub mod scorer;

pub use normalize::{lines, normalize, words};
pub use scorer::{CharacterScore, GranularScore, ScorerOptions, TextScorer};
