//! # textsim
//!
//! String similarity and prediction reliability scoring.
//!
//! ## Features
//!
//! - Levenshtein and Damerau-Levenshtein edit distance
//! - Word-level similarity with configurable delimiters
//! - Composite scoring with a tunable similarity threshold
//! - Parallel matching of one string against many candidates
//! - ULP-based float comparison and reliability verdicts for model metrics
//! - Lexicon-based prediction

pub mod cli;
pub mod distance;
pub mod error;
pub mod prediction;
pub mod reliability;
pub mod similarity;
pub mod util;

pub mod prelude {
    pub use crate::distance::{
        EditDistanceMetric, damerau_levenshtein_distance, levenshtein_distance,
    };
    pub use crate::error::{Result, TextsimError};
    pub use crate::prediction::{IntentSample, Prediction, Predictor, SimilarityPredictor};
    pub use crate::reliability::{PredictionMetrics, is_reliable};
    pub use crate::similarity::{
        CompositeScorer, ParallelConfig, ParallelMatcher, ScorerConfig, composite_value,
        is_similar, is_similar_any, word_similarity,
    };
    pub use crate::util::float::{is_nearly_equal, is_zero};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
