//! Composite string similarity.
//!
//! Scores blend a whole-string edit distance with a word-level aggregate:
//! every word of the first string is matched against its closest word in the
//! second, and the per-word distances are summed. The smaller of the two
//! measures carries most of the weight, so a short command still matches a
//! longer phrasing of the same intent.
//!
//! # Example
//!
//! ```
//! use textsim::similarity::{composite_value, is_similar, word_similarity};
//!
//! assert_eq!(word_similarity("add entry", "add entry"), 0.0);
//! assert!(composite_value("add entry", "enter journal") < 14.5);
//! assert!(is_similar("add entry", "enter journal"));
//! ```

pub mod composite;
pub mod config;
pub mod parallel;
pub mod word;

pub use composite::{CompositeScorer, composite_value, is_similar, is_similar_any};
pub use config::{ParallelConfig, ScorerConfig};
pub use parallel::ParallelMatcher;
pub use word::{DEFAULT_DELIMITERS, split_words, word_similarity, word_similarity_with};
