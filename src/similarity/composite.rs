//! Composite scoring of whole-string and word-level distances.

use log::{debug, trace};

use crate::distance::{EditDistanceMetric, levenshtein_distance};
use crate::similarity::config::{
    DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_SIMILARITY_THRESHOLD, ScorerConfig,
};
use crate::similarity::word::{DEFAULT_DELIMITERS, word_similarity_with};

fn blend(distance: f64, words: f64, min_weight: f64, max_weight: f64) -> f64 {
    distance.min(words) * min_weight + distance.max(words) * max_weight
}

/// Composite value of `a` against `b` with the default weights.
///
/// `0.8 * min(D, W) + 0.2 * max(D, W)` where `D` is the Levenshtein distance of
/// the whole strings and `W` the word-level similarity of `a` against `b`.
pub fn composite_value(a: &str, b: &str) -> f64 {
    let distance = levenshtein_distance(a, b);
    let words = word_similarity_with(a, b, DEFAULT_DELIMITERS, EditDistanceMetric::Levenshtein);
    blend(distance, words, DEFAULT_MIN_WEIGHT, DEFAULT_MAX_WEIGHT)
}

/// Check whether the composite value of `a` against `b` is below 14.50.
pub fn is_similar(a: &str, b: &str) -> bool {
    composite_value(a, b) < DEFAULT_SIMILARITY_THRESHOLD
}

/// Check whether `one` is similar to at least one candidate.
///
/// Candidates are tried in iteration order and the scan stops at the first match.
pub fn is_similar_any<I, S>(one: &str, candidates: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .any(|candidate| is_similar(one, candidate.as_ref()))
}

/// Composite scorer driven by a [`ScorerConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeScorer {
    config: ScorerConfig,
}

impl CompositeScorer {
    /// Create a scorer from a configuration.
    pub fn new(config: ScorerConfig) -> Self {
        debug!(
            "Creating composite scorer: metric={}, threshold={}, weights=({}, {})",
            config.metric, config.threshold, config.min_weight, config.max_weight
        );
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Edit distance of the whole strings.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.config.metric.distance(a, b)
    }

    /// Word-level similarity of `a` against `b`.
    pub fn word_similarity(&self, a: &str, b: &str) -> f64 {
        word_similarity_with(a, b, &self.config.delimiters, self.config.metric)
    }

    /// Composite value of `a` against `b`. Lower means closer.
    pub fn value(&self, a: &str, b: &str) -> f64 {
        let distance = self.distance(a, b);
        let words = self.word_similarity(a, b);
        let value = blend(
            distance,
            words,
            self.config.min_weight,
            self.config.max_weight,
        );
        trace!("value({a:?}, {b:?}) = {value} (distance={distance}, words={words})");
        value
    }

    /// Check whether the composite value is below the configured threshold.
    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        self.value(a, b) < self.config.threshold
    }

    /// Check whether `one` is similar to at least one candidate, in iteration order.
    pub fn is_similar_any<I, S>(&self, one: &str, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.first_similar(one, candidates).is_some()
    }

    /// Index of the first candidate similar to `one`.
    pub fn first_similar<I, S>(&self, one: &str, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .position(|candidate| self.is_similar(one, candidate.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_composite_value() {
        assert_eq!(composite_value("add entry", "add entry"), 0.0);
        // D = 11, W = 7
        assert_close(composite_value("add entry", "enter journal"), 7.8);
        // D = 22, W = 8
        assert_close(composite_value("add entry", "completely unrelated text"), 10.8);
        // D = 22, W = 19
        assert_close(composite_value("completely unrelated text", "add entry"), 19.6);
    }

    #[test]
    fn test_composite_value_is_asymmetric() {
        // D = 10 both ways, W = 6 one way and 0 the other
        assert_close(composite_value("one two three", "one"), 6.8);
        assert_close(composite_value("one", "one two three"), 2.0);
    }

    #[test]
    fn test_is_similar() {
        assert!(is_similar("add entry", "enter journal"));
        assert!(is_similar("add entry", "add entry"));
        assert!(!is_similar("completely unrelated text", "add entry"));
        assert!(!is_similar(
            "the quick brown fox jumps over the lazy dog",
            "add entry"
        ));
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(composite_value("", ""), 0.0);
        // D = 9, W = 0
        assert_close(composite_value("", "add entry"), 1.8);
        assert!(is_similar("", "add entry"));
    }

    #[test]
    fn test_is_similar_any() {
        let candidates = ["completely unrelated text", "enter journal"];
        assert!(is_similar_any("add entry", candidates));
        assert!(!is_similar_any(
            "completely unrelated text",
            ["add entry", "enter journal"]
        ));
        assert!(!is_similar_any("add entry", Vec::<String>::new()));
    }

    #[test]
    fn test_scorer_matches_free_functions() {
        let scorer = CompositeScorer::default();
        for (a, b) in [
            ("add entry", "enter journal"),
            ("record a purchase", "add entry"),
            ("one two three", "one"),
        ] {
            assert_eq!(scorer.value(a, b), composite_value(a, b));
            assert_eq!(scorer.is_similar(a, b), is_similar(a, b));
        }
    }

    #[test]
    fn test_scorer_threshold() {
        // value("record a purchase", "add entry") = 13.2
        let scorer = CompositeScorer::default();
        assert!(scorer.is_similar("record a purchase", "add entry"));

        let strict = CompositeScorer::new(ScorerConfig::default().with_threshold(13.0));
        assert!(!strict.is_similar("record a purchase", "add entry"));
        assert_eq!(strict.config().threshold, 13.0);
    }

    #[test]
    fn test_scorer_metric() {
        let scorer = CompositeScorer::new(
            ScorerConfig::default().with_metric(EditDistanceMetric::DamerauLevenshtein),
        );
        assert_eq!(scorer.distance("teh", "the"), 1.0);
        assert_eq!(scorer.word_similarity("teh cat", "the cat"), 1.0);
        assert_close(scorer.value("teh cat", "the cat"), 1.0);
    }

    #[test]
    fn test_first_similar() {
        let scorer = CompositeScorer::default();
        let candidates = vec![
            "completely unrelated text".to_string(),
            "enter journal".to_string(),
            "add entry".to_string(),
        ];

        assert_eq!(
            scorer.first_similar("completely unrelated text", &candidates),
            Some(0)
        );
        assert_eq!(scorer.first_similar("add entry", &candidates), Some(0));
        assert_eq!(
            scorer.first_similar("the quick brown fox jumps over the lazy dog", ["xy"]),
            None
        );
        assert!(scorer.is_similar_any("add entry", &candidates));
    }
}
