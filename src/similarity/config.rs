//! Configuration for composite similarity scoring.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::distance::EditDistanceMetric;
use crate::error::{Result, TextsimError};
use crate::similarity::word::DEFAULT_DELIMITERS;

/// Composite value below which two strings are considered similar.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 14.50;

/// Weight applied to the smaller of the whole-string and word-level distances.
pub const DEFAULT_MIN_WEIGHT: f64 = 0.8;

/// Weight applied to the larger of the whole-string and word-level distances.
pub const DEFAULT_MAX_WEIGHT: f64 = 0.2;

/// Configuration for [`CompositeScorer`](crate::similarity::CompositeScorer).
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Strings whose composite value is strictly below this are similar.
    pub threshold: f64,
    /// Weight for the smaller distance.
    pub min_weight: f64,
    /// Weight for the larger distance.
    pub max_weight: f64,
    /// Characters that separate words.
    pub delimiters: Vec<char>,
    /// Edit distance used for whole strings and word pairs.
    pub metric: EditDistanceMetric,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            metric: EditDistanceMetric::default(),
        }
    }
}

impl ScorerConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading scorer configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ScorerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the edit distance metric.
    pub fn with_metric(mut self, metric: EditDistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the word delimiters.
    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Check that the configuration can produce meaningful scores.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(TextsimError::config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }

        for (name, weight) in [("min_weight", self.min_weight), ("max_weight", self.max_weight)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(TextsimError::config(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        if self.delimiters.is_empty() {
            return Err(TextsimError::config("at least one word delimiter is required"));
        }

        Ok(())
    }
}

/// Configuration for [`ParallelMatcher`](crate::similarity::ParallelMatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Number of worker threads (defaults to the number of CPUs).
    pub thread_pool_size: Option<usize>,
}

impl ParallelConfig {
    /// Create a configuration with a fixed number of worker threads.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            thread_pool_size: Some(threads),
        }
    }
}
