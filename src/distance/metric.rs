//! Selectable edit distance metric.

use serde::{Deserialize, Serialize};

use crate::distance::{damerau_levenshtein_distance, levenshtein_distance};

/// Edit distance used by word-level and composite scoring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditDistanceMetric {
    /// Insertions, deletions and substitutions.
    #[default]
    Levenshtein,
    /// Levenshtein plus adjacent transpositions.
    DamerauLevenshtein,
}

impl EditDistanceMetric {
    /// Calculate the distance between two strings using this metric.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match self {
            EditDistanceMetric::Levenshtein => levenshtein_distance(a, b),
            EditDistanceMetric::DamerauLevenshtein => damerau_levenshtein_distance(a, b) as f64,
        }
    }

    /// Get the name of this metric.
    pub fn name(&self) -> &'static str {
        match self {
            EditDistanceMetric::Levenshtein => "levenshtein",
            EditDistanceMetric::DamerauLevenshtein => "damerau-levenshtein",
        }
    }
}

impl std::fmt::Display for EditDistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
