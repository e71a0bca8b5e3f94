//! Word-level similarity aggregation.

use crate::distance::EditDistanceMetric;

/// Characters that separate words unless a scorer is configured otherwise.
pub const DEFAULT_DELIMITERS: &[char] = &[' '];

/// Split text on any of the delimiter characters, dropping empty tokens.
pub fn split_words<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(&c))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Sum, over every word of `a`, the Levenshtein distance to its closest word in `b`.
///
/// Words are separated by single spaces. The measure is asymmetric: swapping
/// the arguments generally changes the result.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    word_similarity_with(a, b, DEFAULT_DELIMITERS, EditDistanceMetric::Levenshtein)
}

/// Word-level similarity with explicit delimiters and distance metric.
///
/// Each word of `a` starts from an upper bound equal to the character length of
/// the whole of `b`, which is also what it contributes when `b` has no words.
/// Candidates from `b` are scanned in order and only a strictly smaller
/// distance replaces the current best, so the first minimum wins. The scan
/// stops at the first exact match.
pub fn word_similarity_with(
    a: &str,
    b: &str,
    delimiters: &[char],
    metric: EditDistanceMetric,
) -> f64 {
    let words_b = split_words(b, delimiters);
    let upper_bound = b.chars().count() as f64;

    let mut total = 0.0;
    for word_a in split_words(a, delimiters) {
        let mut best = upper_bound;

        for word_b in &words_b {
            let distance = metric.distance(word_a, word_b);
            if distance < best {
                best = distance;
            }
            if distance == 0.0 {
                break;
            }
        }

        total += best;
    }

    total
}
