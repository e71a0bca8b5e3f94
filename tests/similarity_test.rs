//! Integration tests for distance and composite similarity scoring.

use textsim::prelude::*;
use textsim::similarity::split_words;

#[test]
fn test_distance_properties() {
    let samples = [
        "",
        "add",
        "add entry",
        "enter journal",
        "create day-by-day",
        "record purchases",
    ];

    for a in samples {
        assert_eq!(levenshtein_distance(a, a), 0.0);
        assert_eq!(damerau_levenshtein_distance(a, a), 0);
        assert_eq!(levenshtein_distance("", a), a.chars().count() as f64);

        for b in samples {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
            assert_eq!(
                damerau_levenshtein_distance(a, b),
                damerau_levenshtein_distance(b, a)
            );
            assert!(damerau_levenshtein_distance(a, b) as f64 <= levenshtein_distance(a, b));
        }
    }
}

#[test]
fn test_transposition_sensitivity() {
    assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
    assert_eq!(levenshtein_distance("ab", "ba"), 2.0);
}

#[test]
fn test_word_similarity_of_identical_phrases() {
    assert_eq!(word_similarity("add entry", "add entry"), 0.0);
}

#[test]
fn test_composite_value_asymmetry() {
    // The first string has more words than the second
    let forward = composite_value("please add entry", "add entry");
    let backward = composite_value("add entry", "please add entry");
    assert_ne!(forward, backward);
    assert!(backward < forward);
}

#[test]
fn test_similarity_verdicts() {
    assert!(is_similar("add entry", "enter journal"));
    assert!(!is_similar("completely unrelated text", "add entry"));

    // Short inputs against long ones stay under the threshold because each
    // word of the short input finds a close word in the long one.
    assert!(is_similar("add entry", "completely unrelated text"));
}

#[test]
fn test_similar_to_any_candidate() {
    let candidates = vec![
        "expense report for march".to_string(),
        "enter journal".to_string(),
    ];
    assert!(is_similar_any("add entry", &candidates));
    assert!(!is_similar_any("completely unrelated text", &candidates));
}

#[test]
fn test_configured_scorer() {
    let config = ScorerConfig::default()
        .with_delimiters(vec![' ', '-'])
        .with_metric(EditDistanceMetric::DamerauLevenshtein);
    let scorer = CompositeScorer::new(config);

    assert_eq!(split_words("add day-by-day", &scorer.config().delimiters).len(), 4);
    assert_eq!(scorer.word_similarity("day by day", "day-by-day"), 0.0);
    assert_eq!(scorer.distance("add entyr", "add entry"), 1.0);
}

#[test]
fn test_parallel_matcher_agrees_with_sequential() {
    let scorer = CompositeScorer::default();
    let matcher = ParallelMatcher::new(scorer.clone(), ParallelConfig::with_threads(4)).unwrap();

    let candidates: Vec<String> = [
        "the quick brown fox jumps over the lazy dog",
        "expense report for march",
        "enter journal",
        "add diary",
        "record purchase",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for one in ["add entry", "completely unrelated text", "add diary"] {
        assert_eq!(
            matcher.any_similar(one, &candidates),
            scorer.is_similar_any(one, &candidates)
        );
        assert_eq!(
            matcher.first_similar(one, &candidates),
            scorer.first_similar(one, &candidates)
        );

        let expected: Vec<f64> = candidates.iter().map(|c| scorer.value(one, c)).collect();
        assert_eq!(matcher.score_all(one, &candidates), expected);
    }
}
