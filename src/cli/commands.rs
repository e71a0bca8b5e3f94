//! Command implementations for the textsim CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::prediction::{FileSettings, Predictor, SimilarityPredictor};
use crate::reliability::PredictionMetrics;
use crate::similarity::{CompositeScorer, ParallelConfig, ParallelMatcher, ScorerConfig};

/// Execute a CLI command.
pub fn execute_command(args: TextsimArgs) -> Result<()> {
    match &args.command {
        Command::Distance(pair_args) => distance(pair_args, &args),
        Command::Words(pair_args) => words(pair_args, &args),
        Command::Score(pair_args) => score(pair_args, &args),
        Command::Similar(similar_args) => similar(similar_args, &args),
        Command::Reliable(reliable_args) => reliable(reliable_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
    }
}

/// Build the scorer configuration from the config file and command line overrides.
pub fn load_scorer_config(args: &TextsimArgs) -> Result<ScorerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Using scorer configuration {}", path.display());
            ScorerConfig::from_file(path)?
        }
        None => ScorerConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(metric) = args.metric {
        config = config.with_metric(metric.into());
    }

    config.validate()?;
    debug!("Effective scorer configuration: {config:?}");
    Ok(config)
}

fn build_scorer(args: &TextsimArgs) -> Result<CompositeScorer> {
    Ok(CompositeScorer::new(load_scorer_config(args)?))
}

fn distance(pair: &PairArgs, cli_args: &TextsimArgs) -> Result<()> {
    let scorer = build_scorer(cli_args)?;

    output_result(
        "Edit distance",
        &DistanceResult {
            metric: scorer.config().metric.name().to_string(),
            distance: scorer.distance(&pair.a, &pair.b),
        },
        cli_args,
    )
}

fn words(pair: &PairArgs, cli_args: &TextsimArgs) -> Result<()> {
    let scorer = build_scorer(cli_args)?;

    output_result(
        "Word similarity",
        &WordSimilarityResult {
            word_similarity: scorer.word_similarity(&pair.a, &pair.b),
        },
        cli_args,
    )
}

fn score(pair: &PairArgs, cli_args: &TextsimArgs) -> Result<()> {
    let scorer = build_scorer(cli_args)?;
    let value = scorer.value(&pair.a, &pair.b);
    let threshold = scorer.config().threshold;

    output_result(
        "Composite score",
        &ScoreResult {
            distance: scorer.distance(&pair.a, &pair.b),
            word_similarity: scorer.word_similarity(&pair.a, &pair.b),
            value,
            threshold,
            similar: value < threshold,
        },
        cli_args,
    )
}

fn similar(similar_args: &SimilarArgs, cli_args: &TextsimArgs) -> Result<()> {
    let scorer = build_scorer(cli_args)?;
    let one = similar_args.one.as_str();
    let candidates = similar_args.candidates.as_slice();

    let (first_match, values) = if similar_args.parallel {
        let config = ParallelConfig {
            thread_pool_size: similar_args.threads,
        };
        let matcher = ParallelMatcher::new(scorer.clone(), config)?;
        info!(
            "Scoring {} candidates on {} threads",
            candidates.len(),
            matcher.num_threads()
        );
        (
            matcher.first_similar(one, candidates),
            matcher.score_all(one, candidates),
        )
    } else {
        let values = candidates
            .iter()
            .map(|candidate| scorer.value(one, candidate))
            .collect::<Vec<_>>();
        (scorer.first_similar(one, candidates), values)
    };

    let threshold = scorer.config().threshold;
    let scores = candidates
        .iter()
        .zip(values)
        .map(|(candidate, value)| CandidateScore {
            candidate: candidate.clone(),
            value,
            similar: value < threshold,
        })
        .collect();

    output_result(
        "Candidate similarity",
        &SimilarResult {
            similar: first_match.is_some(),
            first_match,
            candidates: scores,
        },
        cli_args,
    )
}

fn reliable(reliable_args: &ReliableArgs, cli_args: &TextsimArgs) -> Result<()> {
    let metrics = PredictionMetrics::new(
        reliable_args.micro,
        reliable_args.macro_accuracy,
        reliable_args.loss,
        reliable_args.reduction,
    );

    output_result(
        "Reliability verdict",
        &ReliabilityResult {
            metrics,
            within_bounds: metrics.within_bounds(),
            default_metrics: metrics.is_default(),
            reliable: metrics.is_reliable(),
        },
        cli_args,
    )
}

fn predict(predict_args: &PredictArgs, cli_args: &TextsimArgs) -> Result<()> {
    let settings = FileSettings::new(&predict_args.lexicon);
    let predictor = SimilarityPredictor::from_settings(&settings, build_scorer(cli_args)?)?;
    debug!(
        "Predicting with {} predictor over {} samples",
        predictor.name(),
        predictor.samples().len()
    );

    let prediction = predictor.predict(&predict_args.text)?;
    let reliable = prediction.is_reliable();

    output_result(
        "Prediction",
        &PredictionResult {
            prediction,
            reliable,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::EditDistanceMetric;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_scorer_config_defaults() {
        let args = TextsimArgs::try_parse_from(["textsim", "score", "a", "b"]).unwrap();
        let config = load_scorer_config(&args).unwrap();
        assert_eq!(config, ScorerConfig::default());
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"threshold": 9.0, "delimiters": [" ", "-"]}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = TextsimArgs::try_parse_from([
            "textsim",
            "--config",
            path.as_str(),
            "score",
            "a",
            "b",
        ])
        .unwrap();
        let config = load_scorer_config(&args).unwrap();
        assert_eq!(config.threshold, 9.0);
        assert_eq!(config.delimiters, vec![' ', '-']);

        let args = TextsimArgs::try_parse_from([
            "textsim",
            "--config",
            path.as_str(),
            "--threshold",
            "3.5",
            "--metric",
            "damerau-levenshtein",
            "score",
            "a",
            "b",
        ])
        .unwrap();
        let config = load_scorer_config(&args).unwrap();
        assert_eq!(config.threshold, 3.5);
        assert_eq!(config.metric, EditDistanceMetric::DamerauLevenshtein);
        assert_eq!(config.delimiters, vec![' ', '-']);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args =
            TextsimArgs::try_parse_from(["textsim", "--threshold", "inf", "score", "a", "b"])
                .unwrap();
        assert!(load_scorer_config(&args).is_err());
    }

    #[test]
    fn test_execute_commands() {
        let mut lexicon = NamedTempFile::new().unwrap();
        write!(
            lexicon,
            r#"[{{"text": "add entry", "label": "Entry"}}, {{"text": "add expense", "label": "Expense"}}]"#
        )
        .unwrap();
        let lexicon_path = lexicon.path().to_string_lossy().to_string();

        let invocations: Vec<Vec<&str>> = vec![
            vec!["textsim", "-q", "distance", "ab", "ba"],
            vec!["textsim", "-q", "words", "add entry", "enter journal"],
            vec!["textsim", "-q", "--format", "json", "score", "add entry", "enter journal"],
            vec!["textsim", "-q", "similar", "add entry", "enter journal", "xy"],
            vec!["textsim", "-q", "similar", "add entry", "enter journal", "--parallel"],
            vec!["textsim", "-q", "--format", "csv", "reliable", "0", "0", "0", "0"],
            vec![
                "textsim",
                "-q",
                "predict",
                "--lexicon",
                lexicon_path.as_str(),
                "add entries",
            ],
        ];

        for argv in invocations {
            let args = TextsimArgs::try_parse_from(&argv).unwrap();
            assert!(execute_command(args).is_ok(), "failed: {argv:?}");
        }
    }

    #[test]
    fn test_predict_missing_lexicon() {
        let args = TextsimArgs::try_parse_from([
            "textsim",
            "predict",
            "--lexicon",
            "/nonexistent/lexicon.json",
            "add entry",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
