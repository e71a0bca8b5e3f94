//! Lexicon-based predictor using composite similarity.

use std::path::Path;

use log::{debug, trace};

use crate::error::{Result, TextsimError};
use crate::prediction::predictor::Predictor;
use crate::prediction::settings::Settings;
use crate::prediction::types::{IntentSample, Prediction};
use crate::similarity::CompositeScorer;

/// Load lexicon samples from a JSON file holding an array of samples.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<IntentSample>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<IntentSample> = serde_json::from_str(&content)?;
    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Predicts the label of the closest similar lexicon sample.
///
/// Nothing is learned: the lexicon is scanned in order and the sample with the
/// lowest composite value below the scorer's threshold wins. The first sample
/// reaching that value is kept. Predictions carry zero metrics.
#[derive(Debug, Clone)]
pub struct SimilarityPredictor {
    samples: Vec<IntentSample>,
    scorer: CompositeScorer,
}

impl SimilarityPredictor {
    /// Create a predictor with the default scorer.
    pub fn new(samples: Vec<IntentSample>) -> Result<Self> {
        Self::with_scorer(samples, CompositeScorer::default())
    }

    /// Create a predictor with a custom scorer.
    pub fn with_scorer(samples: Vec<IntentSample>, scorer: CompositeScorer) -> Result<Self> {
        if samples.is_empty() {
            return Err(TextsimError::invalid_argument(
                "lexicon must contain at least one sample",
            ));
        }

        Ok(Self { samples, scorer })
    }

    /// Create a predictor from the lexicon file named by the settings.
    pub fn from_settings(settings: &dyn Settings, scorer: CompositeScorer) -> Result<Self> {
        let samples = load_samples(settings.model_path())?;
        Self::with_scorer(samples, scorer)
    }

    /// Get the lexicon samples.
    pub fn samples(&self) -> &[IntentSample] {
        &self.samples
    }

    /// Find the closest similar sample and its composite value.
    pub fn closest(&self, text: &str) -> Option<(&IntentSample, f64)> {
        let threshold = self.scorer.config().threshold;
        let mut best: Option<(&IntentSample, f64)> = None;

        for sample in &self.samples {
            let value = self.scorer.value(text, &sample.text);
            if value >= threshold {
                continue;
            }
            if best.is_none_or(|(_, best_value)| value < best_value) {
                best = Some((sample, value));
            }
        }

        best
    }
}

impl Predictor for SimilarityPredictor {
    fn predict(&self, text: &str) -> Result<Prediction> {
        match self.closest(text) {
            Some((sample, value)) => {
                trace!("{text:?} matched {:?} with value {value}", sample.text);
                Ok(Prediction::new(sample.label.clone()))
            }
            None => Err(TextsimError::prediction(format!(
                "no lexicon sample is similar to {text:?}"
            ))),
        }
    }

    fn name(&self) -> &str {
        "similarity"
    }
}
