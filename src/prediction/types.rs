//! Common types for prediction.

use serde::{Deserialize, Serialize};

use crate::reliability::PredictionMetrics;

/// One labeled lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Sample text.
    pub text: String,
    /// Label predicted for text close to this sample.
    pub label: String,
}

impl IntentSample {
    /// Create a new sample.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// The result of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The predicted label.
    pub value: String,
    /// Evaluation metrics of the model behind the prediction.
    #[serde(default)]
    pub metrics: PredictionMetrics,
}

impl Prediction {
    /// Create a prediction with the zero metrics of an unevaluated model.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            metrics: PredictionMetrics::default(),
        }
    }

    /// Attach evaluation metrics.
    pub fn with_metrics(mut self, metrics: PredictionMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Whether the prediction's metrics can be trusted.
    pub fn is_reliable(&self) -> bool {
        self.metrics.is_reliable()
    }
}
