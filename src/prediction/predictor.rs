//! Predictor trait definition.

use crate::error::Result;
use crate::prediction::types::Prediction;

/// Predictor trait.
///
/// Implementations map free text to a discrete label together with the
/// evaluation metrics of the model that produced it.
pub trait Predictor: Send + Sync {
    /// Predict the label for a given text.
    fn predict(&self, text: &str) -> Result<Prediction>;

    /// Get the name of this predictor for debugging and logging.
    fn name(&self) -> &str;
}
