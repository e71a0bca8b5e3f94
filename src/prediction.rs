//! Predictions and the interfaces of the components that produce them.
//!
//! A [`Predictor`] maps free text to a label and attaches the evaluation
//! [`PredictionMetrics`](crate::reliability::PredictionMetrics) of whatever
//! produced it, so callers can ask [`Prediction::is_reliable`] before acting.
//!
//! # Architecture
//!
//! - `Settings` trait: locates the artifact a predictor is built from
//! - `Predictor` trait: common interface for all predictors
//! - `SimilarityPredictor`: nearest-sample lookup over a labeled lexicon
//! - `IntentSample`: one labeled lexicon entry
//!
//! # Example
//!
//! ```
//! use textsim::prediction::{IntentSample, Predictor, SimilarityPredictor};
//!
//! # fn main() -> textsim::error::Result<()> {
//! let samples = vec![
//!     IntentSample::new("add entry", "Entry"),
//!     IntentSample::new("add expense", "Expense"),
//! ];
//!
//! let predictor = SimilarityPredictor::new(samples)?;
//! let prediction = predictor.predict("add entries")?;
//! assert_eq!(prediction.value, "Entry");
//! assert!(prediction.is_reliable());
//! # Ok(())
//! # }
//! ```

mod predictor;
mod settings;
mod similarity_predictor;
mod types;

pub use predictor::Predictor;
pub use settings::{FileSettings, Settings};
pub use similarity_predictor::{SimilarityPredictor, load_samples};
pub use types::{IntentSample, Prediction};
