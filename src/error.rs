//! Error types for the textsim library.
//!
//! The distance and scoring kernels are total functions and never fail. Errors
//! only surface from the edges of the crate: configuration loading, thread pool
//! construction, lexicon loading, prediction and the command line interface.
//!
//! # Examples
//!
//! ```
//! use textsim::error::{TextsimError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextsimError::invalid_argument("threshold must be finite"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textsim operations.
#[derive(Error, Debug)]
pub enum TextsimError {
    /// I/O errors (reading configuration or lexicon files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Prediction errors
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Internal errors (thread pool construction, etc.)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextsimError.
pub type Result<T> = std::result::Result<T, TextsimError>;

impl TextsimError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextsimError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextsimError::InvalidArgument(msg.into())
    }

    /// Create a new prediction error.
    pub fn prediction<S: Into<String>>(msg: S) -> Self {
        TextsimError::Prediction(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        TextsimError::Internal(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TextsimError::Other(msg.into())
    }
}
