//! Settings shared by predictors.

use std::path::{Path, PathBuf};

/// Access to settings shared across the application.
pub trait Settings {
    /// Path of the artifact a predictor is built from.
    fn model_path(&self) -> &Path;
}

/// Settings pointing at a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettings {
    model_path: PathBuf,
}

impl FileSettings {
    /// Create settings for the given model path.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }
}

impl Settings for FileSettings {
    fn model_path(&self) -> &Path {
        &self.model_path
    }
}
