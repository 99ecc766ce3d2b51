use std::{fmt, path::PathBuf};

/// Errors that can occur while loading the model artifact.
///
/// Either one disables predictions for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// There's no file at the expected location.
    NotFound { path: PathBuf },
    /// The file exists but doesn't hold a usable model.
    DeserializationFailed { path: PathBuf, reason: String },
}

impl LoadError {
    /// The file name the error refers to, as shown to the user.
    pub fn file_name(&self) -> String {
        let path = match self {
            Self::NotFound { path } | Self::DeserializationFailed { path, .. } => path,
        };

        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { .. } => write!(
                f,
                "Error: '{}' not found. Please save your model first!",
                self.file_name()
            ),
            Self::DeserializationFailed { reason, .. } => write!(
                f,
                "Error: '{}' could not be loaded: {reason}",
                self.file_name()
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Errors that can occur while predicting a single passenger.
///
/// They are terminal to the request they occur in, the session stays usable.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// No model is loaded, nothing was attempted.
    ModelUnavailable,
    /// The model layer failed during inference.
    InferenceFailed(String),
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelUnavailable => write!(f, "no model is loaded, prediction is unavailable"),
            Self::InferenceFailed(msg) => write!(f, "Error during prediction: {msg}"),
        }
    }
}

impl std::error::Error for PredictionError {}

impl From<machine_learning::MlErr> for PredictionError {
    fn from(e: machine_learning::MlErr) -> Self {
        Self::InferenceFailed(e.to_string())
    }
}
