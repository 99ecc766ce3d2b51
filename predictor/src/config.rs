use std::{env, path::PathBuf};

/// Where the model artifact is expected when nothing else is configured.
pub const DEFAULT_MODEL_PATH: &str = "titanic_model.json";

/// Overrides [`DEFAULT_MODEL_PATH`].
pub const MODEL_PATH_VAR: &str = "TITANIC_MODEL_PATH";

/// Runtime configuration of the predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_path: PathBuf,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var(MODEL_PATH_VAR).ok())
    }

    /// Picks the model path out of an optional override, ignoring blank values.
    pub fn resolve(model_path: Option<String>) -> Self {
        let model_path = model_path
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());

        Self {
            model_path: PathBuf::from(model_path),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
