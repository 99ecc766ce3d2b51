//! Loading and caching of the model artifact.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use log::{info, warn};
use machine_learning::{Artifact, Classifier};

use crate::error::LoadError;

/// A loaded model, shared read-only by every request.
pub type SharedModel = Arc<dyn Classifier + Send + Sync>;

/// Loads the model artifact at `path`.
///
/// # Errors
/// Returns `LoadError::NotFound` if there's no file at `path` and
/// `LoadError::DeserializationFailed` if it can't be read or doesn't describe a valid model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<SharedModel, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        warn!("model artifact not found at {}", path.display());
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let failed = |e: machine_learning::MlErr| {
        warn!("failed to load model artifact {}: {e}", path.display());
        LoadError::DeserializationFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    };

    let artifact = Artifact::load(path).map_err(failed)?;
    let classifier = artifact.build().map_err(failed)?;

    info!(
        "loaded model from {} (classes {:?}, features {:?})",
        path.display(),
        classifier.classes(),
        classifier.feature_names().unwrap_or_default()
    );
    Ok(Arc::new(classifier))
}

/// Loads the model on first use and keeps it for the lifetime of the cache.
///
/// The outcome of the first load, success or failure, is what every later call gets; the file
/// is never read twice.
pub struct ModelCache {
    path: PathBuf,
    slot: OnceLock<Result<SharedModel, LoadError>>,
}

impl ModelCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            slot: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached model, loading it if this is the first call.
    pub fn get(&self) -> Result<SharedModel, LoadError> {
        self.slot.get_or_init(|| load_model(&self.path)).clone()
    }

    /// Returns the model if it loaded successfully, `None` otherwise.
    pub fn model(&self) -> Option<SharedModel> {
        self.get().ok()
    }
}
