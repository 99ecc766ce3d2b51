pub mod arch;
pub mod artifact;
pub mod classifier;
pub mod error;
pub mod frame;

pub use artifact::Artifact;
pub use classifier::{Classifier, TrainedClassifier};
pub use error::{MlErr, Result};
pub use frame::Frame;
