pub mod config;
pub mod encoding;
pub mod error;
pub mod loader;
pub mod outcome;
pub mod passenger;
mod predict;

pub use config::AppConfig;
pub use encoding::{EncodedFeatureRecord, FEATURE_NAMES, encode};
pub use error::{LoadError, PredictionError};
pub use loader::{ModelCache, SharedModel, load_model};
pub use machine_learning::Classifier;
pub use outcome::Outcome;
pub use passenger::{EmbarkPort, PassengerInput, Sex, TicketClass};
pub use predict::{PredictionDetail, PredictionResult, SURVIVED, predict_detail, predict_survival};
