use log::{debug, error};
use machine_learning::Classifier;

use crate::{
    encoding::{self, EncodedFeatureRecord},
    error::PredictionError,
    passenger::PassengerInput,
};

/// The class label meaning the passenger survived.
pub const SURVIVED: i64 = 1;

/// The outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub survived: bool,
    /// The probability of survival, whichever label was predicted.
    pub confidence: f32,
}

/// A prediction together with the record the model was fed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionDetail {
    pub record: EncodedFeatureRecord,
    pub result: PredictionResult,
}

/// Predicts whether a passenger survived.
///
/// # Arguments
/// * `input` - The raw passenger values.
/// * `model` - The loaded model, `None` if loading failed.
///
/// # Errors
/// Returns `PredictionError::ModelUnavailable` without attempting any inference if there's no
/// model, and `PredictionError::InferenceFailed` if the model fails or returns something that
/// isn't a prediction.
pub fn predict_survival(
    input: &PassengerInput,
    model: Option<&dyn Classifier>,
) -> Result<PredictionResult, PredictionError> {
    predict_detail(input, model).map(|detail| detail.result)
}

/// Same as [`predict_survival`], also returning the encoded record used.
pub fn predict_detail(
    input: &PassengerInput,
    model: Option<&dyn Classifier>,
) -> Result<PredictionDetail, PredictionError> {
    let record = encoding::encode(input);
    let Some(model) = model else {
        return Err(PredictionError::ModelUnavailable);
    };

    debug!(
        "predicting {}",
        serde_json::to_string(&record).unwrap_or_default()
    );

    let result = infer(&record, model).inspect_err(|e| error!("{e}"))?;
    debug!(
        "survived: {}, confidence: {}",
        result.survived, result.confidence
    );

    Ok(PredictionDetail { record, result })
}

fn infer(
    record: &EncodedFeatureRecord,
    model: &dyn Classifier,
) -> Result<PredictionResult, PredictionError> {
    let frame = record.to_frame();

    let label = model
        .predict(&frame)?
        .first()
        .copied()
        .ok_or_else(|| PredictionError::InferenceFailed("the model returned no label".into()))?;

    let proba = model.predict_proba(&frame)?;
    let confidence = proba.get((0, 1)).copied().ok_or_else(|| {
        PredictionError::InferenceFailed(format!(
            "expected a probability for class 1, got a {}x{} matrix",
            proba.nrows(),
            proba.ncols()
        ))
    })?;

    if !(0.0..=1.0).contains(&confidence) {
        return Err(PredictionError::InferenceFailed(format!(
            "the probability of survival is not in [0, 1]: {confidence}"
        )));
    }

    Ok(PredictionResult {
        survived: label == SURVIVED,
        confidence,
    })
}
