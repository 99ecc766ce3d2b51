use crate::predict::PredictionResult;

/// How a prediction is worded for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub survived: bool,
    pub headline: &'static str,
    pub caption: &'static str,
    pub percent: String,
}

impl Outcome {
    /// The full single line rendering, e.g. `Prediction: SURVIVED | Confidence: 88.0%`.
    pub fn summary(&self) -> String {
        format!(
            "Prediction: {} | {}: {}",
            self.headline, self.caption, self.percent
        )
    }
}

impl From<PredictionResult> for Outcome {
    /// The confidence is always the chance of survival, a negative prediction relabels the
    /// caption rather than inverting the number.
    fn from(result: PredictionResult) -> Self {
        let (headline, caption) = if result.survived {
            ("SURVIVED", "Confidence")
        } else {
            ("DID NOT SURVIVE", "Survival Chance")
        };

        Self {
            survived: result.survived,
            headline,
            caption,
            percent: percent(result.confidence),
        }
    }
}

/// Formats a probability as a percentage with one decimal, `0.88` becomes `88.0%`.
pub fn percent(p: f32) -> String {
    format!("{:.1}%", f64::from(p) * 100.)
}
