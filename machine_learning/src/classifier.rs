use ndarray::{Array2, Axis};

use crate::{MlErr, Result, arch::Model, frame::Frame};

/// A fitted classifier as seen by its callers: named rows in, labels or probabilities out.
pub trait Classifier {
    /// Predicts the class label of every row in `frame`.
    fn predict(&self, frame: &Frame) -> Result<Vec<i64>>;

    /// Computes the probability of every class for every row in `frame`.
    ///
    /// # Returns
    /// A `(rows, classes)` matrix whose columns follow the order of the class labels.
    fn predict_proba(&self, frame: &Frame) -> Result<Array2<f32>>;
}

/// A classifier rebuilt from an `Artifact`.
pub struct TrainedClassifier {
    feature_names: Option<Vec<String>>,
    classes: Vec<i64>,
    model: Box<dyn Model + Send + Sync>,
}

impl TrainedClassifier {
    pub(crate) fn new(
        feature_names: Option<Vec<String>>,
        classes: Vec<i64>,
        model: Box<dyn Model + Send + Sync>,
    ) -> Self {
        Self {
            feature_names,
            classes,
            model,
        }
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Checks the frame has the columns the model was fitted on.
    fn check_frame(&self, frame: &Frame) -> Result<()> {
        if let Some(expected) = &self.feature_names {
            if frame.columns() != expected.as_slice() {
                return Err(MlErr::FeatureNames {
                    got: frame.columns().to_vec(),
                    expected: expected.clone(),
                });
            }
        }

        let expected = self.model.nfeatures();
        if frame.columns().len() != expected {
            return Err(MlErr::SizeMismatch {
                what: "input features",
                got: frame.columns().len(),
                expected,
            });
        }

        Ok(())
    }
}

impl Classifier for TrainedClassifier {
    fn predict(&self, frame: &Frame) -> Result<Vec<i64>> {
        let proba = self.predict_proba(frame)?;

        proba
            .axis_iter(Axis(0))
            .map(|row| {
                // Ties resolve to the lowest index.
                let best = row
                    .iter()
                    .enumerate()
                    .fold((0, f32::NEG_INFINITY), |(bi, bp), (i, &p)| {
                        if p > bp { (i, p) } else { (bi, bp) }
                    })
                    .0;

                self.classes.get(best).copied().ok_or(MlErr::SizeMismatch {
                    what: "class labels",
                    got: self.classes.len(),
                    expected: best + 1,
                })
            })
            .collect()
    }

    fn predict_proba(&self, frame: &Frame) -> Result<Array2<f32>> {
        self.check_frame(frame)?;

        let proba = self.model.forward(frame.view())?;
        if proba.nrows() == 0 {
            return Err(MlErr::EmptyOutput);
        }

        Ok(proba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ActFnSpec, Artifact, LayerSpec, ModelSpec};

    fn classifier(classes: Vec<i64>, bias: f32) -> TrainedClassifier {
        Artifact {
            feature_names: Some(vec!["x".into()]),
            classes,
            model: ModelSpec::Sequential {
                layers: vec![LayerSpec::Dense {
                    dim: (1, 1),
                    act_fn: Some(ActFnSpec::Sigmoid { amp: 1.0 }),
                    params: vec![0.0, bias],
                }],
            },
        }
        .build()
        .unwrap()
    }

    #[test]
    fn predict_maps_argmax_to_labels() {
        let model = classifier(vec![7, 42], 3.0);
        let frame = Frame::from_row([("x", 0.0)]);

        assert_eq!(model.predict(&frame).unwrap(), vec![42]);

        let model = classifier(vec![7, 42], -3.0);
        assert_eq!(model.predict(&frame).unwrap(), vec![7]);
    }

    #[test]
    fn even_odds_pick_the_first_class() {
        let model = classifier(vec![0, 1], 0.0);
        let frame = Frame::from_row([("x", 0.0)]);

        assert_eq!(model.predict(&frame).unwrap(), vec![0]);
    }

    #[test]
    fn rejects_unexpected_feature_names() {
        let model = classifier(vec![0, 1], 0.0);
        let frame = Frame::from_row([("y", 0.0)]);

        assert!(matches!(
            model.predict_proba(&frame),
            Err(MlErr::FeatureNames { .. })
        ));
    }

    #[test]
    fn unnamed_models_match_by_position() {
        let mut artifact = Artifact {
            feature_names: None,
            classes: vec![0, 1],
            model: ModelSpec::Sequential {
                layers: vec![LayerSpec::Dense {
                    dim: (1, 1),
                    act_fn: Some(ActFnSpec::Sigmoid { amp: 1.0 }),
                    params: vec![1.0, 0.0],
                }],
            },
        };
        let model = artifact.build().unwrap();
        assert!(model.predict(&Frame::from_row([("anything", 2.0)])).is_ok());
        assert!(matches!(
            model.predict(&Frame::from_row([("a", 1.0), ("b", 1.0)])),
            Err(MlErr::SizeMismatch { .. })
        ));

        artifact.feature_names = Some(vec!["x".into()]);
        assert_eq!(artifact.build().unwrap().feature_names(), Some(&["x".to_string()][..]));
    }
}
