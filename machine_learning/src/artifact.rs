//! The on-disk format of a trained classifier.
//!
//! An artifact is a JSON document holding the architecture, the trained parameters, the class
//! labels and, optionally, the names of the feature columns the model was fitted on.

use std::{collections::HashSet, fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    MlErr, Result,
    arch::{
        Forest, Model, Node, Sequential, Tree,
        activations::ActFn,
        layers::{Dense, Layer},
    },
    classifier::TrainedClassifier,
};

/// The serialized form of an `ActFn`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f32 },
    Softmax,
}

/// The serialized form of a `Layer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    Dense {
        dim: (usize, usize),
        act_fn: Option<ActFnSpec>,
        params: Vec<f32>,
    },
}

/// The serialized form of a decision tree `Node`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSpec {
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f32>,
    },
}

/// The serialized form of a decision `Tree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

/// The serialized form of a `Model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    Sequential { layers: Vec<LayerSpec> },
    Forest { nfeatures: usize, trees: Vec<TreeSpec> },
}

/// A serialized trained classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// The columns the model was fitted on, in order. When absent, columns are matched by
    /// position only.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    /// The class labels, in the same order as the probability columns.
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    pub model: ModelSpec,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

impl Artifact {
    /// Loads an artifact from a JSON file.
    ///
    /// # Errors
    /// Returns `MlErr::Io` if the file cannot be read and `MlErr::Json` if it isn't a valid
    /// artifact document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let artifact = serde_json::from_str(&content)?;
        Ok(artifact)
    }

    /// Saves the artifact to a file in a human-readable JSON format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the classifier described by this artifact.
    ///
    /// # Errors
    /// Returns `MlErr::InvalidArtifact` (or a size mismatch) if the description is not a
    /// usable model.
    pub fn build(&self) -> Result<TrainedClassifier> {
        self.validate_classes()?;

        let model: Box<dyn Model + Send + Sync> = match &self.model {
            ModelSpec::Sequential { layers } => Box::new(self.build_sequential(layers)?),
            ModelSpec::Forest { nfeatures, trees } => {
                Box::new(self.build_forest(*nfeatures, trees)?)
            }
        };

        if let Some(names) = &self.feature_names {
            if names.len() != model.nfeatures() {
                return Err(MlErr::InvalidArtifact(format!(
                    "{} feature names given for a model with {} inputs",
                    names.len(),
                    model.nfeatures()
                )));
            }
        }

        debug!(
            "built model with {} inputs and classes {:?}",
            model.nfeatures(),
            self.classes
        );

        Ok(TrainedClassifier::new(
            self.feature_names.clone(),
            self.classes.clone(),
            model,
        ))
    }

    fn validate_classes(&self) -> Result<()> {
        if self.classes.len() < 2 {
            return Err(MlErr::InvalidArtifact(
                "a classifier needs at least two classes".into(),
            ));
        }

        let unique: HashSet<_> = self.classes.iter().collect();
        if unique.len() != self.classes.len() {
            return Err(MlErr::InvalidArtifact("class labels must be unique".into()));
        }

        Ok(())
    }

    fn build_sequential(&self, layers: &[LayerSpec]) -> Result<Sequential> {
        let built = layers
            .iter()
            .map(|layer| self.build_layer(layer))
            .collect::<Result<Vec<_>>>()?;

        let last_act_fn = layers.last().map(|LayerSpec::Dense { act_fn, .. }| *act_fn);
        let model = Sequential::new(built)?;

        let single = model_outputs_one(layers);
        match last_act_fn.flatten() {
            _ if model.nclasses() != self.classes.len() => Err(MlErr::InvalidArtifact(format!(
                "model outputs {} classes but {} labels were given",
                model.nclasses(),
                self.classes.len()
            ))),
            Some(ActFnSpec::Sigmoid { amp }) if single && amp == 1.0 => Ok(model),
            _ if single => Err(MlErr::InvalidArtifact(
                "a single output unit needs a sigmoid activation with amp 1".into(),
            )),
            Some(ActFnSpec::Softmax) => Ok(model),
            _ => Err(MlErr::InvalidArtifact(
                "a multi-unit output needs a softmax activation".into(),
            )),
        }
    }

    fn build_layer(&self, layer: &LayerSpec) -> Result<Layer> {
        match layer {
            LayerSpec::Dense {
                dim,
                act_fn,
                params,
            } => {
                let act_fn = act_fn.map(|spec| match spec {
                    ActFnSpec::Sigmoid { amp } => ActFn::sigmoid(amp),
                    ActFnSpec::Softmax => ActFn::softmax(),
                });
                Ok(Layer::Dense(Dense::new(*dim, act_fn, params.clone())?))
            }
        }
    }

    fn build_forest(&self, nfeatures: usize, trees: &[TreeSpec]) -> Result<Forest> {
        let nclasses = self.classes.len();
        let trees = trees
            .iter()
            .enumerate()
            .map(|(i, tree)| {
                let nodes = tree.nodes.iter().cloned().map(Node::from).collect();
                Tree::new(nodes, nfeatures, nclasses).map_err(|e| match e {
                    MlErr::InvalidArtifact(reason) => {
                        MlErr::InvalidArtifact(format!("tree {i}: {reason}"))
                    }
                    e => e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Forest::new(trees, nfeatures, nclasses)
    }
}

fn model_outputs_one(layers: &[LayerSpec]) -> bool {
    matches!(layers.last(), Some(LayerSpec::Dense { dim: (_, 1), .. }))
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        match spec {
            NodeSpec::Split {
                feature,
                threshold,
                left,
                right,
            } => Node::Split {
                feature,
                threshold,
                left,
                right,
            },
            NodeSpec::Leaf { value } => Node::Leaf { value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logistic(act_fn: Option<ActFnSpec>) -> Artifact {
        Artifact {
            feature_names: Some(vec!["a".into(), "b".into()]),
            classes: vec![0, 1],
            model: ModelSpec::Sequential {
                layers: vec![LayerSpec::Dense {
                    dim: (2, 1),
                    act_fn,
                    params: vec![1.0, -1.0, 0.0],
                }],
            },
        }
    }

    #[test]
    fn parses_documented_json() {
        let json = r#"{
            "feature_names": ["a", "b"],
            "model": {
                "sequential": {
                    "layers": [
                        {"dense": {"dim": [2, 1], "act_fn": {"sigmoid": {"amp": 1.0}}, "params": [1.0, -1.0, 0.0]}}
                    ]
                }
            }
        }"#;

        let artifact: Artifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact, logistic(Some(ActFnSpec::Sigmoid { amp: 1.0 })));
    }

    #[test]
    fn parses_forest_json() {
        let json = r#"{
            "classes": [0, 1],
            "model": {
                "forest": {
                    "nfeatures": 1,
                    "trees": [{"nodes": [
                        {"split": {"feature": 0, "threshold": 0.5, "left": 1, "right": 2}},
                        {"leaf": {"value": [10, 2]}},
                        {"leaf": {"value": [1, 5]}}
                    ]}]
                }
            }
        }"#;

        let artifact: Artifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.feature_names, None);
        assert!(artifact.build().is_ok());
    }

    #[test]
    fn single_output_needs_sigmoid() {
        assert!(logistic(Some(ActFnSpec::Sigmoid { amp: 1.0 })).build().is_ok());
        assert!(matches!(
            logistic(None).build(),
            Err(MlErr::InvalidArtifact(_))
        ));
        assert!(matches!(
            logistic(Some(ActFnSpec::Sigmoid { amp: 2.0 })).build(),
            Err(MlErr::InvalidArtifact(_))
        ));
    }

    #[test]
    fn rejects_feature_name_count_mismatch() {
        let mut artifact = logistic(Some(ActFnSpec::Sigmoid { amp: 1.0 }));
        artifact.feature_names = Some(vec!["a".into()]);

        assert!(matches!(artifact.build(), Err(MlErr::InvalidArtifact(_))));
    }

    #[test]
    fn rejects_duplicate_classes() {
        let mut artifact = logistic(Some(ActFnSpec::Sigmoid { amp: 1.0 }));
        artifact.classes = vec![1, 1];

        assert!(matches!(artifact.build(), Err(MlErr::InvalidArtifact(_))));
    }

    #[test]
    fn rejects_wrong_param_count() {
        let artifact = Artifact {
            feature_names: None,
            classes: vec![0, 1],
            model: ModelSpec::Sequential {
                layers: vec![LayerSpec::Dense {
                    dim: (2, 1),
                    act_fn: Some(ActFnSpec::Sigmoid { amp: 1.0 }),
                    params: vec![1.0],
                }],
            },
        };

        assert!(matches!(artifact.build(), Err(MlErr::SizeMismatch { .. })));
    }

    #[test]
    fn save_then_load_keeps_the_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("model.json");
        let artifact = logistic(Some(ActFnSpec::Sigmoid { amp: 1.0 }));

        artifact.save(&path).unwrap();
        assert_eq!(Artifact::load(&path).unwrap(), artifact);
    }

    #[test]
    fn load_reports_missing_and_corrupt_files() {
        let tmp = tempfile::tempdir().unwrap();

        let missing = tmp.path().join("missing.json");
        assert!(matches!(Artifact::load(&missing), Err(MlErr::Io(_))));

        let corrupt = tmp.path().join("corrupt.json");
        fs::write(&corrupt, b"\x80\x04\x95 not json").unwrap();
        assert!(Artifact::load(&corrupt).is_err());
    }
}
