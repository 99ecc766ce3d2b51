use ndarray::{Array2, ArrayView1, ArrayView2};

use super::Model;
use crate::{MlErr, Result};

/// A node of a decision tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Go to `left` when `x[feature] <= threshold`, to `right` otherwise.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    /// The class distribution of the samples that reached this leaf.
    Leaf { value: Vec<f32> },
}

/// A binary decision tree stored as a flat node array, rooted at index `0`.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a new `Tree`.
    ///
    /// Children must be stored after their parent, which rules out cycles. Leaf values are
    /// normalised so each leaf holds a probability distribution.
    ///
    /// # Arguments
    /// * `nodes` - The nodes of the tree, the root first.
    /// * `nfeatures` - The amount of input columns.
    /// * `nclasses` - The length every leaf value must have.
    ///
    /// # Returns
    /// A new `Tree` instance or an error if the nodes don't describe a valid tree.
    pub fn new(nodes: Vec<Node>, nfeatures: usize, nclasses: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(MlErr::InvalidArtifact("tree must have at least one node".into()));
        }

        let nnodes = nodes.len();
        let nodes = nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| match node {
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if feature >= nfeatures {
                        return Err(MlErr::InvalidArtifact(format!(
                            "node {i}: feature {feature} out of range for {nfeatures} features"
                        )));
                    }
                    for child in [left, right] {
                        if child <= i || child >= nnodes {
                            return Err(MlErr::InvalidArtifact(format!(
                                "node {i}: invalid child index {child}"
                            )));
                        }
                    }
                    Ok(node)
                }
                Node::Leaf { value } => {
                    if value.len() != nclasses {
                        return Err(MlErr::InvalidArtifact(format!(
                            "node {i}: leaf has {} values, expected {nclasses}",
                            value.len()
                        )));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.) {
                        return Err(MlErr::InvalidArtifact(format!(
                            "node {i}: leaf values must be finite and non negative"
                        )));
                    }

                    let total: f32 = value.iter().sum();
                    if total <= 0. {
                        return Err(MlErr::InvalidArtifact(format!(
                            "node {i}: leaf values sum to zero"
                        )));
                    }

                    Ok(Node::Leaf {
                        value: value.into_iter().map(|v| v / total).collect(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { nodes })
    }

    /// Walks the tree for a single sample.
    ///
    /// # Returns
    /// The class distribution of the leaf the sample lands in.
    fn leaf(&self, x: ArrayView1<f32>) -> &[f32] {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => i = if x[*feature] <= *threshold { *left } else { *right },
                Node::Leaf { value } => return value,
            }
        }
    }
}

/// An ensemble of decision trees whose probabilities are averaged.
#[derive(Clone, Debug)]
pub struct Forest {
    trees: Vec<Tree>,
    nfeatures: usize,
    nclasses: usize,
}

impl Forest {
    /// Creates a new `Forest`.
    ///
    /// # Arguments
    /// * `trees` - The already validated trees.
    /// * `nfeatures` - The amount of input columns every tree was built for.
    /// * `nclasses` - The amount of classes every leaf holds a value for.
    ///
    /// # Returns
    /// A new `Forest` instance or an error if there are no trees.
    pub fn new(trees: Vec<Tree>, nfeatures: usize, nclasses: usize) -> Result<Self> {
        if trees.is_empty() {
            return Err(MlErr::InvalidArtifact(
                "forest must have at least one tree".into(),
            ));
        }

        Ok(Self {
            trees,
            nfeatures,
            nclasses,
        })
    }
}

impl Model for Forest {
    fn nfeatures(&self) -> usize {
        self.nfeatures
    }

    fn nclasses(&self) -> usize {
        self.nclasses
    }

    fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.nfeatures {
            return Err(MlErr::SizeMismatch {
                what: "forest input columns",
                got: x.ncols(),
                expected: self.nfeatures,
            });
        }

        let mut proba = Array2::zeros((x.nrows(), self.nclasses));
        let ntrees = self.trees.len() as f32;

        for (row, mut out) in x.rows().into_iter().zip(proba.rows_mut()) {
            for tree in &self.trees {
                out.iter_mut()
                    .zip(tree.leaf(row))
                    .for_each(|(o, v)| *o += v / ntrees);
            }
        }

        Ok(proba)
    }
}
