use ndarray::{Array2, ArrayView2, Axis, concatenate};

use super::{Model, layers::Layer};
use crate::{MlErr, Result};

/// A sequential model: information flows forward through its layers to compute an output.
///
/// A network with a single output unit is read as a binary classifier whose output is the
/// probability of class `1`.
#[derive(Clone, Debug)]
pub struct Sequential {
    layers: Vec<Layer>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance or an error if the layers are empty or their dimensions
    /// don't chain.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Layer>,
    {
        let layers: Vec<_> = layers.into_iter().collect();

        if layers.is_empty() {
            return Err(MlErr::InvalidArtifact(
                "model must have at least one layer".into(),
            ));
        }

        // Adjacent layers must have compatible dimensions: prev.m == next.n
        for (i, pair) in layers.windows(2).enumerate() {
            let (_, prev_m) = pair[0].dim();
            let (curr_n, _) = pair[1].dim();
            if prev_m != curr_n {
                return Err(MlErr::InvalidArtifact(format!(
                    "layer {}: input size ({curr_n}) does not match previous layer output size ({prev_m})",
                    i + 1
                )));
            }
        }

        Ok(Self { layers })
    }

    fn outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.dim().1)
    }
}

impl Model for Sequential {
    fn nfeatures(&self) -> usize {
        self.layers.first().map_or(0, |l| l.dim().0)
    }

    fn nclasses(&self) -> usize {
        match self.outputs() {
            1 => 2,
            m => m,
        }
    }

    fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        let mut layers = self.layers.iter();
        let Some(first) = layers.next() else {
            return Err(MlErr::EmptyOutput);
        };

        let mut a = first.forward(x)?;
        for layer in layers {
            a = layer.forward(a.view())?;
        }

        if self.outputs() != 1 {
            return Ok(a);
        }

        let negative = a.mapv(|p| 1. - p);
        concatenate(Axis(1), &[negative.view(), a.view()]).map_err(|_| MlErr::SizeMismatch {
            what: "binary output",
            got: a.ncols(),
            expected: 1,
        })
    }
}
