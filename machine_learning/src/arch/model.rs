use ndarray::{Array2, ArrayView2};

use crate::error::Result;

/// An inference-only model mapping feature rows to class probabilities.
pub trait Model {
    /// Returns the amount of input columns the model expects.
    fn nfeatures(&self) -> usize;

    /// Returns the amount of classes the model outputs a probability for.
    fn nclasses(&self) -> usize;

    /// Computes the class probabilities of every row in `x`.
    ///
    /// # Arguments
    /// * `x` - The input data, one row per sample and `nfeatures` columns.
    ///
    /// # Returns
    /// A `(rows, nclasses)` matrix where each row holds the probability of each class.
    fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>>;
}
