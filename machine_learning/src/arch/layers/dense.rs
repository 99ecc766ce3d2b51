use ndarray::{linalg, prelude::*};

use crate::{MlErr, Result, arch::activations::ActFn};

/// A fully connected layer holding its own trained parameters.
///
/// The parameters are laid out flat: first the `n * m` weights in row-major order (one row per
/// input), then the `m` biases.
#[derive(Clone, Debug)]
pub struct Dense {
    dim: (usize, usize),
    act_fn: Option<ActFn>,
    params: Vec<f32>,
}

impl Dense {
    /// Creates a new `Dense`.
    ///
    /// # Arguments
    /// * `dim` - The amount of inputs and outputs of the layer.
    /// * `act_fn` - An optional activation applied to the output.
    /// * `params` - The flat weights and biases.
    ///
    /// # Returns
    /// A new `Dense` instance or an error if `dim` is too large to address or the amount of
    /// parameters doesn't match it.
    pub fn new(dim: (usize, usize), act_fn: Option<ActFn>, params: Vec<f32>) -> Result<Self> {
        let expected = Self::size_for(dim).ok_or_else(|| {
            MlErr::InvalidArtifact(format!("dense layer of {dim:?} is too large"))
        })?;
        if params.len() != expected {
            return Err(MlErr::SizeMismatch {
                what: "dense parameters",
                got: params.len(),
                expected,
            });
        }

        Ok(Self {
            dim,
            act_fn,
            params,
        })
    }

    /// Returns the amount of parameters a dense layer of the given dimensions has, `None` if it
    /// overflows.
    pub fn size_for((n, m): (usize, usize)) -> Option<usize> {
        n.checked_add(1).and_then(|n1| n1.checked_mul(m))
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    /// Returns the size of this layer.
    ///
    /// # Returns
    /// The amount of parameters this layer has.
    pub fn size(&self) -> usize {
        self.params.len()
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `x` - A batch of inputs, one row per sample.
    ///
    /// # Returns
    /// The activated outputs, one row per sample.
    pub fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        let (n, m) = self.dim;
        if x.ncols() != n {
            return Err(MlErr::SizeMismatch {
                what: "dense input columns",
                got: x.ncols(),
                expected: n,
            });
        }

        let (w, b) = self.view_params()?;
        let mut z = Array2::zeros((x.nrows(), m));
        linalg::general_mat_mul(1.0, &x, &w, 0.0, &mut z);
        z += &b;

        if let Some(act_fn) = &self.act_fn {
            act_fn.apply(&mut z);
        }

        Ok(z)
    }

    /// Gives a view of the raw parameter slice as the weights and biases of this layer.
    ///
    /// # Returns
    /// A tuple containing the weights and biases.
    fn view_params(&self) -> Result<(ArrayView2<'_, f32>, ArrayView1<'_, f32>)> {
        let mismatch = || MlErr::SizeMismatch {
            what: "dense parameters",
            got: self.size(),
            expected: Self::size_for(self.dim).unwrap_or_default(),
        };
        let w_size = self.size().checked_sub(self.dim.1).ok_or_else(mismatch)?;

        let weights =
            ArrayView2::from_shape(self.dim, &self.params[..w_size]).map_err(|_| mismatch())?;
        let biases =
            ArrayView1::from_shape(self.dim.1, &self.params[w_size..]).map_err(|_| mismatch())?;
        Ok((weights, biases))
    }
}
