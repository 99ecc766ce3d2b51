use ndarray::{Array2, Axis};

use super::{Sigmoid, Softmax};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Softmax(Softmax),
}

impl ActFn {
    pub fn sigmoid(amp: f32) -> Self {
        Self::Sigmoid(Sigmoid::new(amp))
    }

    pub fn softmax() -> Self {
        Self::Softmax(Softmax::new())
    }

    /// Applies the activation over a batch of pre-activations in place.
    pub fn apply(&self, z: &mut Array2<f32>) {
        match self {
            Self::Sigmoid(a) => z.mapv_inplace(|z| a.f(z)),
            Self::Softmax(a) => z.axis_iter_mut(Axis(0)).for_each(|row| a.f(row)),
        }
    }
}
