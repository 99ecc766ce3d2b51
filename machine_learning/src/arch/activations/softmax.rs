use ndarray::ArrayViewMut1;

/// Row-wise softmax, shifted by the row maximum so large logits don't overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Softmax;

impl Softmax {
    pub fn new() -> Self {
        Self
    }

    pub fn f(&self, mut row: ArrayViewMut1<f32>) {
        let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        row.mapv_inplace(|z| (z - max).exp());

        let sum = row.sum();
        if sum > 0. {
            row.mapv_inplace(|e| e / sum);
        }
    }
}
