use ndarray::{Array2, ArrayView2};

/// A batch of samples whose columns carry names, the way a model sees its training data.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    data: Array2<f32>,
}

impl Frame {
    /// Creates a single row `Frame` out of `(name, value)` pairs.
    pub fn from_row<'a, I>(row: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let (columns, values): (Vec<String>, Vec<f32>) =
            row.into_iter().map(|(k, v)| (k.to_string(), v)).unzip();
        let data = Array2::from_shape_fn((1, values.len()), |(_, j)| values[j]);

        Self { columns, data }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }
}
