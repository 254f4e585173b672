use crate::{Sample, Result};


/// A trait that defines the behavor of binary classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label (`0` or `1`) of `example`.
    /// Fails if `example` has an unexpected dimensionality.
    fn predict(&self, example: &[f64]) -> Result<i64>;


    /// Predicts the labels of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<i64>> {
        sample.iter()
            .map(|(x, _)| self.predict(x))
            .collect()
    }
}
