//! The core library for the weak learner in the boosting protocol.
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that is slightly better than
//! the random guessing with respect to the distribution.
//!
//! In this code, we assume that the weak learner returns a hypothesis
//! that **maximizes** the weighted number of correct predictions.
use crate::{Sample, Result};


/// An interface that returns a hypothesis
/// for a given sample and distribution over it.
pub trait WeakLearner {
    /// Hypothesis type produced by `self`.
    type Hypothesis;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Returns a hypothesis trained on `sample` under `dist`.
    /// `dist[i]` is the (non-negative) weight on the `i`-th example.
    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis>;
}
