//! Defines the decision stump weak learner
//! and the stump classifier it produces.

/// Defines the decision stump weak learner.
pub mod dstump;
/// Defines the stump classifier.
pub mod dstump_classifier;


pub use dstump::DStump;
pub use dstump_classifier::{
    DStumpClassifier,
    PositiveSide,
};
