//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and the decision stump weak learner.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;


pub use self::core::WeakLearner;

pub use self::decision_stump::{
    DStump,
    DStumpClassifier,
    PositiveSide,
};
