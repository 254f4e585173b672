//! Exports the standard boosting algorithm and traits.
//!
pub use crate::error::BoostError;


pub use crate::sample::{
    Point,
    Sample,
};


pub use crate::clustering::SpatialClusterer;


pub use crate::booster::{
    // Booster trait
    Booster,

    // Doubling-weight boosting over clustered features
    ClusterBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DStump,
    DStumpClassifier,
    PositiveSide,
};


pub use crate::hypothesis::{
    Classifier,
    MajorityVote,
    ClusteredClassifier,
};


pub use crate::research::{
    Logger,
    Research,
    CrossValidation,
    FoldReport,
    zero_one_loss,
    weighted_accuracy,
};
