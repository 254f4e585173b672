//! This directory provides some features for research
//! Measure the followings of boosting algorithm per iteration
//! - Weighted error of the latest hypothesis
//! - Training loss
//! - Test loss
//! - Running time
//!
//! and cross-validate a booster over training/test folds.

/// Provides a struct that runs a boosting algorithm with logging.
pub mod logger;

/// Provides cross validation of `ClusterBoost`.
pub mod cross_validation;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;


pub use logger::{
    Logger,
    LoggerError,
    Research,
};

pub use cross_validation::{
    CrossValidation,
    FoldReport,
};

pub use loss_functions::{
    zero_one_loss,
    weighted_accuracy,
};
