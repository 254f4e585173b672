#![warn(missing_docs)]

//!
//! A crate that boosts decision stumps over spatially clustered features.
//!
//! Each raw feature is attached to a location on the plane.
//! Before boosting, the locations are grouped into `k` clusters
//! by cutting the heaviest edges of their minimum spanning tree,
//! and every raw example is reduced to a `k`-dimensional vector
//! by summing the features that share a cluster.
//!
//! The boosting part consists of two pieces.
//!
//! - Weak learner
//!     [`DStump`] finds the decision stump
//!     that maximizes the weighted number of correct predictions.
//!
//! - Booster
//!     [`ClusterBoost`] doubles the weight of every example
//!     the latest stump misclassifies, renormalizes,
//!     and predicts by the unweighted majority vote of all stumps.
//!
//! # Example
//! ```no_run
//! use clusterboost::prelude::*;
//!
//! # fn main() -> clusterboost::Result<()> {
//! let data = vec![
//!     vec![1.0, 2.0, 0.0, 0.0],
//!     vec![0.0, 0.0, 3.0, 1.0],
//! ];
//! let target = vec![0, 1];
//! let locations = vec![
//!     Point::new(0.0, 0.0), Point::new(0.0, 1.0),
//!     Point::new(9.0, 9.0), Point::new(9.0, 8.0),
//! ];
//! let sample = Sample::new(data, target)?;
//!
//! let mut booster = ClusterBoost::init(&sample, &locations, 2)?
//!     .force_quit_at(10);
//! let weak_learner = booster.weak_learner();
//! let f = booster.run(&weak_learner)?;
//!
//! let prediction = f.predict(&[2.0, 1.0, 0.0, 0.0])?;
//! assert_eq!(prediction, 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod sample;
pub mod clustering;
pub mod weak_learner;
pub mod hypothesis;
pub mod booster;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use error::{BoostError, Result};

pub use sample::{Point, Sample};

pub use clustering::SpatialClusterer;

pub use weak_learner::{
    WeakLearner,
    DStump,
    DStumpClassifier,
    PositiveSide,
};

pub use hypothesis::{
    Classifier,
    MajorityVote,
    ClusteredClassifier,
};

pub use booster::{
    Booster,
    ClusterBoost,
};

pub use research::{
    Logger,
    CrossValidation,
    zero_one_loss,
};
