//! Provides the boosting algorithm.

mod core;

mod cluster_boost;


/// Booster trait
pub use self::core::Booster;

pub use self::cluster_boost::{
    ClusterBoost,
    DEFAULT_ROUNDS,
};
