//! The core library for `Classifier` trait
//! and the combined hypotheses built by boosting.

pub(crate) mod hypothesis_traits;
pub(crate) mod majority_vote;
pub(crate) mod clustered_classifier;


pub use hypothesis_traits::Classifier;
pub use majority_vote::MajorityVote;
pub use clustered_classifier::ClusteredClassifier;
