use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    MajorityVote,
    SpatialClusterer,
    Result,
};


/// The final hypothesis of [`ClusterBoost`](crate::ClusterBoost).
///
/// A raw example of length `m` is reduced once by the clusterer,
/// and the reduced example is passed to the majority vote.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClusteredClassifier<H> {
    clusterer: SpatialClusterer,
    vote: MajorityVote<H>,
}


impl<H> ClusteredClassifier<H> {
    /// Construct a new classifier from a clusterer and a vote
    /// over reduced examples.
    #[inline]
    pub fn new(clusterer: SpatialClusterer, vote: MajorityVote<H>) -> Self {
        Self { clusterer, vote }
    }


    /// Returns the clusterer that reduces raw examples.
    #[inline]
    pub fn clusterer(&self) -> &SpatialClusterer {
        &self.clusterer
    }


    /// Returns the hypotheses in the order they were trained.
    #[inline]
    pub fn hypotheses(&self) -> &[H] {
        &self.vote.hypotheses[..]
    }
}


impl<H> Classifier for ClusteredClassifier<H>
    where H: Classifier,
{
    fn predict(&self, example: &[f64]) -> Result<i64> {
        let reduced = self.clusterer.reduce_dimensions(example)?;
        self.vote.predict(&reduced)
    }
}
