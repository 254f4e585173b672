use serde::{Serialize, Deserialize};
use crate::{
    Classifier,
    Result,
};


/// The unweighted majority vote over a sequence of hypotheses.
///
/// Each hypothesis casts one vote.
/// `MajorityVote` predicts `0` if the number of `0`-votes is
/// greater than or equal to the number of `1`-votes,
/// and `1` otherwise, so ties (including the empty vote) go to `0`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MajorityVote<H> {
    /// Set of hypotheses, in the order they were appended.
    pub hypotheses: Vec<H>,
}


impl<H> MajorityVote<H> {
    /// Construct an empty vote.
    #[inline]
    pub fn new() -> Self {
        Self { hypotheses: Vec::new() }
    }


    /// Append a hypothesis to the current vote.
    #[inline]
    pub fn push(&mut self, hypothesis: H) {
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the vote into its hypotheses.
    #[inline]
    pub fn decompose(self) -> Vec<H> {
        self.hypotheses
    }
}


impl<H: Clone> MajorityVote<H> {
    /// Construct a new `MajorityVote` from a slice.
    #[inline]
    pub fn from_slice(hypotheses: &[H]) -> Self {
        Self { hypotheses: hypotheses.to_vec() }
    }
}


impl<H> Default for MajorityVote<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H> Classifier for MajorityVote<H>
    where H: Classifier,
{
    fn predict(&self, example: &[f64]) -> Result<i64> {
        let mut n_zero = 0_usize;
        for h in &self.hypotheses {
            if h.predict(example)? == 0 { n_zero += 1; }
        }
        let n_one = self.hypotheses.len() - n_zero;

        Ok(if n_zero >= n_one { 0 } else { 1 })
    }
}
