//! Provides the decision stump class.
use serde::{Serialize, Deserialize};

use crate::{
    common::checker,
    Classifier,
    Result,
};

use std::fmt;


/// Defines the ray that is predicted as `1`.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PositiveSide {
    /// Values greater than the threshold are predicted as `1`,
    /// the others as `0`.
    RHS,
    /// Values less than or equal to the threshold are predicted as `1`,
    /// the others as `0`.
    LHS,
}


impl PositiveSide {
    /// Returns the orientation bit of `self`.
    /// `RHS` is `0` and `LHS` is `1`.
    #[inline]
    pub fn bit(&self) -> u8 {
        match self {
            PositiveSide::RHS => 0,
            PositiveSide::LHS => 1,
        }
    }
}


/// The struct `DStumpClassifier` defines the decision stump class.
/// Given a point over the `d`-dimensional space,
/// a stump looks at the single coordinate `x[feature_index]`
/// and compares it with `threshold`.
/// Which side is predicted as `1` is given by [`PositiveSide`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DStumpClassifier {
    pub(super) threshold: f64,
    pub(super) feature_index: usize,
    pub(super) positive_side: PositiveSide,
    pub(super) n_feature: usize,
}


impl DStumpClassifier {
    /// Construct a stump over `n_feature`-dimensional examples.
    pub fn new(
        feature_index: usize,
        threshold: f64,
        positive_side: PositiveSide,
        n_feature: usize,
    ) -> Result<Self>
    {
        checker::index(feature_index, n_feature)?;
        Ok(Self { threshold, feature_index, positive_side, n_feature, })
    }


    /// The index of the feature used in prediction.
    #[inline]
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// The threshold of the stump.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The ray predicted as `1`.
    #[inline]
    pub fn positive_side(&self) -> PositiveSide {
        self.positive_side
    }


    /// The dimensionality of the examples `self` was trained on.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }
}


impl Classifier for DStumpClassifier {
    fn predict(&self, example: &[f64]) -> Result<i64> {
        checker::dimension(self.n_feature, example.len())?;

        let below = example[self.feature_index] <= self.threshold;
        let label = match self.positive_side {
            PositiveSide::RHS => if below { 0 } else { 1 },
            PositiveSide::LHS => if below { 1 } else { 0 },
        };
        Ok(label)
    }
}


impl fmt::Display for DStumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (below, above) = match self.positive_side {
            PositiveSide::RHS => (0, 1),
            PositiveSide::LHS => (1, 0),
        };
        write!(
            f,
            "x[{}] <= {} ? {below} : {above}",
            self.feature_index, self.threshold,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoostError;

    #[test]
    fn rhs_predicts_one_above_threshold() {
        let h = DStumpClassifier::new(1, 2.0, PositiveSide::RHS, 3).unwrap();
        assert_eq!(h.n_feature(), 3);
        assert_eq!(h.predict(&[9.0, 2.0, 9.0]).unwrap(), 0);
        assert_eq!(h.predict(&[9.0, 2.5, 9.0]).unwrap(), 1);
    }

    #[test]
    fn lhs_predicts_one_below_threshold() {
        let h = DStumpClassifier::new(0, -1.0, PositiveSide::LHS, 1).unwrap();
        assert_eq!(h.predict(&[-1.0]).unwrap(), 1);
        assert_eq!(h.predict(&[0.0]).unwrap(), 0);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let h = DStumpClassifier::new(0, 0.0, PositiveSide::RHS, 2).unwrap();
        let err = h.predict(&[1.0]).unwrap_err();
        assert_eq!(err, BoostError::DimensionMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn rejects_feature_out_of_range() {
        let err = DStumpClassifier::new(2, 0.0, PositiveSide::RHS, 2)
            .unwrap_err();
        assert_eq!(err, BoostError::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn display() {
        let h = DStumpClassifier::new(3, 1.5, PositiveSide::LHS, 4).unwrap();
        assert_eq!(h.to_string(), "x[3] <= 1.5 ? 1 : 0");
    }
}
