//! Provides the decision stump weak learner.
use rayon::prelude::*;

use crate::{
    common::checker,
    BoostError,
    Sample,
    WeakLearner,
    Result,
};
use super::{DStumpClassifier, PositiveSide};


type IndicesByValue = Vec<usize>;
type FeatureIndex   = Vec<IndicesByValue>;


/// The struct `DStump` generates a [`DStumpClassifier`]
/// for each call of [`WeakLearner::produce`].
///
/// The produced stump maximizes the weighted number of
/// correctly classified examples over every
/// `(feature, threshold, positive side)` triple,
/// where the candidate thresholds are the values of the examples.
/// Equal values are never separated.
///
/// A `DStump` only accepts the sample it was initialized with,
/// or any sample of the same shape whose features sort the same way
/// (e.g., the same rows with other labels).
/// Other samples are rejected with [`BoostError::UnsortedSample`].
///
/// Ties are broken by the first triple found,
/// scanning features in ascending order, then thresholds in
/// ascending order, then [`PositiveSide::RHS`] before [`PositiveSide::LHS`].
///
/// # Example
/// ```
/// use clusterboost::prelude::*;
///
/// let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
/// let sample = Sample::new(data, vec![0, 0, 1, 1]).unwrap();
///
/// let dstump = DStump::init(&sample);
/// let h = dstump.produce(&sample, &[0.25; 4]).unwrap();
///
/// assert_eq!(h.feature_index(), 0);
/// assert_eq!(h.threshold(), 1.0);
/// assert_eq!(h.positive_side(), PositiveSide::RHS);
/// ```
#[derive(Debug, Clone)]
pub struct DStump {
    // `indices[j][g]` holds the indices of the examples
    // whose `j`-th value is the `g`-th smallest one.
    // Each group is ordered by the example index.
    indices: Vec<FeatureIndex>,
    n_sample: usize,
    n_feature: usize,
}


// The best stump on a single feature.
#[derive(Debug, Clone, Copy)]
struct Champion {
    correct: f64,
    threshold: f64,
    positive_side: PositiveSide,
}


impl DStump {
    /// Initializes and produce an instance of `DStump`.
    /// The indices of `sample` are sorted once per feature here,
    /// so that each call of `produce` only scans them.
    pub fn init(sample: &Sample) -> Self {
        let (n_sample, n_feature) = sample.shape();

        let indices = (0..n_feature).into_par_iter()
            .map(|j| {
                let mut vals = sample.data()
                    .iter()
                    .enumerate()
                    .map(|(i, x)| (i, x[j]))
                    .collect::<Vec<(usize, f64)>>();

                // Stable, so equal values keep the index order.
                vals.sort_by(|(_, a), (_, b)| a.total_cmp(b));

                // Group the indices by `j`-th value.
                let mut index: FeatureIndex = Vec::new();
                let mut prev: Option<f64> = None;
                for (i, v) in vals {
                    match index.last_mut() {
                        Some(group) if prev == Some(v) => {
                            group.push(i);
                        },
                        _ => {
                            index.push(vec![i]);
                        },
                    }
                    prev = Some(v);
                }
                index
            })
            .collect::<Vec<_>>();

        Self { indices, n_sample, n_feature, }
    }


    /// Returns the best stump on the `j`-th feature.
    fn best_on_feature(
        &self,
        j: usize,
        sample: &Sample,
        dist: &[f64],
    ) -> Champion
    {
        let target = sample.target();
        let index = &self.indices[j];

        // Total weights on label `0` and `1`,
        // accumulated in the sorted order.
        let (total_zero, total_one) = index.iter()
            .flatten()
            .fold((0f64, 0f64), |(zero, one), &i| {
                if target[i] == 1 { (zero, one + dist[i]) }
                else { (zero + dist[i], one) }
            });

        let mut champion = Champion {
            correct: f64::NEG_INFINITY,
            threshold: f64::NAN,
            positive_side: PositiveSide::RHS,
        };

        let mut zero = 0f64;
        let mut one = 0f64;
        for group in index {
            for &i in group {
                if target[i] == 1 { one += dist[i]; }
                else { zero += dist[i]; }
            }
            let threshold = sample[group[0]][j];

            let candidates = [
                (zero + (total_one - one), PositiveSide::RHS),
                (one + (total_zero - zero), PositiveSide::LHS),
            ];
            for (correct, positive_side) in candidates {
                if correct > champion.correct {
                    champion = Champion { correct, threshold, positive_side };
                }
            }
        }
        champion
    }


    /// Returns the best stump and the weight it classifies correctly.
    pub fn best_stump(&self, sample: &Sample, dist: &[f64])
        -> Result<(DStumpClassifier, f64)>
    {
        self.check(sample, dist)?;

        let champions = (0..self.n_feature).into_par_iter()
            .map(|j| self.best_on_feature(j, sample, dist))
            .collect::<Vec<_>>();

        // Reduce in feature order so that the earliest feature wins ties.
        let mut feature_index = 0_usize;
        let mut best = champions[0];
        for (j, champion) in champions.into_iter().enumerate().skip(1) {
            if champion.correct > best.correct {
                feature_index = j;
                best = champion;
            }
        }

        let stump = DStumpClassifier {
            threshold: best.threshold,
            feature_index,
            positive_side: best.positive_side,
            n_feature: self.n_feature,
        };
        Ok((stump, best.correct))
    }


    fn check(&self, sample: &Sample, dist: &[f64]) -> Result<()> {
        let (n_sample, n_feature) = sample.shape();
        checker::length("sample", self.n_sample, n_sample)?;
        checker::dimension(self.n_feature, n_feature)?;

        let unsorted = (0..self.n_feature).into_par_iter()
            .find_first(|&j| !self.describes(j, sample));
        if let Some(feature) = unsorted {
            return Err(BoostError::UnsortedSample { feature });
        }

        checker::weights(dist, n_sample)
    }


    /// Returns `true` if the cached groups of the `j`-th feature
    /// are still the sorted, equal-valued groups of `sample`.
    fn describes(&self, j: usize, sample: &Sample) -> bool {
        let mut prev: Option<f64> = None;
        for group in &self.indices[j] {
            let head = sample[group[0]][j];
            if group[1..].iter().any(|&i| sample[i][j] != head) {
                return false;
            }

            // Groups are strictly increasing.
            // Each `NaN` forms a group of its own at the end.
            if let Some(p) = prev {
                if p == head || p.total_cmp(&head).is_gt() {
                    return false;
                }
            }
            prev = Some(head);
        }
        true
    }
}


impl WeakLearner for DStump {
    type Hypothesis = DStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of examples", format!("{}", self.n_sample)),
            ("# of features", format!("{}", self.n_feature)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis>
    {
        self.best_stump(sample, dist)
            .map(|(stump, _)| stump)
    }
}
