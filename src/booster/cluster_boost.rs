//! Provides [`ClusterBoost`].
use crate::{
    common::{checker, utils},
    research::Research,
    Booster,
    WeakLearner,
    Classifier,
    ClusteredClassifier,
    MajorityVote,
    DStump,
    DStumpClassifier,
    Point,
    Sample,
    SpatialClusterer,
    Result,
};

use std::ops::ControlFlow;


/// The number of rounds [`Booster::run`] performs by default.
pub const DEFAULT_ROUNDS: usize = 100;


/// Boosted decision stumps over spatially clustered features.
///
/// On construction, `ClusterBoost` groups the `m` feature locations into
/// `k` clusters with [`SpatialClusterer`], reduces every training example
/// once, and puts the uniform weight `1 / n` on each example.
///
/// Each round trains a stump against the current weights,
/// doubles the weight of every example the stump misclassifies,
/// and renormalizes the weights to sum to `1`.
/// Unlike `AdaBoost`, the factor `2` does not depend on
/// the accuracy of the stump.
///
/// Predictions are the unweighted majority vote of all stumps,
/// where ties go to `0`.
///
/// # Example
/// ```no_run
/// use clusterboost::prelude::*;
///
/// # fn main() -> clusterboost::Result<()> {
/// # let (data, target, locations) = (vec![vec![0.0]], vec![0], vec![Point::new(0.0, 0.0)]);
/// // `data` is an `n x m` matrix, `target` holds `n` labels in `{0, 1}`,
/// // and `locations` holds the `m` locations of the features.
/// let sample = Sample::new(data, target)?;
///
/// // Group the features into `5` clusters and run `200` rounds.
/// let mut booster = ClusterBoost::init(&sample, &locations, 5)?
///     .force_quit_at(200);
/// let weak_learner = booster.weak_learner();
/// let f = booster.run(&weak_learner)?;
///
/// let training_loss = zero_one_loss(&sample, &f)?;
/// println!("Training Loss is: {training_loss}");
/// # Ok(())
/// # }
/// ```
///
/// The rounds can also be driven one by one with [`ClusterBoost::iterate`].
/// ```
/// use clusterboost::prelude::*;
///
/// let data = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
/// let locations = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
/// let sample = Sample::new(data, vec![0, 1]).unwrap();
///
/// let mut booster = ClusterBoost::init(&sample, &locations, 2).unwrap();
/// booster.iterate().unwrap();
///
/// assert_eq!(booster.predict(&[0.0, 3.0]).unwrap(), 0);
/// assert_eq!(booster.predict(&[3.0, 0.0]).unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterBoost {
    // Clusters of the feature locations.
    clusterer: SpatialClusterer,

    // Training sample, reduced by `clusterer`.
    sample: Sample,

    // Weights on the examples of `sample`.
    dist: Vec<f64>,

    // Stumps obtained so far, in order.
    hypotheses: MajorityVote<DStumpClassifier>,

    // Weak learner used by `iterate`.
    dstump: DStump,

    // Weighted error of the latest stump,
    // measured before the weights are updated.
    weighted_error: Option<f64>,

    // The algorithm terminates after `max_iter` rounds of `run`.
    max_iter: usize,
}


impl ClusterBoost {
    /// Initialize the `ClusterBoost`.
    ///
    /// `sample` holds the raw `n x m` examples and their labels,
    /// `locations` the `m` locations of the raw features,
    /// and `k` the number of clusters.
    pub fn init(sample: &Sample, locations: &[Point], k: usize)
        -> Result<Self>
    {
        let clusterer = SpatialClusterer::new(locations, k)?;
        let sample = sample.reduce(&clusterer)?;
        let dstump = DStump::init(&sample);

        let n_sample = sample.shape().0;
        let uni = 1.0 / n_sample as f64;

        Ok(Self {
            clusterer,
            sample,
            dist: vec![uni; n_sample],
            hypotheses: MajorityVote::new(),
            dstump,
            weighted_error: None,
            max_iter: DEFAULT_ROUNDS,
        })
    }


    /// Force quits after `it` rounds of [`Booster::run`].
    /// The default value is [`DEFAULT_ROUNDS`].
    pub fn force_quit_at(mut self, it: usize) -> Self {
        self.max_iter = it;
        self
    }


    /// Returns the decision stump weak learner
    /// over the reduced training sample.
    pub fn weak_learner(&self) -> DStump {
        self.dstump.clone()
    }


    /// Applies one round of boosting with the decision stump.
    pub fn iterate(&mut self) -> Result<()> {
        let h = self.dstump.produce(&self.sample, &self.dist)?;
        self.update_params(h)
    }


    /// Returns the prediction of the current majority vote
    /// for a raw example of length `m`.
    pub fn predict(&self, example: &[f64]) -> Result<i64> {
        let reduced = self.clusterer.reduce_dimensions(example)?;
        self.hypotheses.predict(&reduced)
    }


    /// Returns a copy of the current weights on the training examples.
    pub fn weights(&self) -> Vec<f64> {
        self.dist.clone()
    }


    /// Returns the stumps obtained so far, in order.
    pub fn hypotheses(&self) -> &[DStumpClassifier] {
        &self.hypotheses.hypotheses[..]
    }


    /// Returns the clusterer of the feature locations.
    pub fn clusterer(&self) -> &SpatialClusterer {
        &self.clusterer
    }


    /// Returns the reduced training sample.
    pub fn reduced_sample(&self) -> &Sample {
        &self.sample
    }


    /// Returns the weighted error of the latest stump
    /// under the weights it was trained with.
    /// Returns `None` before the first round.
    pub fn weighted_error(&self) -> Option<f64> {
        self.weighted_error
    }


    /// Doubles the weights of the examples `h` misclassifies,
    /// renormalizes them, and appends `h` to the vote.
    fn update_params(&mut self, h: DStumpClassifier) -> Result<()> {
        let mistakes = utils::mistakes_of_hypothesis(&self.sample, &h)?;

        let mut error = 0f64;
        self.dist.iter_mut()
            .zip(mistakes)
            .filter(|(_, miss)| *miss)
            .for_each(|(d, _)| {
                error += *d;
                *d *= 2.0;
            });
        utils::normalize(&mut self.dist);
        debug_assert!(checker::is_distribution(&self.dist));

        self.weighted_error = Some(error);
        self.hypotheses.push(h);
        Ok(())
    }
}


impl Booster<DStumpClassifier> for ClusterBoost {
    type Output = ClusteredClassifier<DStumpClassifier>;


    fn name(&self) -> &str {
        "ClusterBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, _) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of locations", format!("{}", self.clusterer.n_points())),
            ("# of clusters", format!("{}", self.clusterer.n_clusters())),
            ("Max iteration", format!("{}", self.max_iter)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) {
        let n_sample = self.sample.shape().0;
        let uni = 1.0 / n_sample as f64;
        self.dist = vec![uni; n_sample];

        self.hypotheses = MajorityVote::new();
        self.weighted_error = None;
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> Result<ControlFlow<usize>>
        where W: WeakLearner<Hypothesis = DStumpClassifier>,
    {
        if self.max_iter < iteration {
            return Ok(ControlFlow::Break(self.max_iter));
        }

        let h = weak_learner.produce(&self.sample, &self.dist)?;
        self.update_params(h)?;

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        self.current_hypothesis()
    }
}


impl Research for ClusterBoost {
    type Output = ClusteredClassifier<DStumpClassifier>;


    fn current_hypothesis(&self) -> Self::Output {
        ClusteredClassifier::new(
            self.clusterer.clone(),
            self.hypotheses.clone(),
        )
    }


    fn weighted_error(&self) -> Option<f64> {
        self.weighted_error
    }
}
