//! Provides [`CrossValidation`] for [`ClusterBoost`].
use colored::Colorize;
use rand::prelude::*;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    booster::DEFAULT_ROUNDS,
    common::checker,
    research::zero_one_loss,
    BoostError,
    Booster,
    ClusterBoost,
    Point,
    Sample,
    Result,
};

const DEFAULT_TEST_RATIO: f64 = 0.2;
const DEFAULT_N_FOLDS: usize = 5;
const WIDTH: usize = 6;
const PREC_WIDTH: usize = 5;


/// Zero-one losses of a [`ClusterBoost`] trained on a single fold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldReport {
    /// Index of the fold, starting at `0`.
    pub fold: usize,
    /// Number of training examples.
    pub n_train: usize,
    /// Number of test examples.
    pub n_test: usize,
    /// Zero-one loss on the training examples.
    pub train_loss: f64,
    /// Zero-one loss on the test examples.
    pub test_loss: f64,
}


/// K-fold cross validation of [`ClusterBoost`].
///
/// The rows of the sample are split into blocks of
/// `floor(n * test_ratio)` rows, in the original order
/// or in a seeded random order.
/// Fold `i` tests on the `i`-th block and trains on all other rows.
/// Only complete blocks are used, so at most `n / block` folds run.
///
/// Every fold clusters the same feature locations,
/// trains its own booster for a fixed number of rounds,
/// and reports its train/test losses.
///
/// # Example
/// ```no_run
/// use clusterboost::prelude::*;
///
/// # fn main() -> clusterboost::Result<()> {
/// # let (sample, locations): (Sample, Vec<Point>) = todo!();
/// let reports = CrossValidation::new(&sample, &locations, 5)?
///     .n_folds(5)
///     .test_ratio(0.2)?
///     .rounds(100)
///     .shuffle(777)
///     .verbose(true)
///     .run()?;
///
/// let n_folds = reports.len() as f64;
/// let test_loss = reports.iter().map(|r| r.test_loss).sum::<f64>() / n_folds;
/// println!("mean test loss: {test_loss}");
/// # Ok(())
/// # }
/// ```
pub struct CrossValidation<'a> {
    sample: &'a Sample,
    locations: &'a [Point],
    n_clusters: usize,
    n_rounds: usize,
    n_folds: usize,
    test_ratio: f64,

    // Fold `i` tests on the `i`-th block of `order`.
    order: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Prepares the cross validation of [`ClusterBoost`]
    /// with `k` clusters over `locations`.
    ///
    /// Fails if `locations` does not match the width of `sample`
    /// or `k` is not in `[1, m]`.
    pub fn new(sample: &'a Sample, locations: &'a [Point], k: usize)
        -> Result<Self>
    {
        checker::non_empty("locations", locations.len())?;
        checker::cluster_count(k, locations.len())?;
        checker::length("row", locations.len(), sample.shape().1)?;

        let order = (0..sample.shape().0).collect::<Vec<_>>();
        Ok(Self {
            sample,
            locations,
            n_clusters: k,
            n_rounds: DEFAULT_ROUNDS,
            n_folds: DEFAULT_N_FOLDS,
            test_ratio: DEFAULT_TEST_RATIO,
            order,
            verbose: false,
        })
    }


    /// Set the number of folds. Default is `5`.
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Set the fraction of rows tested in each fold. Default is `0.2`.
    /// Fails unless `ratio` is in `(0, 1)`.
    pub fn test_ratio(mut self, ratio: f64) -> Result<Self> {
        if !(0.0 < ratio && ratio < 1.0) {
            return Err(BoostError::RatioOutOfRange { ratio });
        }
        self.test_ratio = ratio;
        Ok(self)
    }


    /// Set the number of boosting rounds per fold.
    /// Default is [`DEFAULT_ROUNDS`].
    pub fn rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// Shuffle the rows with the given seed before splitting.
    /// By default, rows are split in their original order.
    pub fn shuffle(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.order.shuffle(&mut rng);
        self
    }


    /// If `true`, `run` prints a colored line per fold.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Number of rows in each test block.
    fn test_size(&self) -> Result<usize> {
        let n_sample = self.sample.shape().0;
        let size = (n_sample as f64 * self.test_ratio) as usize;
        if size == 0 {
            return Err(BoostError::MissingInput { what: "test fold" });
        }
        if size >= n_sample {
            return Err(BoostError::MissingInput { what: "training fold" });
        }
        Ok(size)
    }


    /// Returns the training/test pairs, one per fold.
    /// Fails if the test ratio leaves either part empty.
    pub fn folds(&self) -> Result<Vec<(Sample, Sample)>> {
        let size = self.test_size()?;
        let n_folds = self.n_folds.min(self.sample.shape().0 / size);

        let folds = (0..n_folds)
            .map(|i| self.sample.split(&self.order, i * size, (i + 1) * size))
            .collect();
        Ok(folds)
    }


    /// Trains and scores a booster on every fold.
    /// Folds run in parallel; reports are in fold order.
    pub fn run(&self) -> Result<Vec<FoldReport>> {
        let folds = self.folds()?;
        let reports = folds.par_iter()
            .enumerate()
            .map(|(fold, (train, test))| self.score(fold, train, test))
            .collect::<Result<Vec<_>>>()?;

        if self.verbose {
            reports.iter().for_each(print_report);
        }
        Ok(reports)
    }


    fn score(&self, fold: usize, train: &Sample, test: &Sample)
        -> Result<FoldReport>
    {
        let mut booster = ClusterBoost::init(
                train, self.locations, self.n_clusters
            )?
            .force_quit_at(self.n_rounds);
        let weak_learner = booster.weak_learner();
        let f = booster.run(&weak_learner)?;

        Ok(FoldReport {
            fold,
            n_train: train.shape().0,
            n_test: test.shape().0,
            train_loss: zero_one_loss(train, &f)?,
            test_loss: zero_one_loss(test, &f)?,
        })
    }
}


fn print_report(report: &FoldReport) {
    println!(
        "{}  {}  {}",
        format!("  [{: >3}'th fold]", report.fold + 1).bold().red(),
        format!(
            "[TRAIN {:>WIDTH$} | {:.PREC_WIDTH$}]",
            report.n_train, report.train_loss,
        ).bold().green(),
        format!(
            "[TEST {:>WIDTH$} | {:.PREC_WIDTH$}]",
            report.n_test, report.test_loss,
        ).bold().yellow(),
    );
}
