use crate::{
    common::{checker, utils},
    Classifier,
    Sample,
    Result,
};


/// Returns the fraction of the examples of `sample`
/// that `f` misclassifies.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> Result<f64>
    where H: Classifier,
{
    let n_sample = sample.shape().0 as f64;

    let n_mistakes = utils::mistakes_of_hypothesis(sample, f)?
        .into_iter()
        .filter(|miss| *miss)
        .count();
    Ok(n_mistakes as f64 / n_sample)
}


/// Returns the total weight on the examples of `sample`
/// that `f` classifies correctly.
/// `dist[i]` is the weight on the `i`-th example.
pub fn weighted_accuracy<H>(sample: &Sample, dist: &[f64], f: &H)
    -> Result<f64>
    where H: Classifier,
{
    checker::weights(dist, sample.shape().0)?;
    utils::weighted_correct(sample, dist, f)
}
