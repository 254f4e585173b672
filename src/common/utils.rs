//! This file provides some common functions
//! such as normalization and mistake detection.
use crate::{Sample, Classifier, Result};


/// Returns a vector whose `i`-th entry is `true`
/// iff `h` misclassifies the `i`-th example of `sample`.
#[inline(always)]
pub(crate) fn mistakes_of_hypothesis<H>(sample: &Sample, h: &H)
    -> Result<Vec<bool>>
    where H: Classifier,
{
    sample.iter()
        .map(|(x, y)| h.predict(x).map(|p| p != y))
        .collect()
}


/// Returns the total weight of the examples `h` classifies correctly.
#[inline(always)]
pub(crate) fn weighted_correct<H>(sample: &Sample, dist: &[f64], h: &H)
    -> Result<f64>
    where H: Classifier,
{
    let mistakes = mistakes_of_hypothesis(sample, h)?;
    let correct = mistakes.into_iter()
        .zip(dist)
        .filter_map(|(miss, d)| if miss { None } else { Some(*d) })
        .sum::<f64>();
    Ok(correct)
}


/// Divides each entry of `items` by their sum.
/// Every entry is assumed to be non-negative and the sum positive.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) {
    let z = items.iter().sum::<f64>();
    debug_assert!(z > 0.0, "cannot normalize a zero vector");

    items.iter_mut()
        .for_each(|item| { *item /= z; });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_sums_to_one() {
        let mut items = vec![1.0, 2.0, 1.0];
        normalize(&mut items);
        assert_eq!(items, vec![0.25, 0.5, 0.25]);
    }
}
