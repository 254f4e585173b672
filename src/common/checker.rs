//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, range of labels and weights.

use crate::{BoostError, Result};


/// Tolerance used when checking `sum(dist[..]) == 1`.
pub(crate) const SIMPLEX_TOLERANCE: f64 = 1e-9;


/// Check whether the slice named `what` is non-empty.
#[inline(always)]
pub(crate) fn non_empty(what: &'static str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(BoostError::MissingInput { what });
    }
    Ok(())
}


/// Check whether the slice named `what` has `expected` entries.
#[inline(always)]
pub(crate) fn length(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> Result<()>
{
    if expected != actual {
        return Err(BoostError::LengthMismatch { what, expected, actual });
    }
    Ok(())
}


/// Check whether all labels are `0` or `1`.
#[inline(always)]
pub(crate) fn labels(target: &[i64]) -> Result<()> {
    match target.iter().position(|&y| y != 0 && y != 1) {
        Some(row) => Err(BoostError::InvalidLabel { row, label: target[row] }),
        None => Ok(()),
    }
}


/// Check whether `dist` has `n_sample` non-negative entries.
/// `NaN` is rejected as well.
#[inline(always)]
pub(crate) fn weights(dist: &[f64], n_sample: usize) -> Result<()> {
    length("weights", n_sample, dist.len())?;
    match dist.iter().position(|w| !(*w >= 0.0)) {
        Some(row) => Err(BoostError::NegativeWeight { row, weight: dist[row] }),
        None => Ok(()),
    }
}


/// Check whether the number of clusters is in `[1, m]`.
#[inline(always)]
pub(crate) fn cluster_count(k: usize, m: usize) -> Result<()> {
    if k < 1 || k > m {
        return Err(BoostError::ClusterCountOutOfRange { k, m });
    }
    Ok(())
}


/// Check whether `index` is in `[0, len)`.
#[inline(always)]
pub(crate) fn index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(BoostError::IndexOutOfRange { index, len });
    }
    Ok(())
}


/// Check whether an example has the dimensionality
/// the model was built with.
#[inline(always)]
pub(crate) fn dimension(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(BoostError::DimensionMismatch { expected, actual });
    }
    Ok(())
}


/// Returns `true` if `dist` sums to `1` within [`SIMPLEX_TOLERANCE`].
#[inline(always)]
pub(crate) fn is_distribution(dist: &[f64]) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE
        && dist.iter().all(|d| *d >= 0f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_success_01() {
        assert!(labels(&[0, 1, 1, 0]).is_ok());
    }

    #[test]
    fn test_labels_failure_01() {
        let err = labels(&[0, 1, -1, 0]).unwrap_err();
        assert_eq!(err, BoostError::InvalidLabel { row: 2, label: -1 });
    }

    #[test]
    fn test_weights_success_01() {
        assert!(weights(&[0.0, 0.5, 0.5], 3).is_ok());
    }

    #[test]
    fn test_weights_failure_01() {
        let err = weights(&[0.5, -0.1, 0.6], 3).unwrap_err();
        assert!(matches!(err, BoostError::NegativeWeight { row: 1, .. }));
    }

    #[test]
    fn test_weights_failure_02() {
        let err = weights(&[0.5, f64::NAN], 2).unwrap_err();
        assert!(matches!(err, BoostError::NegativeWeight { row: 1, .. }));
    }

    #[test]
    fn test_weights_failure_03() {
        let err = weights(&[0.5, 0.5], 3).unwrap_err();
        assert!(matches!(err, BoostError::LengthMismatch { .. }));
    }

    #[test]
    fn test_cluster_count_success_01() {
        assert!(cluster_count(1, 1).is_ok());
        assert!(cluster_count(5, 5).is_ok());
    }

    #[test]
    fn test_cluster_count_failure_01() {
        assert!(cluster_count(0, 5).is_err());
        assert!(cluster_count(6, 5).is_err());
    }

    #[test]
    fn test_is_distribution() {
        assert!(is_distribution(&[0.25; 4]));
        assert!(!is_distribution(&[0.5; 4]));
    }
}
