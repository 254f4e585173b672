//! Defines the error type shared by every module of this crate.
//!
//! All errors are input-validation failures.
//! They are detected before any state is built,
//! so a failed call never leaves a half-constructed value behind.
use thiserror::Error;


/// Errors reported by the clusterer, the weak learner, and the booster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoostError {
    /// A required matrix, vector, or row is empty.
    #[error("missing input: `{what}` is empty")]
    MissingInput {
        /// Name of the empty argument.
        what: &'static str,
    },

    /// Parallel arrays disagree in length.
    #[error("length mismatch on `{what}`: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending argument.
        what: &'static str,
        /// Length implied by the other arguments.
        expected: usize,
        /// Length actually given.
        actual: usize,
    },

    /// The number of clusters is not in `[1, m]`.
    #[error("cluster count k = {k} is out of range [1, {m}]")]
    ClusterCountOutOfRange {
        /// Requested number of clusters.
        k: usize,
        /// Number of points.
        m: usize,
    },

    /// An index is outside of its domain.
    #[error("index {index} is out of range [0, {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Size of the indexed collection.
        len: usize,
    },

    /// A label is neither `0` nor `1`.
    #[error("label {label} at row {row} is neither 0 nor 1")]
    InvalidLabel {
        /// Row of the label.
        row: usize,
        /// The offending value.
        label: i64,
    },

    /// A sample weight is negative (or NaN).
    #[error("weight {weight} at row {row} is not non-negative")]
    NegativeWeight {
        /// Row of the weight.
        row: usize,
        /// The offending value.
        weight: f64,
    },

    /// A sample is not ordered the way a weak learner pre-sorted
    /// its training sample, so the learner was built on other data.
    #[error("sample does not match the sorted order of feature {feature}")]
    UnsortedSample {
        /// First feature whose cached order the sample breaks.
        feature: usize,
    },

    /// A ratio is not in the open interval `(0, 1)`.
    #[error("ratio {ratio} is out of range (0, 1)")]
    RatioOutOfRange {
        /// The offending value.
        ratio: f64,
    },

    /// A sample given for prediction has the wrong dimensionality.
    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch {
        /// Dimensionality the model was built with.
        expected: usize,
        /// Dimensionality of the given sample.
        actual: usize,
    },
}


/// A `Result` alias whose error type is [`BoostError`].
pub type Result<T> = std::result::Result<T, BoostError>;
