//! Defines some common functions used in this library.

/// Defines some useful functions such as weighted accuracy.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
