//! Struct `Sample` represents a batch of labeled examples
//! and struct `Point` the location attached to each raw feature.

// Provides point struct.
pub(crate) mod point;
// Provides sample struct.
pub(crate) mod sample_struct;


pub use point::Point;
pub use sample_struct::Sample;
