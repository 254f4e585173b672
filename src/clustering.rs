//! Groups the locations of raw features into connected clusters
//! and reduces raw examples by summing the features of each cluster.

mod union_find;
mod mst;
mod spatial_clusterer;


pub use spatial_clusterer::SpatialClusterer;
pub use mst::Edge;

pub(crate) use union_find::UnionFind;
pub(crate) use mst::minimum_spanning_tree;
