//! Provides [`SpatialClusterer`].
use serde::{Serialize, Deserialize};

use crate::{
    common::checker,
    Point,
    Result,
};
use super::{
    Edge,
    UnionFind,
    minimum_spanning_tree,
};


/// Partitions `m` locations into exactly `k` connected clusters.
///
/// The clusterer builds a minimum spanning tree over the locations,
/// where the weight of an edge is the squared distance between
/// its endpoints, and removes the `k - 1` heaviest tree edges.
/// The remaining connected components are the clusters.
///
/// Cluster ids are given in order of the smallest point index
/// of each cluster: the cluster of point `0` has id `0`,
/// the first point outside of it opens cluster `1`, and so on.
///
/// # Example
/// ```
/// use clusterboost::{Point, SpatialClusterer};
///
/// let locations = vec![
///     Point::new(0.0, 0.0), Point::new(10.0, 0.0),
///     Point::new(0.0, 1.0), Point::new(10.0, 1.0),
/// ];
/// let clusterer = SpatialClusterer::new(&locations, 2).unwrap();
///
/// assert_eq!(clusterer.cluster_of(0).unwrap(), 0);
/// assert_eq!(clusterer.cluster_of(1).unwrap(), 1);
///
/// let reduced = clusterer.reduce_dimensions(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(reduced, vec![4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialClusterer {
    // `assignment[i]` is the cluster id of the `i`-th point.
    assignment: Vec<usize>,

    // Number of clusters.
    n_clusters: usize,

    // Spanning tree edges removed to separate the clusters,
    // heaviest last.
    cut_edges: Vec<Edge>,
}


impl SpatialClusterer {
    /// Run the clustering algorithm over `locations`
    /// and create `k` clusters.
    pub fn new(locations: &[Point], k: usize) -> Result<Self> {
        checker::non_empty("locations", locations.len())?;
        let m = locations.len();
        checker::cluster_count(k, m)?;

        let tree = minimum_spanning_tree(locations);

        // Keep the `m - k` lightest edges.
        let (kept, cut) = tree.split_at(m - k);
        let mut uf = UnionFind::new(m);
        for edge in kept {
            uf.union(edge.u, edge.v);
        }

        let mut root_to_id = vec![None; m];
        let mut next_id = 0_usize;
        let assignment = (0..m).map(|i| {
                let root = uf.find(i);
                *root_to_id[root].get_or_insert_with(|| {
                    let id = next_id;
                    next_id += 1;
                    id
                })
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(next_id, k);

        let clusterer = Self {
            assignment,
            n_clusters: k,
            cut_edges: cut.to_vec(),
        };
        Ok(clusterer)
    }


    /// Returns the cluster id of the `i`-th point.
    #[inline]
    pub fn cluster_of(&self, i: usize) -> Result<usize> {
        checker::index(i, self.assignment.len())?;
        Ok(self.assignment[i])
    }


    /// Reduces a raw example of length `m` to a vector of length `k`
    /// whose `c`-th entry is the sum of the raw entries in cluster `c`.
    pub fn reduce_dimensions(&self, raw: &[f64]) -> Result<Vec<f64>> {
        checker::dimension(self.assignment.len(), raw.len())?;

        let mut reduced = vec![0f64; self.n_clusters];
        self.assignment.iter()
            .zip(raw)
            .for_each(|(&c, x)| { reduced[c] += x; });
        Ok(reduced)
    }


    /// Returns the number of points `m`.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.assignment.len()
    }


    /// Returns the number of clusters `k`.
    #[inline]
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }


    /// Returns the cluster ids of all points.
    #[inline]
    pub fn assignment(&self) -> &[usize] {
        &self.assignment[..]
    }


    /// Returns the number of points in each cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.n_clusters];
        self.assignment.iter()
            .for_each(|&c| { sizes[c] += 1; });
        sizes
    }


    /// Returns the `k - 1` spanning tree edges removed
    /// to separate the clusters, sorted by ascending weight.
    #[inline]
    pub fn cut_edges(&self) -> &[Edge] {
        &self.cut_edges[..]
    }
}
