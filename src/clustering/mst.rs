use serde::{Serialize, Deserialize};

use crate::Point;
use super::UnionFind;


/// An undirected edge `(u, v)` of the complete graph over the locations,
/// weighted by the squared distance between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Squared Euclidean distance between `u` and `v`.
    pub weight: f64,
}


/// Computes a minimum spanning tree of the complete graph over `locations`
/// by Kruskal's algorithm.
///
/// The returned edges are sorted by ascending weight.
/// Edges of equal weight keep the lexicographic order of `(u, v)`,
/// so the result is deterministic for a fixed input.
pub(crate) fn minimum_spanning_tree(locations: &[Point]) -> Vec<Edge> {
    let m = locations.len();
    if m < 2 { return Vec::new(); }

    let mut edges = Vec::with_capacity(m * (m - 1) / 2);
    for u in 0..m {
        for v in u+1..m {
            let weight = locations[u].distance_squared_to(&locations[v]);
            edges.push(Edge { u, v, weight });
        }
    }
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(m);
    let mut tree = Vec::with_capacity(m - 1);
    for edge in edges {
        if uf.union(edge.u, edge.v) {
            tree.push(edge);
            if tree.len() == m - 1 { break; }
        }
    }
    tree
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_tree_on_a_line() {
        let locations = [0.0, 1.0, 3.0, 6.0].into_iter()
            .map(|x| Point::new(x, 0.0))
            .collect::<Vec<_>>();
        let tree = minimum_spanning_tree(&locations);

        let pairs = tree.iter()
            .map(|e| (e.u, e.v, e.weight))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 1, 1.0), (1, 2, 4.0), (2, 3, 9.0)]);
    }

    #[test]
    fn single_point_has_no_edge() {
        let tree = minimum_spanning_tree(&[Point::new(1.0, 1.0)]);
        assert!(tree.is_empty());
    }
}
