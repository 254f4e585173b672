use clusterboost::prelude::*;
use rand::prelude::*;
use rand::distributions::Uniform;

use std::collections::HashSet;


fn random_locations(m: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let uni = Uniform::new(-100.0, 100.0);
    (0..m).map(|_| Point::new(uni.sample(&mut rng), uni.sample(&mut rng)))
        .collect()
}


#[test]
fn two_separated_pairs() {
    let locations = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 1.0),
        Point::new(100.0, 101.0),
    ];
    let clusterer = SpatialClusterer::new(&locations, 2).unwrap();

    let c0 = clusterer.cluster_of(0).unwrap();
    let c1 = clusterer.cluster_of(1).unwrap();
    assert_eq!(c0, clusterer.cluster_of(2).unwrap());
    assert_eq!(c1, clusterer.cluster_of(3).unwrap());
    assert_ne!(c0, c1);

    // The heaviest spanning tree edge connects the pairs.
    let cut = clusterer.cut_edges();
    assert_eq!(cut.len(), 1);
    assert!(cut[0].weight > 1.0);
}


#[test]
fn points_on_a_line() {
    let locations = [0.0, 1.0, 2.0, 10.0, 11.0, 30.0].into_iter()
        .map(|x| Point::new(x, 0.0))
        .collect::<Vec<_>>();
    let clusterer = SpatialClusterer::new(&locations, 3).unwrap();

    assert_eq!(clusterer.assignment(), &[0, 0, 0, 1, 1, 2]);
    assert_eq!(clusterer.cluster_sizes(), vec![3, 2, 1]);

    let weights = clusterer.cut_edges()
        .iter()
        .map(|e| e.weight)
        .collect::<Vec<_>>();
    assert_eq!(weights, vec![64.0, 361.0]);

    let reduced = clusterer
        .reduce_dimensions(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .unwrap();
    assert_eq!(reduced, vec![6.0, 9.0, 6.0]);
}


#[test]
fn every_cluster_is_non_empty() {
    let m = 40;
    let locations = random_locations(m, 7);
    for k in [1, 2, 5, 13, 39, 40] {
        let clusterer = SpatialClusterer::new(&locations, k).unwrap();
        let ids = (0..m).map(|i| clusterer.cluster_of(i).unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(ids, (0..k).collect::<HashSet<_>>());
        assert_eq!(clusterer.n_clusters(), k);
        assert_eq!(clusterer.n_points(), m);
    }
}


#[test]
fn cluster_of_is_stable() {
    let locations = random_locations(25, 11);
    let clusterer = SpatialClusterer::new(&locations, 6).unwrap();
    let again = SpatialClusterer::new(&locations, 6).unwrap();

    for i in 0..25 {
        let c = clusterer.cluster_of(i).unwrap();
        assert_eq!(c, clusterer.cluster_of(i).unwrap());
        assert_eq!(c, again.cluster_of(i).unwrap());
    }
}


#[test]
fn extreme_cluster_counts() {
    let locations = random_locations(8, 3);
    let raw = (1..=8).map(|x| x as f64).collect::<Vec<_>>();

    let one = SpatialClusterer::new(&locations, 1).unwrap();
    assert_eq!(one.reduce_dimensions(&raw).unwrap(), vec![36.0]);

    let all = SpatialClusterer::new(&locations, 8).unwrap();
    assert_eq!(all.reduce_dimensions(&raw).unwrap(), raw);
}


#[test]
fn reduction_is_linear() {
    let m = 30;
    let locations = random_locations(m, 5);
    let clusterer = SpatialClusterer::new(&locations, 7).unwrap();

    // Small integers keep every sum exact.
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let a = (0..m).map(|_| rng.gen_range(-50..50) as f64)
            .collect::<Vec<_>>();
        let b = (0..m).map(|_| rng.gen_range(-50..50) as f64)
            .collect::<Vec<_>>();
        let sum = a.iter().zip(&b).map(|(x, y)| x + y).collect::<Vec<_>>();

        let ra = clusterer.reduce_dimensions(&a).unwrap();
        let rb = clusterer.reduce_dimensions(&b).unwrap();
        let expected = ra.iter().zip(&rb).map(|(x, y)| x + y)
            .collect::<Vec<_>>();

        assert_eq!(clusterer.reduce_dimensions(&sum).unwrap(), expected);
    }
}


#[test]
fn invalid_arguments() {
    let locations = random_locations(4, 1);

    let err = SpatialClusterer::new(&locations, 0).unwrap_err();
    assert_eq!(err, BoostError::ClusterCountOutOfRange { k: 0, m: 4 });

    let err = SpatialClusterer::new(&locations, 5).unwrap_err();
    assert_eq!(err, BoostError::ClusterCountOutOfRange { k: 5, m: 4 });

    let err = SpatialClusterer::new(&[], 1).unwrap_err();
    assert!(matches!(err, BoostError::MissingInput { .. }));

    let clusterer = SpatialClusterer::new(&locations, 2).unwrap();
    let err = clusterer.cluster_of(4).unwrap_err();
    assert_eq!(err, BoostError::IndexOutOfRange { index: 4, len: 4 });

    let err = clusterer.reduce_dimensions(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, BoostError::DimensionMismatch { expected: 4, actual: 3 });
}
