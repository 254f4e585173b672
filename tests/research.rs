use std::{env, fs};
use clusterboost::prelude::*;


fn indexed_sample(n: usize) -> Sample {
    let data = (0..n).map(|i| vec![i as f64, (n - i) as f64])
        .collect::<Vec<_>>();
    let target = (0..n).map(|i| (i % 2) as i64).collect::<Vec<_>>();
    Sample::new(data, target).unwrap()
}


fn two_locations() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]
}


#[test]
fn logger_writes_a_line_per_round() {
    let train = indexed_sample(20);
    let test = indexed_sample(10);
    let booster = ClusterBoost::init(&train, &two_locations(), 2)
        .unwrap()
        .force_quit_at(5);
    let weak_learner = booster.weak_learner();

    let mut path = env::temp_dir();
    path.push(format!("clusterboost-logger-{}.csv", std::process::id()));

    let mut logger = Logger::new(
            booster, weak_learner, zero_one_loss, &train, &test
        )
        .print_every(usize::MAX);
    let f = logger.run(&path).unwrap();
    assert_eq!(f.hypotheses().len(), 5);
    assert_eq!(logger.booster().hypotheses().len(), 5);

    let log = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let lines = log.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Round,WeightedError,TrainLoss,TestLoss,Time");
    for (t, line) in lines[1..].iter().enumerate() {
        let cols = line.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 5);
        assert_eq!(cols[0], format!("{}", t + 1));

        let train_loss = cols[2].parse::<f64>().unwrap();
        assert!((0.0..=1.0).contains(&train_loss));
    }
}


#[test]
fn logger_with_zero_interval_stays_quiet() {
    let train = indexed_sample(12);
    let test = indexed_sample(6);
    let booster = ClusterBoost::init(&train, &two_locations(), 1)
        .unwrap()
        .force_quit_at(3);
    let weak_learner = booster.weak_learner();

    let mut path = env::temp_dir();
    path.push(format!("clusterboost-quiet-{}.csv", std::process::id()));

    let mut logger = Logger::new(
            booster, weak_learner, zero_one_loss, &train, &test
        )
        .print_every(0);
    let f = logger.run(&path).unwrap();
    assert_eq!(f.hypotheses().len(), 3);

    let log = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(log.lines().count(), 4);
}


#[test]
fn cross_validation_covers_every_row() {
    let sample = indexed_sample(10);
    let locations = two_locations();
    let folds = CrossValidation::new(&sample, &locations, 2)
        .unwrap()
        .n_folds(5)
        .folds()
        .unwrap();
    assert_eq!(folds.len(), 5);

    let mut seen = Vec::new();
    for (train, test) in &folds {
        assert_eq!(train.shape(), (8, 2));
        assert_eq!(test.shape(), (2, 2));
        seen.extend(test.data().iter().map(|x| x[0] as usize));
    }
    seen.sort();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}


#[test]
fn cross_validation_shuffles_deterministically() {
    let sample = indexed_sample(10);
    let locations = two_locations();
    let test_rows = |seed| {
        CrossValidation::new(&sample, &locations, 2)
            .unwrap()
            .shuffle(seed)
            .folds()
            .unwrap()
            .into_iter()
            .map(|(_, test)| test.data().to_vec())
            .collect::<Vec<_>>()
    };
    assert_eq!(test_rows(7), test_rows(7));
}


#[test]
fn cross_validation_skips_incomplete_folds() {
    let sample = indexed_sample(10);
    let locations = two_locations();
    let cv = CrossValidation::new(&sample, &locations, 2)
        .unwrap()
        .n_folds(10)
        .test_ratio(0.3)
        .unwrap();

    let folds = cv.folds().unwrap();
    assert_eq!(folds.len(), 3);
    assert!(folds.iter().all(|(train, test)| {
        train.shape().0 == 7 && test.shape().0 == 3
    }));
}


#[test]
fn cross_validation_scores_every_fold() {
    let sample = indexed_sample(20);
    let locations = two_locations();
    let reports = CrossValidation::new(&sample, &locations, 2)
        .unwrap()
        .n_folds(4)
        .test_ratio(0.25)
        .unwrap()
        .rounds(5)
        .shuffle(3)
        .run()
        .unwrap();

    assert_eq!(reports.len(), 4);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.fold, i);
        assert_eq!((report.n_train, report.n_test), (15, 5));
        assert!((0.0..=1.0).contains(&report.train_loss));
        assert!((0.0..=1.0).contains(&report.test_loss));
    }
}


#[test]
fn cross_validation_rejects_invalid_arguments() {
    let sample = indexed_sample(10);
    let locations = two_locations();

    for ratio in [0.0, 1.0, 1.5, -0.2] {
        let err = CrossValidation::new(&sample, &locations, 2)
            .unwrap()
            .test_ratio(ratio)
            .err()
            .unwrap();
        assert_eq!(err, BoostError::RatioOutOfRange { ratio });
    }
    let err = CrossValidation::new(&sample, &locations, 2)
        .unwrap()
        .test_ratio(f64::NAN)
        .err()
        .unwrap();
    assert!(matches!(err, BoostError::RatioOutOfRange { .. }));

    let err = CrossValidation::new(&sample, &locations[..1], 1)
        .err()
        .unwrap();
    assert!(matches!(err, BoostError::LengthMismatch { what: "row", .. }));

    let err = CrossValidation::new(&sample, &locations, 3).err().unwrap();
    assert_eq!(err, BoostError::ClusterCountOutOfRange { k: 3, m: 2 });

    // `floor(4 * 0.2) = 0` rows would be tested.
    let tiny = indexed_sample(4);
    let err = CrossValidation::new(&tiny, &locations, 2)
        .unwrap()
        .run()
        .unwrap_err();
    assert_eq!(err, BoostError::MissingInput { what: "test fold" });
}


#[test]
fn zero_one_loss_counts_mistakes() {
    let sample = indexed_sample(4);
    let stump = DStumpClassifier::new(0, 1.5, PositiveSide::RHS, 2).unwrap();
    // Predicts `[0, 0, 1, 1]` for the labels `[0, 1, 0, 1]`.
    assert_eq!(zero_one_loss(&sample, &stump).unwrap(), 0.5);

    let dist = [0.1, 0.2, 0.3, 0.4];
    let correct = weighted_accuracy(&sample, &dist, &stump).unwrap();
    assert!((correct - 0.5).abs() < 1e-12);

    let err = weighted_accuracy(&sample, &dist[..3], &stump).unwrap_err();
    assert!(matches!(err, BoostError::LengthMismatch { .. }));
}
