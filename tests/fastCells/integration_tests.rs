use approx::assert_abs_diff_eq;
use fastCells::internals::algorithms::two_means::split;
use fastCells::internals::engine::executor::PartitionExecutor;
use fastCells::internals::math::centroid::compute_centroid;
use fastCells::internals::primitives::cell::cell_capacity;
use fastCells::prelude::*;
#[cfg(feature = "cpu")]
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic scattered coordinates (no RNG needed).
fn scattered(n: usize) -> (Vec<f64>, Vec<f64>) {
    let lat = (0..n).map(|i| ((i * 7919) % 1000) as f64 / 10.0 - 50.0).collect();
    let lon = (0..n).map(|i| ((i * 104_729) % 1000) as f64 / 5.0 - 100.0).collect();
    (lat, lon)
}

#[test]
fn test_median_split_single_level() {
    let lat = vec![30.0, 10.0, 40.0, 20.0];
    let lon = vec![5.0, 6.0, 7.0, 8.0];

    let res = CellPartitioner::new()
        .levels(1)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();

    // Lower-latitude half maps to 0.
    assert_eq!(res.cell_ids, vec![1, 0, 1, 0]);
    assert_eq!(res.occupied_cells(), 2);
}

#[test]
fn test_median_split_two_levels() {
    let lat = vec![10.0, 20.0, 30.0, 40.0];
    let lon = vec![3.0, -1.0, 8.0, 2.0];

    let res = CellPartitioner::new()
        .levels(2)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();

    assert!(res.cell_ids[0] <= 1);
    assert!(res.cell_ids[1] <= 1);
    assert!(res.cell_ids[2] >= 2);
    assert!(res.cell_ids[3] >= 2);
    // Second level splits each half by longitude.
    assert_eq!(res.cell_ids, vec![1, 0, 3, 2]);
    assert_eq!(res.run.diagnostics.splits, 3);
    assert_eq!(res.run.strategy, Strategy::MedianSplit);
    assert_eq!(res.run.seed, None);
}

#[test]
fn test_empty_input() {
    let lat: Vec<f64> = Vec::new();
    let lon: Vec<f64> = Vec::new();

    let median = CellPartitioner::new()
        .levels(5)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert!(median.is_empty());

    let two_means = CellPartitioner::new()
        .levels(5)
        .adapter(TwoMeans)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert!(two_means.is_empty());
    assert_eq!(two_means.run.diagnostics.splits, 0);
}

#[test]
fn test_single_point() {
    let res = CellPartitioner::new()
        .levels(8)
        .adapter(TwoMeans)
        .seed(1)
        .build()
        .unwrap()
        .assign(&[12.5], &[7.0])
        .unwrap();
    assert_eq!(res.cell_ids, vec![0]);
}

#[test]
fn test_invalid_levels() {
    let err = CellPartitioner::<f64>::new()
        .adapter(MedianSplit)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        CellError::InvalidLevels {
            levels: 0,
            max: MAX_LEVELS
        }
    );

    let err = CellPartitioner::<f64>::new()
        .levels(MAX_LEVELS + 1)
        .adapter(TwoMeans)
        .build()
        .unwrap_err();
    assert!(matches!(err, CellError::InvalidLevels { .. }));
}

#[test]
fn test_invalid_two_means_config() {
    let err = CellPartitioner::<f64>::new()
        .levels(3)
        .max_iterations(0)
        .adapter(TwoMeans)
        .build()
        .unwrap_err();
    assert_eq!(err, CellError::InvalidIterations(0));

    let err = CellPartitioner::new()
        .levels(3)
        .adapter(TwoMeans)
        .convergence_threshold(-1.0f64)
        .build()
        .unwrap_err();
    assert!(matches!(err, CellError::InvalidThreshold(_)));
}

#[test]
fn test_error_handling() {
    let model = CellPartitioner::new()
        .levels(2)
        .adapter(MedianSplit)
        .build()
        .unwrap();

    match model.assign(&vec![1.0, 2.0, 3.0], &vec![1.0, 2.0]) {
        Err(CellError::MismatchedInputs { lat_len, lon_len }) => {
            assert_eq!((lat_len, lon_len), (3, 2));
        }
        other => panic!("Expected MismatchedInputs error, got {:?}", other),
    }

    match model.assign(&vec![1.0, f64::NAN], &vec![1.0, 2.0]) {
        Err(CellError::NonFiniteCoordinate { index }) => assert_eq!(index, 1),
        other => panic!("Expected NonFiniteCoordinate error, got {:?}", other),
    }
}

#[test]
fn test_median_split_balanced_cells() {
    let (lat, lon) = scattered(1000);
    let levels = 4;

    let res = CellPartitioner::new()
        .levels(levels)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();

    let pops = res.cell_populations();
    assert_eq!(pops.len(), 16);
    let min = *pops.values().min().unwrap();
    let max = *pops.values().max().unwrap();
    // 1000 / 16 = 62.5 with at most one point of imbalance per level.
    assert!(min >= 62 && max <= 63, "min {min}, max {max}");
}

#[test]
fn test_median_split_order_independent() {
    let (lat, lon) = scattered(200);
    let model = CellPartitioner::new()
        .levels(6)
        .adapter(MedianSplit)
        .build()
        .unwrap();

    let mut store = PointStore::from_coordinates(&lat, &lon).unwrap();
    let first = model.partition_store(&mut store).unwrap();

    // Shuffle the store and run again.
    let mut shuffled = store.clone().into_points();
    shuffled.reverse();
    shuffled.rotate_left(37);
    let mut store = PointStore::from_points(shuffled);
    let second = model.partition_store(&mut store).unwrap();

    assert_eq!(first.cell_ids, second.cell_ids);
}

#[test]
fn test_duplicate_coordinates() {
    let lat = vec![5.0; 9];
    let lon = vec![5.0; 9];

    let median = CellPartitioner::new()
        .levels(3)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert!(median.cell_ids.iter().all(|&id| id < 8));

    let two_means = CellPartitioner::new()
        .levels(3)
        .adapter(TwoMeans)
        .seed(5)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert!(two_means.cell_ids.iter().all(|&id| id < 8));
    // Identical points never form two clusters on their own.
    assert_eq!(
        two_means.run.diagnostics.degenerate_splits,
        two_means.run.diagnostics.splits
    );
    // Midpoint fallback still spreads 9 points over every cell.
    assert_eq!(two_means.occupied_cells(), 8);
}

#[test]
fn test_two_means_separates_clusters() {
    let mut lat = Vec::new();
    let mut lon = Vec::new();
    for i in 0..20 {
        let d = i as f64 * 0.01;
        lat.push(48.85 + d);
        lon.push(2.35 - d);
        lat.push(40.71 - d);
        lon.push(-74.0 + d);
    }

    let res = CellPartitioner::new()
        .levels(1)
        .adapter(TwoMeans)
        .seed(2024)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();

    // Even positions are one city, odd positions the other.
    let even = res.cell_ids[0];
    let odd = res.cell_ids[1];
    assert_ne!(even, odd);
    for (i, &id) in res.cell_ids.iter().enumerate() {
        assert_eq!(id, if i % 2 == 0 { even } else { odd });
    }
    assert_eq!(res.run.seed, Some(2024));
}

#[test]
fn test_two_means_reproducible_with_seed() {
    let (lat, lon) = scattered(300);
    let model = CellPartitioner::new()
        .levels(5)
        .adapter(TwoMeans)
        .seed(99)
        .build()
        .unwrap();

    let a = model.assign(&lat, &lon).unwrap();
    let b = model.assign(&lat, &lon).unwrap();
    assert_eq!(a.cell_ids, b.cell_ids);
    assert_eq!(a.run, b.run);

    // Replaying a recorded seed from an unseeded run.
    let unseeded = CellPartitioner::new()
        .levels(5)
        .adapter(TwoMeans)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    let seed = unseeded.run.seed.unwrap();
    let replay = CellPartitioner::new()
        .levels(5)
        .adapter(TwoMeans)
        .seed(seed)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert_eq!(unseeded.cell_ids, replay.cell_ids);
}

#[test]
fn test_two_means_with_caller_rng() {
    let (lat, lon) = scattered(64);
    let model = CellPartitioner::new()
        .levels(3)
        .adapter(TwoMeans)
        .build()
        .unwrap();

    let mut a = PointStore::from_coordinates(&lat, &lon).unwrap();
    let mut b = a.clone();
    let run_a = model
        .partition_with_rng(a.points_mut(), &mut ChaCha8Rng::seed_from_u64(3))
        .unwrap();
    model
        .partition_with_rng(b.points_mut(), &mut ChaCha8Rng::seed_from_u64(3))
        .unwrap();
    a.restore_order(false);
    b.restore_order(false);

    assert_eq!(a.cell_ids(), b.cell_ids());
    assert_eq!(run_a.seed, None);
    assert!(run_a.diagnostics.splits > 0);
}

#[test]
fn test_identity_preserved_in_place() {
    let (lat, lon) = scattered(257);
    let mut store = PointStore::from_coordinates(&lat, &lon).unwrap();

    CellPartitioner::new()
        .levels(7)
        .adapter(TwoMeans)
        .seed(8)
        .build()
        .unwrap()
        .partition(store.points_mut())
        .unwrap();

    let mut indices: Vec<usize> = store.points().iter().map(|p| p.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..257).collect::<Vec<_>>());

    // Coordinates travel with their identity.
    for p in store.points() {
        assert_eq!(p.lat, lat[p.index]);
        assert_eq!(p.lon, lon[p.index]);
        assert!(p.cell_id < cell_capacity(7).unwrap());
    }
}

#[test]
fn test_custom_identities() {
    // Identities need not be positions, e.g. external stop ids.
    let points = vec![
        Point::new(907, 52.52, 13.40),
        Point::new(12, 48.14, 11.58),
        Point::new(455, 53.55, 9.99),
        Point::new(3, 50.94, 6.96),
    ];
    let mut store = PointStore::from_points(points);

    let res = CellPartitioner::new()
        .levels(1)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .partition_store(&mut store)
        .unwrap();

    let ids: Vec<usize> = store.points().iter().map(|p| p.index).collect();
    assert_eq!(ids, vec![3, 12, 455, 907]);
    // Munich and Cologne are the southern half.
    assert_eq!(res.cell_ids, vec![0, 0, 1, 1]);
}

#[test]
fn test_parallel_matches_sequential() {
    let (lat, lon) = scattered(500);

    let seq = CellPartitioner::new()
        .levels(6)
        .parallel(false)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    let par = CellPartitioner::new()
        .levels(6)
        .adapter(MedianSplit)
        .parallel(true)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert_eq!(seq.cell_ids, par.cell_ids);

    let seq = CellPartitioner::new()
        .levels(6)
        .seed(17)
        .parallel(false)
        .adapter(TwoMeans)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    let par = CellPartitioner::new()
        .levels(6)
        .seed(17)
        .parallel(true)
        .adapter(TwoMeans)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert_eq!(seq.cell_ids, par.cell_ids);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    let lat = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let lon = Array1::from_vec(vec![4.0, 3.0, 2.0, 1.0]);

    let res = CellPartitioner::new()
        .levels(1)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert_eq!(res.cell_ids, vec![0, 0, 1, 1]);
}

#[test]
fn test_f32_coordinates() {
    let lat: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
    let lon: Vec<f32> = vec![0.0, 0.0, 0.0, 0.0];

    let res = CellPartitioner::new()
        .levels(2)
        .adapter(TwoMeans)
        .seed(4)
        .convergence_threshold(1e-6f32)
        .build()
        .unwrap()
        .assign(&lat, &lon)
        .unwrap();
    assert!(res.cell_ids.iter().all(|&id| id < 4));
}

#[test]
fn test_low_level_split_and_centroid() {
    let mut points: Vec<Point<f64>> = (0..10)
        .map(|i| Point::new(i, i as f64, if i < 5 { 0.0 } else { 100.0 }))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let outcome = split(&mut points, &mut rng, 100, 1e-10);
    assert!(outcome.mid > 0 && outcome.mid < 10);

    let lower = compute_centroid(&points[..outcome.mid]).unwrap();
    let upper = compute_centroid(&points[outcome.mid..]).unwrap();
    // The longitude gap dominates, so clusters are the two longitude bands.
    assert_eq!(outcome.mid, 5);
    assert_abs_diff_eq!((lower.lon - upper.lon).abs(), 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(lower.lat + upper.lat, 2.0 + 7.0, epsilon = 1e-12);
}

#[test]
fn test_executor_direct() {
    let (lat, lon) = scattered(40);
    let mut store = PointStore::from_coordinates(&lat, &lon).unwrap();
    let run = PartitionExecutor::new(3, false)
        .run_median_split(store.points_mut())
        .unwrap();
    assert_eq!(run.levels, 3);
    assert_eq!(run.diagnostics.splits, 7);
    assert_eq!(run.diagnostics.iterations, 0);
}

#[test]
fn test_in_place_partition_returns_run() {
    let mut points: Vec<Point<f64>> = (0..8)
        .map(|i| Point::new(i, (i * 10) as f64, ((i * 3) % 8) as f64))
        .collect();

    let run = CellPartitioner::new()
        .levels(3)
        .adapter(MedianSplit)
        .build()
        .unwrap()
        .partition(&mut points)
        .unwrap();
    assert_eq!(run.strategy, Strategy::MedianSplit);
    assert_eq!(run.levels, 3);
    assert_eq!(run.seed, None);
    assert_eq!(run.diagnostics.splits, 7);

    let mut ids: Vec<CellId> = points.iter().map(|p| p.cell_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..8).collect::<Vec<CellId>>());
}

#[test]
fn test_parallel_store_restores_identity_order() {
    let lat: Vec<f32> = (0..64).map(|i| ((i * 37) % 64) as f32).collect();
    let lon: Vec<f32> = (0..64).map(|i| ((i * 11) % 64) as f32).collect();

    let model = CellPartitioner::new()
        .levels(4)
        .parallel(true)
        .adapter(MedianSplit)
        .build()
        .unwrap();
    let mut store = PointStore::from_coordinates(&lat, &lon).unwrap();
    let res = model.partition_store(&mut store).unwrap();

    let indices: Vec<usize> = store.points().iter().map(|p| p.index).collect();
    assert_eq!(indices, (0..64).collect::<Vec<usize>>());
    assert_eq!(res.cell_ids, store.cell_ids());
    assert_eq!(res.cell_ids, model.assign(&lat, &lon).unwrap().cell_ids);
}
