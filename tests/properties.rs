use distmat::{DistanceMatrixComputer, Measurable, PointSet, Sequential};
use proptest::prelude::*;

/// Between 0 and 24 points of a shared dimension in 1..6, coordinates in [-1e3, 1e3].
fn point_sets() -> impl Strategy<Value = PointSet<f64>> {
    (1usize..6, 0usize..24).prop_flat_map(|(dim, n)| {
        prop::collection::vec(-1.0e3f64..1.0e3, n * dim)
            .prop_map(move |data| PointSet::from_flat(&data, n, dim).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_shape_is_n_by_n(points in point_sets()) {
        let d = Sequential::compute(&points).unwrap();

        prop_assert_eq!(d.len(), points.len());
        prop_assert_eq!(d.as_slice().len(), points.len() * points.len());
    }

    #[test]
    fn prop_symmetric_with_zero_diagonal(points in point_sets()) {
        let d = Sequential::compute(&points).unwrap();
        let n = d.num_elements();

        prop_assert!(d.is_symmetric());
        for i in 0..n {
            prop_assert_eq!(d.measure(i, i), 0.0);
            for j in 0..n {
                prop_assert!(d.measure(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn prop_triangle_inequality(points in point_sets()) {
        let d = Sequential::compute(&points).unwrap();
        let n = d.num_elements();

        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let direct = d.measure(i, k);
                    let detour = d.measure(i, j) + d.measure(j, k);
                    prop_assert!(direct <= detour + 1e-9 * (1.0 + detour));
                }
            }
        }
    }

    #[test]
    fn prop_idempotent(points in point_sets()) {
        let first = Sequential::compute(&points).unwrap();
        let second = Sequential::compute(&points).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_translation_invariant(points in point_sets(), shift in -50.0f64..50.0) {
        let shifted: Vec<f64> = points.as_slice().iter().map(|x| x + shift).collect();
        let shifted = PointSet::from_flat(&shifted, points.len(), points.dim()).unwrap();

        let d = Sequential::compute(&points).unwrap();
        let e = Sequential::compute(&shifted).unwrap();

        for (a, b) in d.as_slice().iter().zip(e.as_slice()) {
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        }
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use distmat::{DistanceMatrixComputer, Options, Parallel, Sequential};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_parallel_matches_sequential(points in super::point_sets(), granularity in 1usize..8) {
            let options = Options::new().min_rows_per_task(granularity);

            let seq = Sequential::compute(&points).unwrap();
            let par = Parallel::compute_with(&points, &options).unwrap();

            prop_assert_eq!(seq, par);
        }
    }
}
