use std::time::Instant;

use super::*;
use crate::utils::euclidean;

/// Single-threaded reference computer.
///
/// Walks the strict upper triangle once and writes every distance into both of its cells.
pub struct Sequential;

impl<T: Float> DistanceMatrixComputer<T> for Sequential {
    fn compute_with(points: &PointSet<T>, options: &Options) -> Result<DistanceMatrix<T>> {
        compute(points, options)
    }
}

fn compute<T: Float>(points: &PointSet<T>, options: &Options) -> Result<DistanceMatrix<T>> {
    prepare(points, options)?;

    let num_elements = points.len();
    log::debug!("sequential distance matrix: n={}, dim={}", num_elements, points.dim());
    let start = Instant::now();

    let mut distances = DistanceMatrix::zeros(num_elements)?;
    let data = distances.data_mut();

    begin_event("fill");
    for i in 0..num_elements {
        let p0 = points.point(i);

        for j in i + 1..num_elements {
            let d = euclidean(p0, points.point(j));
            data[i * num_elements + j] = d;
            data[j * num_elements + i] = d;
        }
    }
    end_event();

    debug_assert!(distances.is_symmetric() || points.as_slice().iter().any(|x| !x.is_finite()));
    log::debug!("finished sequential distance matrix: n={} in {:?}", num_elements, start.elapsed());
    Ok(distances)
}
