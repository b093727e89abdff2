use std::time::Instant;

use rayon::prelude::*;

use super::*;
use crate::utils::euclidean;

/// Multi-threaded computer backed by the global rayon pool.
///
/// Output rows are partitioned across tasks by their index `i`. A task fills only the
/// upper-triangle cells `(i, j > i)` of the rows it owns, so no cell has two writers.
/// Once every task has joined, the lower triangle is mirrored from the upper one.
///
/// Each distance is produced by the same kernel as [`Sequential`], so both computers
/// return bitwise-identical matrices.
pub struct Parallel;

impl<T: Float> DistanceMatrixComputer<T> for Parallel {
    fn compute_with(points: &PointSet<T>, options: &Options) -> Result<DistanceMatrix<T>> {
        compute(points, options)
    }
}

fn compute<T: Float>(points: &PointSet<T>, options: &Options) -> Result<DistanceMatrix<T>> {
    prepare(points, options)?;

    let num_elements = points.len();
    log::debug!(
        "parallel distance matrix: n={}, dim={}, threads={}",
        num_elements,
        points.dim(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let mut distances = DistanceMatrix::zeros(num_elements)?;
    if num_elements > 1 {
        fill(distances.data_mut(), points, options);
    }

    log::debug!("finished parallel distance matrix: n={} in {:?}", num_elements, start.elapsed());
    Ok(distances)
}

fn fill<T: Float>(data: &mut [T], points: &PointSet<T>, options: &Options) {
    let num_elements = points.len();

    begin_event("fill_upper");
    data.par_chunks_mut(num_elements)
        .with_min_len(options.min_rows_per_task.max(1))
        .enumerate()
        .for_each(|(i, row)| {
            let p0 = points.point(i);
            for j in i + 1..num_elements {
                row[j] = euclidean(p0, points.point(j));
            }
        });
    end_event();

    begin_event("mirror");
    mirror_upper(data, num_elements);
    end_event();
}

/// Copies every `(i, j > i)` cell into `(j, i)`.
fn mirror_upper<T: Float>(data: &mut [T], n: usize) {
    for i in 0..n {
        for j in i + 1..n {
            data[j * n + i] = data[i * n + j];
        }
    }
}
