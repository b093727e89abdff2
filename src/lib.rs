//! Pairwise Euclidean distance matrices for dense point sets.
//!
//! ```
//! use distmat::{distance_matrix, PointSet};
//!
//! let points = PointSet::<f64>::from_rows(&[[0.0, 0.0], [3.0, 4.0]]).unwrap();
//! let d = distance_matrix(&points).unwrap();
//!
//! assert_eq!(d[(0, 1)], 5.0);
//! assert_eq!(d[(1, 0)], 5.0);
//! ```

use std::fmt::Debug;

pub trait Float: num_traits::Float + Debug + Send + Sync {}

impl Float for f64 {}
impl Float for f32 {}

pub mod algorithms;
pub mod error;
pub mod measure;
pub mod utils;

pub use algorithms::{DistanceMatrixComputer, Options, Sequential, Validation};
#[cfg(feature = "parallel")]
pub use algorithms::Parallel;
pub use error::{Error, Result};
pub use measure::{matrix::DistanceMatrix, points::PointSet, Measurable};

/// Computes the distance matrix of `points` with the sequential reference computer.
pub fn distance_matrix<T: Float>(points: &PointSet<T>) -> Result<DistanceMatrix<T>> {
    Sequential::compute(points)
}
