use std::ops::Index;
use std::slice::ChunksExact;

use super::{points::PointSet, Measurable};
use crate::algorithms::{DistanceMatrixComputer, Sequential};
use crate::utils::try_zeroed_square;
use crate::{Error, Float, Result};

/// Dense, row-major `N x N` matrix of pairwise distances.
///
/// Instances handed out by the computers in [`crate::algorithms`] are symmetric with a
/// zero diagonal. There is no mutating API once a matrix has been built.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix<T: Float> {
    data: Vec<T>,
    n_elements: usize,
}

impl<T: Float> DistanceMatrix<T> {
    /// Euclidean distance matrix of `points`, computed with [`Sequential`].
    pub fn from_points(points: &PointSet<T>) -> Result<Self> {
        Sequential::compute(points)
    }

    /// Wraps a row-major buffer of `n_elements * n_elements` distances.
    ///
    /// The buffer must describe a distance matrix: zero diagonal, no negative entries and
    /// `(i, j) == (j, i)`. NaN is accepted off the diagonal when both mirrored cells hold it.
    pub fn from_flat(data: &[T], n_elements: usize) -> Result<Self> {
        // An overflowing shape can never match a real buffer length.
        let expected = n_elements.checked_mul(n_elements).ok_or(Error::BufferLength {
            expected: usize::MAX,
            found: data.len(),
        })?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                found: data.len(),
            });
        }

        check_distances(data, n_elements)?;

        let data = data.to_owned();
        Ok(Self { data, n_elements })
    }

    /// An all-zero matrix, the starting point of every computer.
    pub(crate) fn zeros(n_elements: usize) -> Result<Self> {
        let data = try_zeroed_square(n_elements)?;
        Ok(Self { data, n_elements })
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.n_elements
    }

    pub fn is_empty(&self) -> bool {
        self.n_elements == 0
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.n_elements && j < self.n_elements {
            Some(self.data[i * self.n_elements + j])
        } else {
            None
        }
    }

    /// Distances from element `i` to every element. Panics if `i >= len()`.
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.n_elements;
        &self.data[start..start + self.n_elements]
    }

    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.data.chunks_exact(self.n_elements.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Exact (bitwise-equal) symmetry check.
    pub fn is_symmetric(&self) -> bool {
        let n = self.n_elements;
        (0..n).all(|i| (i + 1..n).all(|j| self.data[i * n + j] == self.data[j * n + i]))
    }
}

/// Reports the first cell, in row-major order, that breaks the distance matrix invariants.
fn check_distances<T: Float>(data: &[T], n: usize) -> Result<()> {
    for i in 0..n {
        for j in 0..n {
            let x = data[i * n + j];
            let y = data[j * n + i];

            let valid = if i == j {
                x == T::zero()
            } else {
                (x >= T::zero() && x == y) || (x.is_nan() && y.is_nan())
            };

            if !valid {
                return Err(Error::NotADistanceMatrix { row: i, column: j });
            }
        }
    }
    Ok(())
}

impl<T: Float> Index<(usize, usize)> for DistanceMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        let n = self.n_elements;
        assert!(i < n && j < n, "index ({}, {}) out of bounds for {}x{} matrix", i, j, n, n);
        &self.data[i * n + j]
    }
}

impl<T: Float> Measurable<T> for DistanceMatrix<T> {
    #[inline]
    fn measure(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    fn num_elements(&self) -> usize {
        self.n_elements
    }
}
