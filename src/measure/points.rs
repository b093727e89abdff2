use std::slice::ChunksExact;

use crate::{Error, Float, Result};

/// An ordered set of `len()` points with `dim()` coordinates each, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<T: Float> {
    data: Vec<T>,
    n_points: usize,
    dim: usize,
}

impl<T: Float> PointSet<T> {
    /// An empty point set of the given dimension.
    pub fn empty(dim: usize) -> Self {
        Self {
            data: Vec::new(),
            n_points: 0,
            dim,
        }
    }

    /// Builds a point set from one slice per point.
    ///
    /// Every row must have as many coordinates as the first one, and that count must be
    /// non-zero. An empty slice of rows gives an empty set of dimension 0.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let dim = match rows.first() {
            Some(first) => first.as_ref().len(),
            None => return Ok(Self::empty(0)),
        };

        if dim == 0 {
            return Err(Error::ZeroDimension);
        }

        let mut data = Vec::with_capacity(rows.len() * dim);
        for (row, point) in rows.iter().enumerate() {
            let point = point.as_ref();
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    row,
                    expected: dim,
                    found: point.len(),
                });
            }
            data.extend_from_slice(point);
        }

        Ok(Self {
            data,
            n_points: rows.len(),
            dim,
        })
    }

    /// Builds a point set from a row-major buffer of `n_points * dim` values.
    pub fn from_flat(data: &[T], n_points: usize, dim: usize) -> Result<Self> {
        check_shape(data.len(), n_points, dim)?;

        Ok(Self {
            data: data.to_owned(),
            n_points,
            dim,
        })
    }

    /// Builds a point set from a column-major buffer, the layout host matrices
    /// (R, Armadillo, Fortran) hand over: coordinate `k` of point `i` lives at
    /// `data[k * n_points + i]`.
    pub fn from_column_major(data: &[T], n_points: usize, dim: usize) -> Result<Self> {
        check_shape(data.len(), n_points, dim)?;

        let mut transposed = Vec::with_capacity(data.len());
        for i in 0..n_points {
            transposed.extend((0..dim).map(|k| data[k * n_points + i]));
        }

        Ok(Self {
            data: transposed,
            n_points,
            dim,
        })
    }

    pub fn len(&self) -> usize {
        self.n_points
    }

    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// Number of coordinates per point
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`. Panics if `i >= len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &[T] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> ChunksExact<'_, T> {
        // `chunks_exact(0)` panics; an empty set of dimension 0 has no data anyway.
        self.data.chunks_exact(self.dim.max(1))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Fails with the location of the first NaN or infinite coordinate.
    pub fn check_finite(&self) -> Result<()> {
        match self.data.iter().position(|x| !x.is_finite()) {
            Some(idx) => Err(Error::NonFiniteInput {
                row: idx / self.dim,
                column: idx % self.dim,
            }),
            None => Ok(()),
        }
    }
}

fn check_shape(len: usize, n_points: usize, dim: usize) -> Result<()> {
    if dim == 0 && n_points > 0 {
        return Err(Error::ZeroDimension);
    }

    // An overflowing shape can never match a real buffer length.
    let expected = n_points.checked_mul(dim).ok_or(Error::BufferLength {
        expected: usize::MAX,
        found: len,
    })?;

    if expected != len {
        return Err(Error::BufferLength {
            expected,
            found: len,
        });
    }

    Ok(())
}
