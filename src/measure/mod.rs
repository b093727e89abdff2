use crate::Float;

pub mod matrix;
pub mod points;

pub trait Measurable<T: Float> {
    /// Measure the dissimilarity between two elements in the collection
    ///
    /// Euclidean distances are symmetric, so `measure(i, j) == measure(j, i)` for every
    /// implementor in this crate.
    fn measure(&self, i: usize, j: usize) -> T;

    /// Return the number of elements in the collection
    fn num_elements(&self) -> usize;
}
