use crate::{Error, Float, Result};

/// Sum of squared coordinate differences between two points of equal dimension
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    squared_euclidean(a, b).sqrt()
}

/// Allocates a zero-filled `n_elements * n_elements` buffer, reporting overflow or
/// allocator refusal instead of aborting.
pub(crate) fn try_zeroed_square<T: Float>(n_elements: usize) -> Result<Vec<T>> {
    let len = n_elements
        .checked_mul(n_elements)
        .ok_or(Error::AllocationFailure { n_elements })?;

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { n_elements })?;
    data.resize(len, T::zero());

    Ok(data)
}
