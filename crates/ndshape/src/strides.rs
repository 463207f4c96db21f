//! Stride computation utilities.
//!
//! Uses row-major (C) order: the last axis is contiguous.

/// Compute row-major strides from shape.
///
/// For shape [d0, d1, d2], returns strides [d1*d2, d2, 1].
///
/// # Examples
///
/// ```
/// use ndshape::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
/// assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride: usize = 1;

    for (s, &dim) in strides.iter_mut().zip(shape.iter()).rev() {
        *s = stride;
        // Only empty arrays can overflow here, and they are never indexed.
        stride = stride.saturating_mul(dim);
    }

    strides
}

/// Convert cartesian indices to a linear offset.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Convert a linear offset to cartesian indices using row-major order.
///
/// # Arguments
///
/// * `linear` - Linear index
/// * `shape` - Shape of the array
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut indices = vec![0; shape.len()];

    for (idx, &dim) in indices.iter_mut().zip(shape.iter()).rev() {
        if dim == 0 {
            continue;
        }
        *idx = linear % dim;
        linear /= dim;
    }

    indices
}
