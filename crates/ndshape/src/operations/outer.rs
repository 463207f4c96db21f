//! Outer product of two arrays.

use crate::array::NdArray;
use crate::error::ArrayError;
use crate::scalar::Scalar;

/// Compute the outer product of two arrays.
///
/// For A with shape [a0, a1, ...] and B with shape [b0, b1, ...],
/// returns C with shape [a0, a1, ..., b0, b1, ...] where
/// C[i0, i1, ..., j0, j1, ...] = A[i0, i1, ...] * B[j0, j1, ...]
///
/// # Example
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::outer;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// let b = NdArray::from_vec(vec![3.0, 4.0, 5.0], &[3]).unwrap();
/// let c = outer(&a, &b);
///
/// assert_eq!(c.shape(), &[2, 3]);
/// assert_eq!(c.to_string(), "[[3, 4, 5], [6, 8, 10]]");
/// ```
pub fn outer<ElT: Scalar>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> NdArray<ElT> {
    let output_shape = a.shape().concat(b.shape());
    let mut data = vec![ElT::zero(); a.len() * b.len()];
    fill_outer(&mut data, a.data(), b.data());
    NdArray::from_parts(output_shape, data)
}

/// In-place outer product into a pre-allocated result array.
///
/// # Errors
///
/// Returns `ArrayError::ShapeMismatch` if `result` does not hold
/// `a.len() * b.len()` elements.
pub fn outer_into<ElT: Scalar>(
    result: &mut NdArray<ElT>,
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
) -> Result<(), ArrayError> {
    let b_len = b.len();
    let expected_len = a.len() * b_len;

    if result.len() != expected_len {
        return Err(ArrayError::ShapeMismatch {
            expected: expected_len,
            actual: result.len(),
        });
    }

    fill_outer(result.data_mut(), a.data(), b.data());
    Ok(())
}

/// Row-major: `dst[i * b.len() + j] = a[i] * b[j]`.
fn fill_outer<ElT: Scalar>(dst: &mut [ElT], a: &[ElT], b: &[ElT]) {
    if b.is_empty() {
        return;
    }
    for (row, &a_i) in dst.chunks_exact_mut(b.len()).zip(a) {
        for (d, &b_j) in row.iter_mut().zip(b) {
            *d = a_i * b_j;
        }
    }
}
