//! Axis permutation.
//!
//! ```text
//! permutedims(array, perm)
//!     → validate permutation
//!     → allocate output with permuted shape
//!     → permutedims_into(output, array, perm)
//!
//! permutedims_into(dest, src, perm)
//!     → dispatch to backend (GenericBackend)
//! ```

use crate::array::NdArray;
use crate::backend::{GenericBackend, PermutationBackend};
use crate::error::ArrayError;
use crate::scalar::Scalar;
use crate::shape::Shape;

/// Permute the axes of an array, returning a new array.
///
/// # Arguments
///
/// * `array` - Input array
/// * `perm` - Permutation of axes. `perm[i]` gives the source axis for the
///   i-th axis of the result.
///
/// # Errors
///
/// Returns `ArrayError::InvalidPermutation` if `perm` is not a permutation
/// of `0..ndim`.
///
/// # Examples
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::permutedims;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
///
/// let t = permutedims(&a, &[1, 0]).unwrap();
/// assert_eq!(t.shape(), &[3, 2]);
/// assert_eq!(a.get(&[1, 0]), t.get(&[0, 1]));
/// ```
pub fn permutedims<ElT: Scalar>(
    array: &NdArray<ElT>,
    perm: &[usize],
) -> Result<NdArray<ElT>, ArrayError> {
    validate_permutation(perm, array.ndim())?;

    let new_shape: Shape = perm.iter().map(|&p| array.shape()[p]).collect();
    let mut result = NdArray::zeros(&new_shape);

    permutedims_into(&mut result, array, perm);

    Ok(result)
}

/// Permute axes of `src` into an existing output array.
///
/// # Panics
///
/// May panic if `dest` does not have the permuted shape of `src`.
pub fn permutedims_into<ElT: Scalar>(dest: &mut NdArray<ElT>, src: &NdArray<ElT>, perm: &[usize]) {
    GenericBackend::permute_into(dest, src, perm);
}

/// Validate that perm is a valid permutation of 0..ndim.
fn validate_permutation(perm: &[usize], ndim: usize) -> Result<(), ArrayError> {
    let invalid = || ArrayError::InvalidPermutation {
        perm: perm.to_vec(),
        ndim,
    };

    if perm.len() != ndim {
        return Err(invalid());
    }

    let mut seen = vec![false; ndim];
    for &p in perm {
        if p >= ndim || seen[p] {
            return Err(invalid());
        }
        seen[p] = true;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scalar::c64;

    #[test]
    fn test_permutedims_transpose_c64() {
        let data: Vec<c64> = (1..=6).map(|x| c64::new(x as f64, -(x as f64))).collect();
        let a = NdArray::from_vec(data, &[2, 3]).unwrap();

        let t = permutedims(&a, &[1, 0]).unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(a.get(&[i, j]), t.get(&[j, i]));
            }
        }
    }

    #[test]
    fn test_permutedims_identity() {
        let a: NdArray<i32> = NdArray::arange(&[2, 3]);
        let t = permutedims(&a, &[0, 1]).unwrap();
        assert_eq!(t, a);
    }

    #[test]
    fn test_permutedims_cycle_3d() {
        let a: NdArray<u64> = NdArray::arange(&[2, 3, 4]);
        let t = permutedims(&a, &[1, 2, 0]).unwrap();
        assert_eq!(t.shape(), &[3, 4, 2]);
        let back = permutedims(&t, &[2, 0, 1]).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_permutedims_invalid() {
        let a: NdArray<f64> = NdArray::zeros(&[2, 3]);

        // Wrong number of dimensions
        assert!(permutedims(&a, &[0]).is_err());
        assert!(permutedims(&a, &[0, 1, 2]).is_err());

        // Invalid index
        assert!(permutedims(&a, &[0, 2]).is_err());

        // Duplicate index
        let err = permutedims(&a, &[0, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
