//! Permutation backend trait.

use crate::array::NdArray;
use crate::scalar::Scalar;

/// Backend trait for axis permutation.
pub trait PermutationBackend {
    /// Permute `src` into `dest`.
    ///
    /// # Arguments
    ///
    /// * `dest` - Output array (must have permuted shape)
    /// * `src` - Input array
    /// * `perm` - Permutation of dimensions. `perm[i]` gives the source dimension
    ///   for the i-th dimension of the result.
    ///
    /// # Panics
    ///
    /// Panics if shapes don't match the permutation.
    fn permute_into<ElT: Scalar>(dest: &mut NdArray<ElT>, src: &NdArray<ElT>, perm: &[usize]);
}
