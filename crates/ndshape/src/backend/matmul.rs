//! Matrix product backend trait.

use crate::scalar::Scalar;

/// Backend trait for a single row-major matrix product.
///
/// Both batched matmul and tensordot reduce to calls of `gemm_into` on
/// contiguous row-major blocks.
pub trait MatMulBackend<ElT: Scalar> {
    /// Compute `dst = lhs * rhs`.
    ///
    /// # Arguments
    ///
    /// * `dst` - Output block, `m * n` elements, overwritten
    /// * `lhs` - Left block, `m * k` elements
    /// * `rhs` - Right block, `k * n` elements
    ///
    /// # Panics
    ///
    /// Panics if a slice length disagrees with `m`, `k`, `n`.
    fn gemm_into(dst: &mut [ElT], lhs: &[ElT], rhs: &[ElT], m: usize, k: usize, n: usize);
}
