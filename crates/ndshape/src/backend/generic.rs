//! Generic (naive loop-based) backend implementation.

use crate::array::NdArray;
use crate::backend::{MatMulBackend, PermutationBackend};
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, linear_to_cartesian};

/// Generic backend using naive loop-based implementations.
///
/// This backend works for every [`Scalar`], integers included, and is
/// what [`matmul`](crate::matmul) and [`tensordot`](crate::tensordot) use.
pub struct GenericBackend;

impl PermutationBackend for GenericBackend {
    fn permute_into<ElT: Scalar>(dest: &mut NdArray<ElT>, src: &NdArray<ElT>, perm: &[usize]) {
        let old_shape = src.shape().to_vec();
        // Copy strides to avoid borrow conflict with data_mut()
        let new_strides: Vec<usize> = dest.strides().to_vec();

        for (linear_old, &value) in src.data().iter().enumerate() {
            let old_indices = linear_to_cartesian(linear_old, &old_shape);

            // new_indices[i] = old_indices[perm[i]]
            let new_indices: Vec<usize> = perm.iter().map(|&p| old_indices[p]).collect();

            let linear_new = cartesian_to_linear(&new_indices, &new_strides);
            dest.data_mut()[linear_new] = value;
        }
    }
}

impl<ElT: Scalar> MatMulBackend<ElT> for GenericBackend {
    fn gemm_into(dst: &mut [ElT], lhs: &[ElT], rhs: &[ElT], m: usize, k: usize, n: usize) {
        assert_eq!(lhs.len(), m * k, "lhs block must be {m}x{k}");
        assert_eq!(rhs.len(), k * n, "rhs block must be {k}x{n}");
        assert_eq!(dst.len(), m * n, "output block must be {m}x{n}");
        log::trace!("generic gemm {m}x{k} * {k}x{n}");

        for i in 0..m {
            let row = &lhs[i * k..(i + 1) * k];
            for j in 0..n {
                dst[i * n + j] = row
                    .iter()
                    .enumerate()
                    .fold(ElT::zero(), |acc, (p, &a)| acc + a * rhs[p * n + j]);
            }
        }
    }
}
