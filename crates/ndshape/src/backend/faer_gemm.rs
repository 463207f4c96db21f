//! GEMM backend using faer.
//!
//! faer matrices are column-major while ndshape is row-major. A row-major
//! `r x c` block is the same memory as a column-major `c x r` block holding
//! its transpose, so `lhs * rhs` is computed as
//! `dst^T = rhs^T * lhs^T` without copying any operand.

use faer::linalg::matmul::matmul;
use faer::{Accum, MatMut, MatRef, Par};
use faer_traits::ComplexField;

use crate::backend::MatMulBackend;
use crate::scalar::Scalar;

/// Backend dispatching matrix products to faer.
///
/// Only available for element types faer supports (`f32`, `f64`, `c64`).
pub struct FaerBackend;

impl<ElT: Scalar + ComplexField> MatMulBackend<ElT> for FaerBackend {
    fn gemm_into(dst: &mut [ElT], lhs: &[ElT], rhs: &[ElT], m: usize, k: usize, n: usize) {
        assert_eq!(lhs.len(), m * k, "lhs block must be {m}x{k}");
        assert_eq!(rhs.len(), k * n, "rhs block must be {k}x{n}");
        assert_eq!(dst.len(), m * n, "output block must be {m}x{n}");
        log::trace!("faer gemm {m}x{k} * {k}x{n}");

        if m == 0 || n == 0 {
            return;
        }
        if k == 0 {
            dst.fill(<ElT as Scalar>::zero());
            return;
        }

        let lhs_t = MatRef::from_column_major_slice(lhs, k, m);
        let rhs_t = MatRef::from_column_major_slice(rhs, n, k);
        let mut dst_t = MatMut::from_column_major_slice_mut(dst, n, m);

        matmul(
            dst_t.as_mut(),
            Accum::Replace,
            rhs_t,
            lhs_t,
            <ElT as Scalar>::one(),
            Par::Seq,
        );
    }
}
