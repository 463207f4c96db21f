//! Batched matrix multiplication.
//!
//! The trailing two axes of each operand are a matrix; any leading axes
//! form a batch that is broadcast with
//! [`broadcast_batch_shapes`](crate::broadcast_batch_shapes).

use crate::array::NdArray;
use crate::backend::{GenericBackend, MatMulBackend};
use crate::broadcast::{broadcast_batch_shapes, source_batch_offset};
use crate::error::ArrayError;
use crate::scalar::Scalar;
use crate::strides::linear_to_cartesian;

/// Multiply stacks of matrices, broadcasting the batch axes.
///
/// For `a` of shape `batch_a + (M, K)` and `b` of shape `batch_b + (K, N)`
/// the result has shape `broadcast(batch_a, batch_b) + (M, N)`. A batch
/// axis of size 1 is repeated against the other operand.
///
/// # Errors
///
/// - `ArrayError::RankTooSmall` if either operand has fewer than 2 axes.
/// - `ArrayError::InnerDimMismatch` if `K` differs between the operands.
/// - `ArrayError::Broadcast` if the batch shapes are incompatible.
///
/// # Examples
///
/// ```
/// use ndshape::{NdArray, matmul};
///
/// let a = NdArray::<i32>::from_nested([[1, 2], [3, 4]]).unwrap();
/// let b = NdArray::<i32>::from_nested([[[1, 0], [0, 1]], [[0, 1], [1, 0]]]).unwrap();
///
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.shape(), &[2, 2, 2]);
/// assert_eq!(c.to_string(), "[[[1, 2], [3, 4]], [[2, 1], [4, 3]]]");
/// ```
pub fn matmul<ElT: Scalar>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError> {
    matmul_with::<GenericBackend, ElT>(a, b)
}

/// [`matmul`] with an explicit matrix product backend.
pub fn matmul_with<B, ElT>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError>
where
    B: MatMulBackend<ElT>,
    ElT: Scalar,
{
    check_rank("lhs", a.ndim())?;
    check_rank("rhs", b.ndim())?;

    let (a_batch, a_mat) = a.shape().split_at(a.ndim() - 2);
    let (b_batch, b_mat) = b.shape().split_at(b.ndim() - 2);
    let (m, k) = (a_mat[0], a_mat[1]);
    let (k_rhs, n) = (b_mat[0], b_mat[1]);

    if k != k_rhs {
        return Err(ArrayError::InnerDimMismatch {
            lhs: a.shape().to_vec(),
            rhs: b.shape().to_vec(),
            k_lhs: k,
            k_rhs,
        });
    }

    let batch = broadcast_batch_shapes(a_batch, b_batch)?;
    log::debug!(
        "matmul {:?} x {:?}: batch {:?}, ({m}, {k}) x ({k}, {n})",
        a.shape(),
        b.shape(),
        batch
    );

    let out_shape = batch.concat(&[m, n]);
    let mut out = vec![ElT::zero(); out_shape.size()];

    let (a_block, b_block, c_block) = (m * k, k * n, m * n);
    if c_block > 0 {
        for (linear, dst) in out.chunks_exact_mut(c_block).enumerate() {
            let index = linear_to_cartesian(linear, &batch);
            let ia = source_batch_offset(&index, a_batch);
            let ib = source_batch_offset(&index, b_batch);

            B::gemm_into(
                dst,
                &a.data()[ia * a_block..(ia + 1) * a_block],
                &b.data()[ib * b_block..(ib + 1) * b_block],
                m,
                k,
                n,
            );
        }
    }

    Ok(NdArray::from_parts(out_shape, out))
}

fn check_rank(operand: &'static str, actual: usize) -> Result<(), ArrayError> {
    if actual < 2 {
        return Err(ArrayError::RankTooSmall {
            operand,
            required: 2,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_matmul_2d() {
        let a = NdArray::<i64>::from_nested([[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = NdArray::<i64>::from_nested([[7, 8], [9, 10], [11, 12]]).unwrap();
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c, NdArray::from_nested([[58, 64], [139, 154]]).unwrap());
    }

    #[test]
    fn test_matmul_batched_equal() {
        let a: NdArray<i32> = NdArray::arange(&[3, 2, 2]);
        let eye = NdArray::from_fn(&[3, 2, 2], |ix| i32::from(ix[1] == ix[2]));
        assert_eq!(matmul(&a, &eye).unwrap(), a);
        assert_eq!(matmul(&eye, &a).unwrap(), a);
    }

    #[test]
    fn test_matmul_broadcast_size_one() {
        let a: NdArray<i64> = NdArray::arange(&[2, 1, 2, 3]);
        let b: NdArray<i64> = NdArray::arange(&[1, 4, 3, 2]);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), &[2, 4, 2, 2]);

        // Every output block matches the 2-D product of its source blocks.
        for i in 0..2 {
            for j in 0..4 {
                let lhs = a.take(i, 0).unwrap().take(0, 0).unwrap();
                let rhs = b.take(0, 0).unwrap().take(j, 0).unwrap();
                let block = c.take(i, 0).unwrap().take(j, 0).unwrap();
                assert_eq!(block, matmul(&lhs, &rhs).unwrap());
            }
        }
    }

    #[test]
    fn test_matmul_missing_batch_axes() {
        let a: NdArray<i32> = NdArray::arange(&[2, 3]);
        let b: NdArray<i32> = NdArray::ones(&[5, 3, 1]);
        let c = matmul(&a, &b).unwrap();
        assert_eq!(c.shape(), &[5, 2, 1]);
        for batch in 0..5 {
            assert_eq!(c.take(batch, 0).unwrap().data(), &[6, 15]);
        }
    }

    #[test]
    fn test_matmul_zero_sized() {
        let a: NdArray<f64> = NdArray::zeros(&[0, 2, 3]);
        let b: NdArray<f64> = NdArray::ones(&[3, 4]);
        assert_eq!(matmul(&a, &b).unwrap().shape(), &[0, 2, 4]);

        let a: NdArray<f64> = NdArray::ones(&[2, 0]);
        let b: NdArray<f64> = NdArray::ones(&[0, 2]);
        assert_eq!(matmul(&a, &b).unwrap(), NdArray::zeros(&[2, 2]));
    }

    #[test]
    fn test_matmul_rank_too_small() {
        let v: NdArray<f64> = NdArray::ones(&[3]);
        let m: NdArray<f64> = NdArray::ones(&[3, 3]);

        let err = matmul(&v, &m).unwrap_err();
        assert_eq!(
            err,
            ArrayError::RankTooSmall {
                operand: "lhs",
                required: 2,
                actual: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert!(matches!(
            matmul(&m, &v),
            Err(ArrayError::RankTooSmall { operand: "rhs", .. })
        ));
    }

    #[test]
    fn test_matmul_inner_mismatch() {
        let a: NdArray<i32> = NdArray::zeros(&[2, 3]);
        let b: NdArray<i32> = NdArray::zeros(&[4, 2]);
        let err = matmul(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert!(matches!(
            err,
            ArrayError::InnerDimMismatch {
                k_lhs: 3,
                k_rhs: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_matmul_batch_not_broadcastable() {
        let a: NdArray<i32> = NdArray::zeros(&[2, 2, 2]);
        let b: NdArray<i32> = NdArray::zeros(&[3, 2, 2]);
        let err = matmul(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Broadcast);
    }
}
