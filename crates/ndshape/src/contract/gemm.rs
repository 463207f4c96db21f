//! faer-backed matmul and tensordot.
//!
//! Same semantics and errors as [`matmul`](super::matmul) and
//! [`tensordot`](super::tensordot), restricted to element types faer can
//! multiply.

use faer_traits::ComplexField;

use crate::array::NdArray;
use crate::backend::FaerBackend;
use crate::contract::matmul::matmul_with;
use crate::contract::tensordot::tensordot_with;
use crate::error::ArrayError;
use crate::scalar::Scalar;

/// Batched matrix multiplication using faer GEMM.
///
/// # Example
///
/// ```
/// use ndshape::{NdArray, matmul_gemm};
///
/// let a = NdArray::<f64>::ones(&[2, 2, 3]);
/// let b = NdArray::<f64>::ones(&[3, 4]);
///
/// let c = matmul_gemm(&a, &b).unwrap();
/// assert_eq!(c.shape(), &[2, 2, 4]);
/// assert_eq!(c.get(&[1, 1, 3]), Some(&3.0));
/// ```
pub fn matmul_gemm<ElT: Scalar + ComplexField>(
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
) -> Result<NdArray<ElT>, ArrayError> {
    matmul_with::<FaerBackend, ElT>(a, b)
}

/// Tensordot using faer GEMM.
///
/// # Example
///
/// ```
/// use ndshape::{NdArray, tensordot_gemm};
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let b = NdArray::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
///
/// let c = tensordot_gemm(&a, &b, 1).unwrap();
/// assert_eq!(c.data(), &[32.0]);
/// ```
pub fn tensordot_gemm<ElT: Scalar + ComplexField>(
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    axes: isize,
) -> Result<NdArray<ElT>, ArrayError> {
    tensordot_with::<FaerBackend, ElT>(a, b, axes)
}
