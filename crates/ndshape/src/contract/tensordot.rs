//! Tensordot over a number of axes.

use crate::array::NdArray;
use crate::backend::{GenericBackend, MatMulBackend};
use crate::contract::properties::ContractionProperties;
use crate::error::ArrayError;
use crate::operations::outer;
use crate::scalar::Scalar;

/// Contract the last `axes` axes of `a` with the first `axes` axes of `b`.
///
/// `axes = 0` is the outer product, with shape `a.shape + b.shape`. For
/// `axes >= 1` the result has shape `a.shape[..-axes] + b.shape[axes..]`,
/// each element the sum over the contracted indices.
///
/// # Errors
///
/// - `ArrayError::InvalidAxisCount` if `axes < 0` or exceeds either rank.
/// - `ArrayError::ContractDimMismatch` if the contracted dimensions differ.
///
/// # Examples
///
/// ```
/// use ndshape::{NdArray, tensordot};
///
/// let a = NdArray::<i32>::from_nested(vec![1, 2, 3]).unwrap();
/// let b = NdArray::<i32>::from_nested(vec![4, 5, 6]).unwrap();
///
/// let dot = tensordot(&a, &b, 1).unwrap();
/// assert_eq!(dot.ndim(), 0);
/// assert_eq!(dot.data(), &[32]);
///
/// let outer = tensordot(&a, &b, 0).unwrap();
/// assert_eq!(outer.shape(), &[3, 3]);
/// ```
pub fn tensordot<ElT: Scalar>(
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    axes: isize,
) -> Result<NdArray<ElT>, ArrayError> {
    tensordot_with::<GenericBackend, ElT>(a, b, axes)
}

/// [`tensordot`] with an explicit matrix product backend.
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::backend::FaerBackend;
/// use ndshape::contract::tensordot_with;
///
/// let a = NdArray::<f64>::ones(&[2, 3, 4]);
/// let b = NdArray::<f64>::ones(&[3, 4, 5]);
///
/// let c = tensordot_with::<FaerBackend, _>(&a, &b, 2).unwrap();
/// assert_eq!(c.shape(), &[2, 5]);
/// assert_eq!(c.get(&[1, 4]), Some(&12.0));
/// ```
pub fn tensordot_with<B, ElT>(
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    axes: isize,
) -> Result<NdArray<ElT>, ArrayError>
where
    B: MatMulBackend<ElT>,
    ElT: Scalar,
{
    let props = ContractionProperties::compute(a.shape(), b.shape(), axes)?;
    log::debug!(
        "tensordot {:?} x {:?} over {} axes: ({}, {}) x ({}, {}) -> {:?}",
        a.shape(),
        b.shape(),
        props.axes,
        props.dleft,
        props.dmid,
        props.dmid,
        props.dright,
        props.output_shape
    );

    if props.is_outer_product() {
        return Ok(outer(a, b));
    }

    let mut out = vec![ElT::zero(); props.dleft * props.dright];
    B::gemm_into(
        &mut out,
        a.data(),
        b.data(),
        props.dleft,
        props.dmid,
        props.dright,
    );

    Ok(NdArray::from_parts(props.output_shape, out))
}
