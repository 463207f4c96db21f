//! Prefix multi-index slicing.

use crate::array::NdArray;
use crate::error::ArrayError;
use crate::scalar::Scalar;
use crate::shape::Shape;
use crate::strides::cartesian_to_linear;

/// Fix the leading axes of `array` at `index`, returning a copy of the
/// remaining sub-array.
///
/// `slice(a, &[i])` equals `take(a, i, 0)`; `slice(a, &[])` copies `a`; a
/// full-length index yields a rank-0 array holding one element.
///
/// # Errors
///
/// Returns `ArrayError::IndexTooLong` if `index.len() > ndim` and
/// `ArrayError::IndexOutOfBounds` for the first position outside its axis.
///
/// # Examples
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::slice;
///
/// let a: NdArray<i32> = NdArray::arange(&[2, 3, 2]);
///
/// let s = slice(&a, &[1, 2]).unwrap();
/// assert_eq!(s.shape(), &[2]);
/// assert_eq!(s.data(), &[11, 12]);
///
/// assert!(slice(&a, &[0, 3]).is_err());
/// ```
pub fn slice<ElT: Scalar>(
    array: &NdArray<ElT>,
    index: &[usize],
) -> Result<NdArray<ElT>, ArrayError> {
    let ndim = array.ndim();
    if index.len() > ndim {
        return Err(ArrayError::IndexTooLong {
            len: index.len(),
            ndim,
        });
    }
    for (axis, (&i, &dim_size)) in index.iter().zip(array.shape().iter()).enumerate() {
        if i >= dim_size {
            return Err(ArrayError::IndexOutOfBounds {
                index: i,
                axis,
                dim_size,
            });
        }
    }

    let shape = Shape::from(&array.shape()[index.len()..]);
    let start = cartesian_to_linear(index, array.strides());
    let data = array.data()[start..start + shape.size()].to_vec();

    Ok(NdArray::from_parts(shape, data))
}
