//! Joining arrays along a new axis.

use crate::array::NdArray;
use crate::error::ArrayError;
use crate::scalar::Scalar;

/// Stack equally shaped arrays along a new axis inserted at `axis`.
///
/// This is the inverse of [`take`](super::take): stacking every slice of an
/// axis back along that axis reproduces the original array.
///
/// # Errors
///
/// - `ArrayError::EmptyStack` if `parts` is empty.
/// - `ArrayError::StackShapeMismatch` if the parts differ in shape.
/// - `ArrayError::AxisOutOfBounds` if `axis > ndim` of the parts.
///
/// # Examples
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::{stack, take};
///
/// let a: NdArray<i32> = NdArray::arange(&[2, 3]);
/// let cols: Vec<_> = (0..3).map(|j| take(&a, j, 1).unwrap()).collect();
///
/// assert_eq!(stack(&cols, 1).unwrap(), a);
/// assert_eq!(stack(&cols, 0).unwrap(), a.transpose());
/// ```
pub fn stack<ElT: Scalar>(parts: &[NdArray<ElT>], axis: usize) -> Result<NdArray<ElT>, ArrayError> {
    let first = parts.first().ok_or(ArrayError::EmptyStack)?;
    let part_shape = first.shape();

    if let Some(bad) = parts.iter().find(|p| p.shape() != part_shape) {
        return Err(ArrayError::StackShapeMismatch {
            expected: part_shape.to_vec(),
            actual: bad.shape().to_vec(),
        });
    }
    if axis > part_shape.ndim() {
        return Err(ArrayError::AxisOutOfBounds {
            axis,
            ndim: part_shape.ndim() + 1,
        });
    }

    let out_shape = part_shape.insert_axis(axis, parts.len());
    let outer: usize = part_shape[..axis].iter().product();
    let inner: usize = part_shape[axis..].iter().product();

    let mut out = Vec::with_capacity(out_shape.size());
    for o in 0..outer {
        for part in parts {
            out.extend_from_slice(&part.data()[o * inner..(o + 1) * inner]);
        }
    }

    Ok(NdArray::from_parts(out_shape, out))
}
