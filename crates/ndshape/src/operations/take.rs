//! Axis slicing.

use crate::array::NdArray;
use crate::error::ArrayError;
use crate::scalar::Scalar;

/// Fix `axis` of `array` at `index`, returning a copy with one fewer
/// dimension.
///
/// # Arguments
///
/// * `array` - Input array
/// * `index` - Position along `axis` to keep
/// * `axis` - Axis to remove
///
/// # Errors
///
/// Returns `ArrayError::AxisOutOfBounds` if `axis >= ndim` and
/// `ArrayError::IndexOutOfBounds` if `index >= shape[axis]`.
///
/// # Examples
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::take;
///
/// let a = NdArray::<i32>::from_nested([[1, 2, 3], [4, 5, 6]]).unwrap();
///
/// let row = take(&a, 1, 0).unwrap();
/// assert_eq!(row.data(), &[4, 5, 6]);
///
/// let col = take(&a, 2, 1).unwrap();
/// assert_eq!(col.data(), &[3, 6]);
/// ```
pub fn take<ElT: Scalar>(
    array: &NdArray<ElT>,
    index: usize,
    axis: usize,
) -> Result<NdArray<ElT>, ArrayError> {
    let ndim = array.ndim();
    if axis >= ndim {
        return Err(ArrayError::AxisOutOfBounds { axis, ndim });
    }
    let dim_size = array.shape()[axis];
    if index >= dim_size {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            axis,
            dim_size,
        });
    }

    // Row-major: the slab below `axis` is contiguous and strides[axis] long.
    let inner = array.strides()[axis];
    let outer: usize = array.shape()[..axis].iter().product();
    let data = array.data();

    let mut out = Vec::with_capacity(outer * inner);
    for o in 0..outer {
        let start = (o * dim_size + index) * inner;
        out.extend_from_slice(&data[start..start + inner]);
    }

    Ok(NdArray::from_parts(array.shape().remove_axis(axis), out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_take_1d() {
        let a = NdArray::<i32>::from_nested(vec![10, 20, 30]).unwrap();
        let t = take(&a, 1, 0).unwrap();
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.data(), &[20]);
        assert_eq!(t.to_string(), "20");
    }

    #[test]
    fn test_take_3d_every_axis() {
        let a: NdArray<i64> = NdArray::arange(&[2, 3, 4]);

        let t0 = take(&a, 1, 0).unwrap();
        assert_eq!(t0.shape(), &[3, 4]);
        assert_eq!(t0.get(&[2, 3]), a.get(&[1, 2, 3]));

        let t1 = take(&a, 2, 1).unwrap();
        assert_eq!(t1.shape(), &[2, 4]);
        for i in 0..2 {
            for k in 0..4 {
                assert_eq!(t1.get(&[i, k]), a.get(&[i, 2, k]));
            }
        }

        let t2 = take(&a, 3, 2).unwrap();
        assert_eq!(t2.shape(), &[2, 3]);
        assert_eq!(t2.data(), &[4, 8, 12, 16, 20, 24]);
    }

    #[test]
    fn test_take_strides_recomputed() {
        let a: NdArray<f64> = NdArray::zeros(&[2, 3, 4]);
        let t = take(&a, 0, 1).unwrap();
        assert_eq!(t.strides(), &[4, 1]);
    }

    #[test]
    fn test_take_axis_out_of_bounds() {
        let a: NdArray<i32> = NdArray::zeros(&[2, 3]);
        let err = take(&a, 0, 2).unwrap_err();
        assert_eq!(err, ArrayError::AxisOutOfBounds { axis: 2, ndim: 2 });
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_take_index_out_of_bounds() {
        let a: NdArray<i32> = NdArray::zeros(&[2, 3]);
        let err = take(&a, 3, 1).unwrap_err();
        assert_eq!(
            err,
            ArrayError::IndexOutOfBounds {
                index: 3,
                axis: 1,
                dim_size: 3
            }
        );
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_take_scalar_has_no_axis() {
        let a = NdArray::from_vec(vec![1.0], &[]).unwrap();
        assert!(take(&a, 0, 0).is_err());
    }

    #[test]
    fn test_take_keeps_zero_length_axis() {
        let a: NdArray<i32> = NdArray::zeros(&[2, 0, 3]);
        let t = take(&a, 1, 0).unwrap();
        assert_eq!(t.shape(), &[0, 3]);
        assert!(t.is_empty());
    }
}
