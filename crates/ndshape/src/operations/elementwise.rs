//! Element-wise arithmetic.
//!
//! Binary operations broadcast their operands with the same right-aligned
//! rule as the matmul batch axes (see [`broadcast_batch_shapes`]). Equal
//! shapes take a plain zip over the data.

use crate::array::NdArray;
use crate::broadcast::{broadcast_batch_shapes, source_batch_offset};
use crate::error::ArrayError;
use crate::scalar::Scalar;
use crate::strides::linear_to_cartesian;

/// Apply a function to each element, returning a new array.
///
/// # Example
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::map;
///
/// let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
/// assert_eq!(map(&a, |x| x * x).data(), &[1, 4, 9]);
/// ```
pub fn map<ElT: Scalar, F>(array: &NdArray<ElT>, f: F) -> NdArray<ElT>
where
    F: Fn(ElT) -> ElT,
{
    let data = array.data().iter().map(|&x| f(x)).collect();
    NdArray::from_parts(array.shape().clone(), data)
}

fn zip_with<ElT: Scalar, F>(
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    f: F,
) -> Result<NdArray<ElT>, ArrayError>
where
    F: Fn(ElT, ElT) -> ElT,
{
    if a.shape() == b.shape() {
        let data = a.data().iter().zip(b.data()).map(|(&x, &y)| f(x, y)).collect();
        return Ok(NdArray::from_parts(a.shape().clone(), data));
    }

    let shape = broadcast_batch_shapes(a.shape(), b.shape())?;
    log::trace!("element-wise broadcast {} with {} -> {}", a.shape(), b.shape(), shape);

    let (a_data, b_data) = (a.data(), b.data());
    let data = (0..shape.size())
        .map(|linear| {
            let index = linear_to_cartesian(linear, &shape);
            let x = a_data[source_batch_offset(&index, a.shape())];
            let y = b_data[source_batch_offset(&index, b.shape())];
            f(x, y)
        })
        .collect();
    Ok(NdArray::from_parts(shape, data))
}

/// Element-wise sum `a + b`.
///
/// # Errors
///
/// Returns `ArrayError::Broadcast` if the shapes cannot be broadcast.
///
/// # Example
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::add;
///
/// let a = NdArray::<i32>::from_nested([[1, 2], [3, 4]]).unwrap();
/// let row = NdArray::<i32>::from_nested([10, 20]).unwrap();
///
/// assert_eq!(add(&a, &a).unwrap().data(), &[2, 4, 6, 8]);
/// assert_eq!(add(&a, &row).unwrap().to_string(), "[[11, 22], [13, 24]]");
/// ```
pub fn add<ElT: Scalar>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError> {
    zip_with(a, b, |x, y| x + y)
}

/// Element-wise difference `a - b`.
///
/// # Errors
///
/// Returns `ArrayError::Broadcast` if the shapes cannot be broadcast.
pub fn sub<ElT: Scalar>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError> {
    zip_with(a, b, |x, y| x - y)
}

/// Element-wise (Hadamard) product `a * b`. For matrix products see
/// [`matmul`](crate::matmul).
///
/// # Errors
///
/// Returns `ArrayError::Broadcast` if the shapes cannot be broadcast.
pub fn mul<ElT: Scalar>(a: &NdArray<ElT>, b: &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError> {
    zip_with(a, b, |x, y| x * y)
}

/// Add `alpha` to every element.
///
/// # Example
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::add_scalar;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// assert_eq!(add_scalar(&a, 0.5).data(), &[1.5, 2.5]);
/// ```
pub fn add_scalar<ElT: Scalar>(array: &NdArray<ElT>, alpha: ElT) -> NdArray<ElT> {
    map(array, |x| x + alpha)
}

/// Subtract `alpha` from every element.
pub fn sub_scalar<ElT: Scalar>(array: &NdArray<ElT>, alpha: ElT) -> NdArray<ElT> {
    map(array, |x| x - alpha)
}

/// Multiply every element by `alpha`.
pub fn mul_scalar<ElT: Scalar>(array: &NdArray<ElT>, alpha: ElT) -> NdArray<ElT> {
    map(array, |x| x * alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::scalar::c64;

    #[test]
    fn test_same_shape() {
        let a: NdArray<i64> = NdArray::arange(&[2, 3]);
        let b = NdArray::from_vec(vec![6, 5, 4, 3, 2, 1], &[2, 3]).unwrap();

        assert_eq!(add(&a, &b).unwrap().data(), &[7; 6]);
        assert_eq!(sub(&a, &b).unwrap().data(), &[-5, -3, -1, 1, 3, 5]);
        assert_eq!(mul(&a, &b).unwrap().data(), &[6, 10, 12, 12, 10, 6]);
        assert_eq!(add(&a, &b).unwrap().shape(), &[2, 3]);
    }

    #[test]
    fn test_operands_unchanged() {
        let a: NdArray<f64> = NdArray::arange(&[3]);
        let before = a.clone();
        let _ = sub(&a, &a).unwrap();
        let _ = mul_scalar(&a, 2.0);
        assert_eq!(a, before);
    }

    #[test]
    fn test_broadcast_column_and_row() {
        let col = NdArray::from_vec(vec![1, 2], &[2, 1]).unwrap();
        let row = NdArray::from_vec(vec![10, 20, 30], &[3]).unwrap();

        let c = add(&col, &row).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.to_string(), "[[11, 21, 31], [12, 22, 32]]");

        let d = sub(&row, &col).unwrap();
        assert_eq!(d.to_string(), "[[9, 19, 29], [8, 18, 28]]");
    }

    #[test]
    fn test_broadcast_scalar_array() {
        let s = NdArray::from_vec(vec![3], &[]).unwrap();
        let a: NdArray<i32> = NdArray::arange(&[2, 2]);
        assert_eq!(mul(&a, &s).unwrap().data(), &[3, 6, 9, 12]);
        assert_eq!(mul(&s, &a).unwrap().shape(), &[2, 2]);
    }

    #[test]
    fn test_incompatible_shapes() {
        let a: NdArray<f32> = NdArray::ones(&[2, 3]);
        let b: NdArray<f32> = NdArray::ones(&[2]);
        let err = add(&a, &b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Broadcast);
    }

    #[test]
    fn test_scalar_ops() {
        let a: NdArray<i32> = NdArray::arange(&[2, 2]);
        assert_eq!(add_scalar(&a, 10).data(), &[11, 12, 13, 14]);
        assert_eq!(sub_scalar(&a, 1).data(), &[0, 1, 2, 3]);
        assert_eq!(mul_scalar(&a, -2).data(), &[-2, -4, -6, -8]);
        assert_eq!(mul_scalar(&a, -2).shape(), &[2, 2]);
    }

    #[test]
    fn test_complex() {
        let i = c64::new(0.0, 1.0);
        let a = NdArray::from_vec(vec![i, c64::new(2.0, 0.0)], &[2]).unwrap();
        let sq = mul(&a, &a).unwrap();
        assert_eq!(sq.data(), &[c64::new(-1.0, 0.0), c64::new(4.0, 0.0)]);
        assert_eq!(sub_scalar(&a, i).data()[0], c64::new(0.0, 0.0));
    }

    #[test]
    fn test_empty() {
        let e: NdArray<f64> = NdArray::zeros(&[0, 3]);
        let r: NdArray<f64> = NdArray::ones(&[3]);
        let c = add(&e, &r).unwrap();
        assert_eq!(c.shape(), &[0, 3]);
        assert!(c.is_empty());
    }
}
