//! Whole-array reductions.

use crate::array::NdArray;
use crate::scalar::Scalar;

fn extremum<ElT, F>(array: &NdArray<ElT>, better: F) -> Option<ElT>
where
    ElT: Scalar,
    F: Fn(&ElT, &ElT) -> bool,
{
    let (&first, rest) = array.data().split_first()?;
    Some(
        rest.iter()
            .fold(first, |best, &x| if better(&x, &best) { x } else { best }),
    )
}

/// Largest element, or `None` for an empty array.
///
/// Elements that compare unordered (NaN) never replace the running maximum.
///
/// # Example
///
/// ```
/// use ndshape::NdArray;
/// use ndshape::operations::max;
///
/// let a = NdArray::<i32>::from_nested([[3, -1], [7, 2]]).unwrap();
/// assert_eq!(max(&a), Some(7));
/// assert_eq!(max(&NdArray::<i32>::zeros(&[0])), None);
/// ```
pub fn max<ElT: Scalar + PartialOrd>(array: &NdArray<ElT>) -> Option<ElT> {
    extremum(array, |x, best| x > best)
}

/// Smallest element, or `None` for an empty array.
pub fn min<ElT: Scalar + PartialOrd>(array: &NdArray<ElT>) -> Option<ElT> {
    extremum(array, |x, best| x < best)
}
