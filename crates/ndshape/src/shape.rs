//! Shape value type.

use std::fmt;
use std::ops::Deref;

use smallvec::SmallVec;

/// Inline capacity; the demos never go beyond rank 8.
const INLINE_DIMS: usize = 8;

/// Ordered sequence of dimension sizes.
///
/// Shapes are plain values: operations build new shapes instead of
/// editing existing ones. Compares element-wise against slices, arrays
/// and vectors of `usize`.
///
/// # Examples
///
/// ```
/// use ndshape::Shape;
///
/// let s = Shape::from([2, 3, 4]);
/// assert_eq!(s.ndim(), 3);
/// assert_eq!(s.size(), 24);
/// assert_eq!(s, [2, 3, 4]);
/// assert_eq!(s.to_string(), "(2, 3, 4)");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape(SmallVec<[usize; INLINE_DIMS]>);

impl Shape {
    /// The shape of a rank-0 (scalar) array.
    pub fn scalar() -> Self {
        Self(SmallVec::new())
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Number of elements (1 for the empty shape).
    ///
    /// Saturates at `usize::MAX` when the product overflows, so allocating
    /// that many elements fails instead of wrapping to a small buffer.
    #[inline]
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    /// Number of elements, or `None` if it does not fit in `usize`.
    ///
    /// ```
    /// use ndshape::Shape;
    ///
    /// assert_eq!(Shape::from([2, 3]).checked_size(), Some(6));
    /// assert_eq!(Shape::from([usize::MAX, 2]).checked_size(), None);
    /// assert_eq!(Shape::from([usize::MAX, 2, 0]).checked_size(), Some(0));
    /// ```
    pub fn checked_size(&self) -> Option<usize> {
        if self.0.contains(&0) {
            return Some(0);
        }
        self.0.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.0.to_vec()
    }

    /// New shape made of `self` followed by `other`.
    pub fn concat(&self, other: &[usize]) -> Self {
        self.0.iter().chain(other.iter()).copied().collect()
    }

    /// New shape with `axis` removed.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim`.
    pub fn remove_axis(&self, axis: usize) -> Self {
        let mut dims = self.0.clone();
        dims.remove(axis);
        Self(dims)
    }

    /// New shape with a dimension of size `len` inserted before `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis > ndim`.
    pub fn insert_axis(&self, axis: usize, len: usize) -> Self {
        let mut dims = self.0.clone();
        dims.insert(axis, len);
        Self(dims)
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(SmallVec::from_slice(dims))
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(SmallVec::from_vec(dims))
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(SmallVec::from_slice(&dims))
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, other: &[usize]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Shape {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<usize>> for Shape {
    fn eq(&self, other: &Vec<usize>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Tuple-style rendering, `(2,)` for rank 1.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [] => write!(f, "()"),
            [d] => write!(f, "({d},)"),
            dims => {
                write!(f, "(")?;
                for (i, d) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{d}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape() {
        let s = Shape::scalar();
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.size(), 1);
        assert_eq!(s.to_string(), "()");
    }

    #[test]
    fn test_zero_size() {
        let s = Shape::from([2, 0, 3]);
        assert_eq!(s.size(), 0);
    }

    #[test]
    fn test_size_overflow() {
        let s = Shape::from([usize::MAX, 2]);
        assert_eq!(s.checked_size(), None);
        assert_eq!(s.size(), usize::MAX);

        let empty = Shape::from([usize::MAX, 2, 0]);
        assert_eq!(empty.checked_size(), Some(0));
        assert_eq!(empty.size(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::from([2]).to_string(), "(2,)");
        assert_eq!(Shape::from([2, 3, 2, 2]).to_string(), "(2, 3, 2, 2)");
    }

    #[test]
    fn test_concat() {
        let s = Shape::from([2, 3]).concat(&[4, 5]);
        assert_eq!(s, [2, 3, 4, 5]);
    }

    #[test]
    fn test_remove_insert_axis() {
        let s = Shape::from([2, 3, 4]);
        assert_eq!(s.remove_axis(1), [2, 4]);
        assert_eq!(s.insert_axis(0, 5), [5, 2, 3, 4]);
        assert_eq!(s.insert_axis(3, 5), [2, 3, 4, 5]);
    }

    #[test]
    fn test_compare_with_vec() {
        let s = Shape::from(vec![1, 2]);
        assert_eq!(s, vec![1, 2]);
        assert_ne!(s, vec![2, 1]);
    }
}
