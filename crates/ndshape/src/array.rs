//! N-dimensional array type.
//!
//! An [`NdArray`] owns a flat row-major buffer together with its [`Shape`]
//! and the strides derived from it. Arrays are never mutated after
//! construction; every operation allocates a new array.

use std::fmt;

use crate::error::ArrayError;
use crate::nested::{Nested, NestedData, shape_and_flatten};
use crate::scalar::Scalar;
use crate::shape::Shape;
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, compute_strides, linear_to_cartesian};

/// A dense n-dimensional array in row-major order.
///
/// Equality (`==`) holds when the shapes are identical and all elements
/// compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray<ElT: Scalar> {
    storage: Dense<ElT>,
    shape: Shape,
    strides: Vec<usize>,
}

impl<ElT: Scalar> NdArray<ElT> {
    /// Build an array from data already known to match `shape`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<ElT>) -> Self {
        debug_assert_eq!(shape.size(), data.len());
        let strides = compute_strides(&shape);
        Self {
            storage: Dense::from_vec(data),
            shape,
            strides,
        }
    }

    /// Create a new array with the given shape, zero-initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a: NdArray<f64> = NdArray::zeros(&[2, 3, 4]);
    /// assert_eq!(a.shape(), &[2, 3, 4]);
    /// assert_eq!(a.strides(), &[12, 4, 1]);
    /// assert_eq!(a.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        let shape = Shape::from(shape);
        let storage = Dense::zeros(shape.size());
        let strides = compute_strides(&shape);
        Self {
            storage,
            shape,
            strides,
        }
    }

    /// Create an array filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let shape = Shape::from(shape);
        let data = vec![ElT::one(); shape.size()];
        Self::from_parts(shape, data)
    }

    /// Create an array from row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::ShapeMismatch` if data length doesn't match shape,
    /// or `ArrayError::SizeOverflow` if the shape's element count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(a.get(&[0, 1]), Some(&2));
    /// assert_eq!(a.get(&[1, 0]), Some(&4));
    /// ```
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, ArrayError> {
        let shape = Shape::from(shape);
        let expected = shape.checked_size().ok_or_else(|| ArrayError::SizeOverflow {
            shape: shape.to_vec(),
        })?;
        if data.len() != expected {
            return Err(ArrayError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Create an array whose element at each index is `f(index)`.
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let eye = NdArray::from_fn(&[3, 3], |ix| if ix[0] == ix[1] { 1 } else { 0 });
    /// assert_eq!(eye.get(&[1, 1]), Some(&1));
    /// assert_eq!(eye.get(&[0, 2]), Some(&0));
    /// ```
    pub fn from_fn<F>(shape: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> ElT,
    {
        let shape = Shape::from(shape);
        let data = (0..shape.size())
            .map(|linear| f(&linear_to_cartesian(linear, &shape)))
            .collect();
        Self::from_parts(shape, data)
    }

    /// Create an array holding 1, 2, 3, ... in row-major order.
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a: NdArray<i64> = NdArray::arange(&[2, 2]);
    /// assert_eq!(a.data(), &[1, 2, 3, 4]);
    /// ```
    pub fn arange(shape: &[usize]) -> Self {
        let shape = Shape::from(shape);
        let mut next = ElT::zero();
        let data = (0..shape.size())
            .map(|_| {
                next = next + ElT::one();
                next
            })
            .collect();
        Self::from_parts(shape, data)
    }

    /// Create an array from a nested sequence, inferring the shape.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::JaggedLength` or `ArrayError::JaggedDepth` if
    /// siblings at some depth disagree in length or nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a = NdArray::<i32>::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert_eq!(a.strides(), &[3, 1]);
    ///
    /// assert!(NdArray::<i32>::from_nested(vec![vec![1, 2, 3], vec![4, 5]]).is_err());
    /// ```
    pub fn from_nested<N: NestedData<ElT>>(data: N) -> Result<Self, ArrayError> {
        let (shape, flat) = shape_and_flatten(&data)?;
        Ok(Self::from_parts(Shape::from(shape), flat))
    }

    /// Convert back to a nested sequence mirroring the shape.
    ///
    /// Feeding the result to [`NdArray::from_nested`] rebuilds an equal
    /// array, except when an axis after a zero-length axis is lost.
    pub fn to_nested(&self) -> Nested<ElT> {
        fn build<ElT: Scalar>(data: &[ElT], shape: &[usize]) -> Nested<ElT> {
            match shape.split_first() {
                None => Nested::Scalar(data[0]),
                Some((&len, rest)) => {
                    let chunk: usize = rest.iter().product();
                    Nested::List(
                        (0..len)
                            .map(|i| build(&data[i * chunk..(i + 1) * chunk], rest))
                            .collect(),
                    )
                }
            }
        }

        build(self.data(), &self.shape)
    }

    /// Get the shape of the array.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Get strides in elements.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Strides in bytes, as reported by NumPy's `ndarray.strides`.
    pub fn byte_strides(&self) -> Vec<usize> {
        let width = std::mem::size_of::<ElT>();
        self.strides.iter().map(|&s| s * width).collect()
    }

    /// Get total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Alias of [`NdArray::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Check if array has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Get underlying row-major data.
    #[inline]
    pub fn data(&self) -> &[ElT] {
        self.storage.as_slice()
    }

    /// Consume the array and return its row-major data.
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a = NdArray::<i32>::from_nested([[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.into_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn into_vec(self) -> Vec<ElT> {
        self.storage.into_vec()
    }

    /// Get element by linear index.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&ElT> {
        self.storage.as_slice().get(i)
    }

    /// Get element by cartesian indices.
    ///
    /// Returns `None` if indices are out of bounds or wrong number of indices.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        if indices.len() != self.ndim() {
            return None;
        }
        if indices.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d) {
            return None;
        }
        self.get_linear(cartesian_to_linear(indices, &self.strides))
    }

    /// Sub-array with `axis` fixed at `index`; see [`crate::operations::take`].
    pub fn take(&self, index: usize, axis: usize) -> Result<Self, ArrayError> {
        crate::operations::take(self, index, axis)
    }

    /// Sub-array at a prefix multi-index; see [`crate::operations::slice`].
    pub fn slice(&self, index: &[usize]) -> Result<Self, ArrayError> {
        crate::operations::slice(self, index)
    }

    /// Copy with permuted axes; see [`crate::operations::permutedims`].
    pub fn permutedims(&self, perm: &[usize]) -> Result<Self, ArrayError> {
        crate::operations::permutedims(self, perm)
    }

    /// Copy with the axis order reversed.
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a = NdArray::<i32>::arange(&[2, 3]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.get(&[2, 1]), a.get(&[1, 2]));
    /// ```
    pub fn transpose(&self) -> Self {
        let perm: Vec<usize> = (0..self.ndim()).rev().collect();
        let new_shape: Shape = perm.iter().map(|&p| self.shape[p]).collect();
        let mut result = Self::zeros(&new_shape);
        crate::operations::permutedims_into(&mut result, self, &perm);
        result
    }

    /// Copy with a new shape of the same size.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::ShapeMismatch` if the sizes differ.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, ArrayError> {
        Self::from_vec(self.data().to_vec(), new_shape)
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [ElT] {
        self.storage.as_mut_slice()
    }
}

impl<ElT: Scalar + PartialOrd> NdArray<ElT> {
    /// Largest element; see [`crate::operations::max`].
    pub fn max(&self) -> Option<ElT> {
        crate::operations::max(self)
    }

    /// Smallest element; see [`crate::operations::min`].
    pub fn min(&self) -> Option<ElT> {
        crate::operations::min(self)
    }
}

/// Nested bracketed rendering, `[[1, 2], [3, 4]]`.
impl<ElT: Scalar> fmt::Display for NdArray<ElT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render<ElT: Scalar>(
            f: &mut fmt::Formatter<'_>,
            data: &[ElT],
            shape: &[usize],
        ) -> fmt::Result {
            let Some((&len, rest)) = shape.split_first() else {
                return write!(f, "{}", data[0]);
            };
            let chunk: usize = rest.iter().product();
            write!(f, "[")?;
            for i in 0..len {
                if i > 0 {
                    write!(f, ", ")?;
                }
                render(f, &data[i * chunk..(i + 1) * chunk], rest)?;
            }
            write!(f, "]")
        }

        render(f, self.data(), &self.shape)
    }
}
