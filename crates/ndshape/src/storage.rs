//! Dense storage for array data.

use crate::scalar::Scalar;

/// Dense storage - contiguous elements in row-major order.
///
/// Shape and strides live on the [`NdArray`](crate::NdArray) wrapper;
/// storage is always a flat vector owned by exactly one array.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<ElT: Scalar> {
    data: Vec<ElT>,
}

impl<ElT: Scalar> Dense<ElT> {
    /// Create dense storage with given length, zero-initialized.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![ElT::zero(); len],
        }
    }

    /// Create dense storage from existing vector (takes ownership).
    pub fn from_vec(data: Vec<ElT>) -> Self {
        Self { data }
    }

    /// Length of storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if storage is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get immutable slice of data.
    #[inline]
    pub fn as_slice(&self) -> &[ElT] {
        &self.data
    }

    /// Get mutable slice of data.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [ElT] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<ElT> {
        self.data
    }
}

impl<ElT: Scalar> std::ops::Index<usize> for Dense<ElT> {
    type Output = ElT;

    #[inline]
    fn index(&self, i: usize) -> &ElT {
        &self.data[i]
    }
}
