//! Contraction properties for GEMM-based tensordot.
//!
//! Contracting the last `k` axes of A with the first `k` axes of B needs no
//! permutation in row-major order: A is already a `(dleft, dmid)` matrix and
//! B a `(dmid, dright)` matrix.

use crate::error::ArrayError;
use crate::shape::Shape;

/// Properties computed for a tensordot over `axes` axes.
///
/// - `dleft` = product of A's free dimensions
/// - `dmid` = product of contracted dimensions
/// - `dright` = product of B's free dimensions
///
/// The contraction becomes: `C(dleft, dright) = A(dleft, dmid) * B(dmid, dright)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionProperties {
    /// Number of contracted axes.
    pub axes: usize,

    /// GEMM dimension: product of A's free dimensions
    pub dleft: usize,

    /// GEMM dimension: product of contracted dimensions
    pub dmid: usize,

    /// GEMM dimension: product of B's free dimensions
    pub dright: usize,

    /// `shape_a[..ndim_a - axes]` followed by `shape_b[axes..]`
    pub output_shape: Shape,
}

impl ContractionProperties {
    /// Validate a contraction and compute its GEMM dimensions.
    ///
    /// # Errors
    ///
    /// - `ArrayError::InvalidAxisCount` if `axes < 0` or exceeds either rank.
    /// - `ArrayError::ContractDimMismatch` if the trailing `axes` dimensions
    ///   of A differ from the leading `axes` dimensions of B.
    ///
    /// # Example
    ///
    /// ```
    /// use ndshape::contract::ContractionProperties;
    ///
    /// // A is 2x3x4, B is 3x4x5, contract two axes
    /// let props = ContractionProperties::compute(&[2, 3, 4], &[3, 4, 5], 2).unwrap();
    ///
    /// assert_eq!(props.dleft, 2);
    /// assert_eq!(props.dmid, 12);
    /// assert_eq!(props.dright, 5);
    /// assert_eq!(props.output_shape, [2, 5]);
    /// ```
    pub fn compute(shape_a: &[usize], shape_b: &[usize], axes: isize) -> Result<Self, ArrayError> {
        let invalid = || ArrayError::InvalidAxisCount {
            axes,
            ndim_a: shape_a.len(),
            ndim_b: shape_b.len(),
        };
        let k = usize::try_from(axes).map_err(|_| invalid())?;
        if k > shape_a.len() || k > shape_b.len() {
            return Err(invalid());
        }

        let (free_a, contracted_a) = shape_a.split_at(shape_a.len() - k);
        let (contracted_b, free_b) = shape_b.split_at(k);
        if contracted_a != contracted_b {
            return Err(ArrayError::ContractDimMismatch {
                lhs: contracted_a.to_vec(),
                rhs: contracted_b.to_vec(),
            });
        }

        Ok(Self {
            axes: k,
            dleft: free_a.iter().product(),
            dmid: contracted_a.iter().product(),
            dright: free_b.iter().product(),
            output_shape: Shape::from(free_a).concat(free_b),
        })
    }

    /// Check if this is an outer product (no contracted axes).
    pub fn is_outer_product(&self) -> bool {
        self.axes == 0
    }

    /// Check if this is a full contraction (scalar result).
    pub fn is_full_contraction(&self) -> bool {
        self.output_shape.ndim() == 0
    }
}
