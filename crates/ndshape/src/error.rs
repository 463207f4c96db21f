//! Error types for ndshape.

use thiserror::Error;

/// Broad classification of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand shapes are incompatible for the requested operation.
    Shape,
    /// Batch dimensions cannot be reconciled under broadcasting.
    Broadcast,
    /// An axis or index argument is out of range.
    Index,
    /// An argument value is invalid regardless of operand shapes.
    Value,
}

/// Errors that can occur in array operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Data length doesn't match the product of the shape.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Element count of a shape does not fit in `usize`.
    #[error("shape {shape:?} has too many elements")]
    SizeOverflow { shape: Vec<usize> },

    /// Sibling sequences of unequal length in nested input.
    #[error("jagged nested sequence at depth {depth}: expected length {expected}, got {actual}")]
    JaggedLength {
        depth: usize,
        expected: usize,
        actual: usize,
    },

    /// A scalar and a sequence appear at the same nesting depth.
    #[error("jagged nested sequence at depth {depth}: mixed scalars and sequences")]
    JaggedDepth { depth: usize },

    /// Operation requires a minimum rank.
    #[error("{operand} operand must have at least {required} dimensions, got {actual}")]
    RankTooSmall {
        operand: &'static str,
        required: usize,
        actual: usize,
    },

    /// Inner matrix dimensions of a matmul disagree.
    #[error("matmul inner dimensions differ: lhs {lhs:?} has K={k_lhs}, rhs {rhs:?} has K={k_rhs}")]
    InnerDimMismatch {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        k_lhs: usize,
        k_rhs: usize,
    },

    /// Contracted dimensions of a tensordot disagree.
    #[error("cannot contract trailing axes {lhs:?} with leading axes {rhs:?}")]
    ContractDimMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    /// Arrays passed to `stack` don't share a shape.
    #[error("cannot stack arrays of shape {expected:?} and {actual:?}")]
    StackShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Batch shapes cannot be broadcast together.
    #[error("batch shapes {lhs:?} and {rhs:?} are not broadcast-compatible")]
    Broadcast { lhs: Vec<usize>, rhs: Vec<usize> },

    /// Axis argument not in `0..ndim`.
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// Index not in `0..dim_size` along an axis.
    #[error("index {index} is out of bounds for axis {axis} with size {dim_size}")]
    IndexOutOfBounds {
        index: usize,
        axis: usize,
        dim_size: usize,
    },

    /// Contraction axis count is negative or exceeds an operand's rank.
    #[error("invalid axis count {axes} for operands of rank {ndim_a} and {ndim_b}")]
    InvalidAxisCount {
        axes: isize,
        ndim_a: usize,
        ndim_b: usize,
    },

    /// Multi-index longer than the array's rank.
    #[error("index of length {len} is too long for array of dimension {ndim}")]
    IndexTooLong { len: usize, ndim: usize },

    /// Invalid permutation.
    #[error("invalid permutation {perm:?} for array with {ndim} dimensions")]
    InvalidPermutation { perm: Vec<usize>, ndim: usize },

    /// `stack` called with no arrays.
    #[error("need at least one array to stack")]
    EmptyStack,
}

impl ArrayError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::ShapeMismatch { .. }
            | ArrayError::SizeOverflow { .. }
            | ArrayError::JaggedLength { .. }
            | ArrayError::JaggedDepth { .. }
            | ArrayError::RankTooSmall { .. }
            | ArrayError::InnerDimMismatch { .. }
            | ArrayError::ContractDimMismatch { .. }
            | ArrayError::StackShapeMismatch { .. } => ErrorKind::Shape,
            ArrayError::Broadcast { .. } => ErrorKind::Broadcast,
            ArrayError::AxisOutOfBounds { .. }
            | ArrayError::IndexOutOfBounds { .. }
            | ArrayError::IndexTooLong { .. } => ErrorKind::Index,
            ArrayError::InvalidAxisCount { .. }
            | ArrayError::InvalidPermutation { .. }
            | ArrayError::EmptyStack => ErrorKind::Value,
        }
    }
}
