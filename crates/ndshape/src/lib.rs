//! ndshape - minimal N-dimensional arrays with batched matmul and tensordot
//!
//! An [`NdArray`] is an immutable, row-major buffer with explicit shape and
//! strides. On top of it the crate provides axis slicing ([`take`],
//! [`slice`]), element-wise arithmetic, batch-shape broadcasting, batched
//! matrix multiplication and axis-count tensor contraction.
//!
//! # Architecture
//!
//! ```text
//! Level 1: High-level API (operations, contract)
//!     → take, slice, stack, permutedims, add / sub / mul, matmul, tensordot
//!
//! Level 2: Shape resolution
//!     → broadcast_batch_shapes, ContractionProperties
//!
//! Level 3: Backend implementation (backend module)
//!     → GenericBackend (naive loops, every element type)
//!     → FaerBackend (faer GEMM, f32 / f64 / c64)
//! ```
//!
//! # Example
//!
//! ```
//! use ndshape::{NdArray, matmul, tensordot};
//!
//! let a = NdArray::<i32>::from_nested([[1, 2, 3], [4, 5, 6]]).unwrap();
//! assert_eq!(a.ndim(), 2);
//! assert_eq!(a.shape(), &[2, 3]);
//! assert_eq!(a.strides(), &[3, 1]);
//!
//! let row = a.take(1, 0).unwrap();
//! assert_eq!(row.to_string(), "[4, 5, 6]");
//!
//! let b = a.transpose();
//! assert_eq!(matmul(&a, &b).unwrap().to_string(), "[[14, 32], [32, 77]]");
//!
//! let v = NdArray::<i32>::from_nested([1, 2, 3]).unwrap();
//! assert_eq!(tensordot(&v, &v, 1).unwrap().to_string(), "14");
//! ```

pub mod array;
pub mod backend;
pub mod broadcast;
pub mod contract;
pub mod error;
pub mod nested;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod shape;
pub mod storage;
pub mod strides;

pub use array::NdArray;
pub use broadcast::broadcast_batch_shapes;
pub use contract::{matmul, matmul_gemm, tensordot, tensordot_gemm};
pub use error::{ArrayError, ErrorKind};
pub use nested::{Nested, NestedData};
pub use operations::{
    add, add_scalar, mul, mul_scalar, outer, permutedims, slice, stack, sub, sub_scalar, take,
};
pub use random::{RandomNormal, RandomUniform};
pub use scalar::{Scalar, c64};
pub use shape::Shape;
