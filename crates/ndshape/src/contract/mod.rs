//! Batched matrix multiplication and axis-count tensor contraction.
//!
//! Both operations validate shapes eagerly, then hand `(M, K) x (K, N)`
//! blocks to a [`MatMulBackend`](crate::backend::MatMulBackend).
//!
//! # Implementations
//!
//! - [`matmul`], [`tensordot`]: naive loops, every element type
//! - [`matmul_gemm`], [`tensordot_gemm`]: faer GEMM for `f32`, `f64`, `c64`
//!
//! # Example
//!
//! ```
//! use ndshape::{NdArray, matmul, tensordot};
//!
//! let a = NdArray::<f64>::ones(&[4, 2, 3]);
//! let b = NdArray::<f64>::ones(&[3, 5]);
//!
//! // batch (4,) broadcast against (), then (2,3) x (3,5)
//! let c = matmul(&a, &b).unwrap();
//! assert_eq!(c.shape(), &[4, 2, 5]);
//!
//! // contract the trailing 3 of `a` with the leading 3 of `b`
//! let d = tensordot(&a, &b, 1).unwrap();
//! assert_eq!(d.shape(), &[4, 2, 5]);
//! ```

mod gemm;
mod matmul;
mod properties;
mod tensordot;

pub use gemm::{matmul_gemm, tensordot_gemm};
pub use matmul::{matmul, matmul_with};
pub use properties::ContractionProperties;
pub use tensordot::{tensordot, tensordot_with};
