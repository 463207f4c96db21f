//! Backend abstraction for array kernels.
//!
//! Operations validate shapes and allocate outputs, then hand contiguous
//! buffers to a backend.
//!
//! # Backends
//!
//! - `GenericBackend`: Naive loop-based implementation (all scalar types)
//! - `FaerBackend`: faer GEMM for `f32`, `f64` and `c64`

mod faer_gemm;
mod generic;
mod matmul;
mod permutation;

pub use faer_gemm::FaerBackend;
pub use generic::GenericBackend;
pub use matmul::MatMulBackend;
pub use permutation::PermutationBackend;
