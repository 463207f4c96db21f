//! Array operations.
//!
//! High-level functions allocate their output and delegate to an `_into`
//! variant or a backend:
//!
//! ```text
//! Level 1: High-level API (take, slice, stack, permutedims, outer,
//!          element-wise arithmetic, max / min)
//!     → validate arguments, allocate output
//!
//! Level 2: In-place API (permutedims_into, outer_into)
//!     → dispatch to backend
//!
//! Level 3: Backend implementation (GenericBackend)
//! ```

mod elementwise;
mod outer;
mod permutedims;
mod reduce;
mod slice;
mod stack;
mod take;

pub use elementwise::{add, add_scalar, map, mul, mul_scalar, sub, sub_scalar};
pub use outer::{outer, outer_into};
pub use permutedims::{permutedims, permutedims_into};
pub use reduce::{max, min};
pub use slice::slice;
pub use stack::stack;
pub use take::take;
