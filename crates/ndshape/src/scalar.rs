//! Scalar trait for array element types.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

pub use faer::c64;

/// Trait for element types supported by ndshape.
///
/// Operations only need ring arithmetic and the two identities, so
/// integers work as well as floats.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty => $one:expr),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_scalar! {
    i32 => 1,
    i64 => 1,
    u32 => 1,
    u64 => 1,
    f32 => 1.0,
    f64 => 1.0,
}

impl Scalar for c64 {
    fn one() -> Self {
        c64::new(1.0, 0.0)
    }
}
