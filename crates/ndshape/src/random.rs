//! Random array construction for floating-point element types.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::array::NdArray;
use crate::scalar::{Scalar, c64};
use crate::shape::Shape;

/// Element types with a uniform sampler over `[0, 1)`.
pub trait RandomUniform: Scalar {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

/// Element types with a standard normal sampler.
pub trait RandomNormal: Scalar {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_random_real {
    ($($t:ty),*) => {
        $(
            impl RandomUniform for $t {
                fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
                    rng.sample(StandardUniform)
                }
            }

            impl RandomNormal for $t {
                fn sample_normal<R: Rng>(rng: &mut R) -> Self {
                    rng.sample(StandardNormal)
                }
            }
        )*
    };
}

impl_random_real!(f32, f64);

impl RandomUniform for c64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        c64::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

impl RandomNormal for c64 {
    /// Real and imaginary parts are independent N(0, 1/2), so `E|z|^2 = 1`.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        c64::new(
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
        )
    }
}

fn sampled<ElT: Scalar>(shape: &[usize], mut sample: impl FnMut() -> ElT) -> NdArray<ElT> {
    let shape = Shape::from(shape);
    let data = (0..shape.size()).map(|_| sample()).collect();
    NdArray::from_parts(shape, data)
}

impl<ElT: RandomUniform> NdArray<ElT> {
    /// Array of uniform random values in `[0, 1)` from the thread RNG.
    ///
    /// ```
    /// use ndshape::NdArray;
    ///
    /// let a: NdArray<f64> = NdArray::random(&[2, 3]);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert!(a.data().iter().all(|v| (0.0..1.0).contains(v)));
    /// ```
    pub fn random(shape: &[usize]) -> Self {
        Self::random_with_rng(shape, &mut rand::rng())
    }

    /// Array of uniform random values drawn from `rng`.
    ///
    /// ```
    /// use ndshape::NdArray;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let a: NdArray<f32> = NdArray::random_with_rng(&[4], &mut StdRng::seed_from_u64(7));
    /// let b: NdArray<f32> = NdArray::random_with_rng(&[4], &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        sampled(shape, || ElT::sample_uniform(rng))
    }
}

impl<ElT: RandomNormal> NdArray<ElT> {
    /// Array of standard normal values from the thread RNG.
    pub fn randn(shape: &[usize]) -> Self {
        Self::randn_with_rng(shape, &mut rand::rng())
    }

    /// Array of standard normal values drawn from `rng`.
    pub fn randn_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        sampled(shape, || ElT::sample_normal(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_c64_in_unit_square() {
        let a: NdArray<c64> = NdArray::random(&[2, 3]);
        assert_eq!(a.len(), 6);
        for v in a.data() {
            assert!((0.0..1.0).contains(&v.re), "real part {} not in [0, 1)", v.re);
            assert!((0.0..1.0).contains(&v.im), "imaginary part {} not in [0, 1)", v.im);
        }
    }

    #[test]
    fn test_random_reproducible() {
        let a: NdArray<f64> = NdArray::random_with_rng(&[3, 4], &mut StdRng::seed_from_u64(12345));
        let b: NdArray<f64> = NdArray::random_with_rng(&[3, 4], &mut StdRng::seed_from_u64(12345));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_scalar_and_empty() {
        let s: NdArray<f64> = NdArray::random(&[]);
        assert_eq!(s.len(), 1);

        let e: NdArray<f64> = NdArray::random(&[3, 0]);
        assert!(e.is_empty());
        assert_eq!(e.shape(), &[3, 0]);
    }

    #[test]
    fn test_randn_moments() {
        let a: NdArray<f64> = NdArray::randn_with_rng(&[1000], &mut StdRng::seed_from_u64(1));
        let mean = a.data().iter().sum::<f64>() / 1000.0;
        let var = a.data().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 1000.0;
        assert!(mean.abs() < 0.2, "mean {mean} too far from 0");
        assert!((var - 1.0).abs() < 0.3, "variance {var} too far from 1");
    }

    #[test]
    fn test_randn_c64_unit_power() {
        let a: NdArray<c64> = NdArray::randn_with_rng(&[2000], &mut StdRng::seed_from_u64(3));
        let power = a.data().iter().map(|z| z.re * z.re + z.im * z.im).sum::<f64>() / 2000.0;
        assert!((power - 1.0).abs() < 0.2, "mean power {power} too far from 1");
    }
}
