//! Random vector generation backed by the [`fastrand`] crate.
//!
//! Only available when the `fastrand` Cargo feature is enabled.

use std::ops::{Range, RangeBounds};

use fastrand::Rng;

use crate::Vector;

impl<const N: usize> Vector<f32, N> {
    /// Generates a vector with every element drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut Rng) -> Self {
        Self::from_fn(|_| rng.f32())
    }

    /// Generates a vector with every element drawn uniformly from `range`.
    pub fn random_range(rng: &mut Rng, range: Range<f32>) -> Self {
        Self::from_fn(|_| range.start + rng.f32() * (range.end - range.start))
    }
}

impl<const N: usize> Vector<f64, N> {
    /// Generates a vector with every element drawn uniformly from `[0, 1)`.
    pub fn random(rng: &mut Rng) -> Self {
        Self::from_fn(|_| rng.f64())
    }

    /// Generates a vector with every element drawn uniformly from `range`.
    pub fn random_range(rng: &mut Rng, range: Range<f64>) -> Self {
        Self::from_fn(|_| range.start + rng.f64() * (range.end - range.start))
    }
}

impl<const N: usize> Vector<i32, N> {
    /// Generates a vector with every element drawn uniformly from `range`.
    pub fn random_range<R: RangeBounds<i32> + Clone>(rng: &mut Rng, range: R) -> Self {
        Self::from_fn(|_| rng.i32(range.clone()))
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use crate::{Vec3f, Vector};

    #[test]
    fn ranges_are_respected() {
        let mut rng = Rng::with_seed(0x7ec4);
        for _ in 0..100 {
            let v = Vec3f::random(&mut rng);
            assert!(v.elementwise_ge(Vector::ZERO) && v.elementwise_lt(Vector::splat(1.0)));

            let v = Vec3f::random_range(&mut rng, -2.0..3.0);
            assert!(v.elementwise_ge(Vector::splat(-2.0)) && v.elementwise_lt(Vector::splat(3.0)));

            let v = Vector::<i32, 4>::random_range(&mut rng, -5..=5);
            assert!(v.elementwise_ge(Vector::splat(-5)) && v.elementwise_le(Vector::splat(5)));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = Vec3f::random(&mut Rng::with_seed(42));
        let b = Vec3f::random(&mut Rng::with_seed(42));
        assert_eq!(a, b);
    }
}
