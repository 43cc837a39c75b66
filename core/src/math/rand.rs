//! Pseudo-random sampling of scalars and vectors.
//!
//! Used to drive property checks and benchmarks with reproducible inputs.

use core::ops::Range;

use crate::math::vec::{Vector2, Vector3};

//
// Traits and types
//

/// The default pseudo-random number generator.
pub type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the elements of the sample space of `Self`, also called
    /// "outcomes".
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift64 has a period of 2<sup>64</sup>-1: it yields every number in
/// the interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of values in the given half-open range.
///
/// Vector ranges are sampled component-wise, yielding vectors uniformly
/// distributed within the axis-aligned box spanned by the range endpoints.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// A uniform distribution of 3-vectors inside the (closed) unit ball.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnitBall;

/// Iterator returned by the [`Distrib::iter`] method.
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to initialize the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// Two `Xorshift64` instances generate the same sequence of pseudo-random
    /// numbers if and only if they were created with the same seed.
    ///
    /// # Examples
    /// ```
    /// # use lumen_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// let mut h = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), h.next_bits());
    /// ```
    ///
    /// # Panics
    ///
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns 64 bits of pseudo-randomness.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<i32> {
    type Sample = i32;

    /// Returns a uniformly distributed `i32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> i32 {
        let bits = rng.next_bits() as i32;
        // TODO rem introduces slight bias
        bits.rem_euclid(self.0.end - self.0.start) + self.0.start
    }
}

impl Distrib for Uniform<f32> {
    type Sample = f32;

    /// Returns a uniformly distributed `f32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f32 {
        let Range { start, end } = self.0;
        // Bit repr of a random f32 in range 1.0..2.0
        let bits = 127 << 23 | rng.next_bits() >> 41;
        let unit = f32::from_bits(bits as u32) - 1.0;
        unit * (end - start) + start
    }
}

impl Distrib for Uniform<f64> {
    type Sample = f64;

    /// Returns a uniformly distributed `f64` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f64 {
        let Range { start, end } = self.0;
        // Bit repr of a random f64 in range 1.0..2.0
        let bits = 1023 << 52 | rng.next_bits() >> 12;
        let unit = f64::from_bits(bits) - 1.0;
        unit * (end - start) + start
    }
}

impl<T> Distrib for Uniform<Vector2<T>>
where
    T: Copy,
    Uniform<T>: Distrib<Sample = T>,
{
    type Sample = Vector2<T>;

    /// Returns a vector uniformly distributed within the rectangle
    /// bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Vector2<T> {
        let Range { start, end } = self.0;
        Vector2 {
            x: Uniform(start.x..end.x).sample(rng),
            y: Uniform(start.y..end.y).sample(rng),
        }
    }
}

impl<T> Distrib for Uniform<Vector3<T>>
where
    T: Copy,
    Uniform<T>: Distrib<Sample = T>,
{
    type Sample = Vector3<T>;

    /// Returns a vector uniformly distributed within the box
    /// bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Vector3<T> {
        let Range { start, end } = self.0;
        Vector3 {
            x: Uniform(start.x..end.x).sample(rng),
            y: Uniform(start.y..end.y).sample(rng),
            z: Uniform(start.z..end.z).sample(rng),
        }
    }
}

impl Distrib for UnitBall {
    type Sample = Vector3<f32>;

    /// Returns a vector uniformly distributed within the unit ball.
    fn sample(&self, rng: &mut DefaultRng) -> Vector3<f32> {
        let d = Uniform(Vector3::splat(-1.0)..Vector3::splat(1.0));
        loop {
            let v = d.sample(rng);
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }
}
