//! Numeric component types of vectors.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

/// Trait for primitive numeric types usable as vector components.
///
/// Implemented for all primitive integer types as well as `f32` and `f64`.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// Returns whether `self` is NaN. Always false for integer types.
    fn is_nan(self) -> bool;

    /// Converts `self` to `f32`, rounding or saturating as with `as`.
    fn to_f32(self) -> f32;

    /// Multiplies `self` by the single-precision factor `f`.
    ///
    /// Integers are converted to `f32`, multiplied, and truncated back
    /// toward zero. `f64` values are multiplied by `f` widened to `f64`,
    /// so the precision of the product is limited by that of `f`.
    ///
    /// # Examples
    /// ```
    /// use lumen_core::math::Scalar;
    ///
    /// assert_eq!(7i32.mul_f32(0.5), 3);
    /// assert_eq!((-7i32).mul_f32(0.5), -3);
    /// assert_eq!(2.0f64.mul_f32(0.1), 2.0 * 0.1f32 as f64);
    /// ```
    fn mul_f32(self, f: f32) -> Self;
}

/// Trait for scalar types that have an additive inverse.
pub trait Signed: Scalar + Neg<Output = Self> {
    /// Returns the absolute value of `self`.
    ///
    /// For integers, `MIN.abs()` overflows as with the inherent method.
    fn abs(self) -> Self;
}

macro_rules! impl_int {
    ($($t:ty),+) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;

            #[inline]
            fn is_nan(self) -> bool {
                false
            }
            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }
            #[inline]
            fn mul_f32(self, f: f32) -> Self {
                (self as f32 * f) as Self
            }
        }
    )+};
}

macro_rules! impl_signed_int {
    ($($t:ty),+) => {$(
        impl Signed for $t {
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    )+};
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_signed_int!(i8, i16, i32, i64, isize);

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
    #[inline]
    fn mul_f32(self, f: f32) -> Self {
        self * f
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
    #[inline]
    fn mul_f32(self, f: f32) -> Self {
        self * f as f64
    }
}

impl Signed for f32 {
    #[inline]
    fn abs(self) -> Self {
        // Clear the sign bit; also maps -0.0 to 0.0 and keeps NaN a NaN
        f32::from_bits(self.to_bits() & !(1 << 31))
    }
}

impl Signed for f64 {
    #[inline]
    fn abs(self) -> Self {
        f64::from_bits(self.to_bits() & !(1 << 63))
    }
}
