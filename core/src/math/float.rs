//! Floating-point compatibility API.
//!
//! The square root function is unavailable in `no_std` without an external
//! implementation. This module provides it using either `std`, the `libm`
//! crate, or the `micromath` crate, depending on which feature is enabled.
//! As a fallback, it also implements an approximation that only depends
//! on `core`.
//!
//! Callers use the `f32` item of this module, which resolves to whichever
//! implementation is selected:
//! ```
//! use lumen_core::math::float::f32;
//!
//! assert!((f32::sqrt(2.0) - 1.4142135).abs() < 1e-6);
//! ```

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrtf as sqrt;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
}

pub mod fallback {
    use crate::math::float::fast_recip_sqrt;

    /// 2<sup>64</sup>, used to lift subnormal inputs into the normal range.
    const TWO_POW_64: f32 = f32::from_bits(0x5f80_0000);
    /// 2<sup>-32</sup>, the square root of the reciprocal of `TWO_POW_64`.
    const TWO_POW_NEG_32: f32 = f32::from_bits(0x2f80_0000);

    /// Returns the approximate square root of `x`.
    ///
    /// Returns `x` itself if `x` is zero or positive infinity, and NaN if
    /// `x` is negative or NaN. Subnormal inputs are scaled up by an even
    /// power of two before the approximation and the result scaled back
    /// down, as the reciprocal square root estimate is only accurate for
    /// normal numbers.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 || x == f32::INFINITY {
            return x;
        }
        if x < 0.0 || x.is_nan() {
            return f32::NAN;
        }
        if x < f32::MIN_POSITIVE {
            return sqrt(x * TWO_POW_64) * TWO_POW_NEG_32;
        }
        let y = 1.0 / fast_recip_sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // A round of Newton's method
    y * (1.5 - 0.5 * x * y * y)
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;
