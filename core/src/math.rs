//! Vector algebra and supporting numerics.
//!
//! The main types are the generic [`Vector2`] and [`Vector3`], along with
//! free functions such as [`dot`] and [`abs_dot`] and the common
//! instantiations [`Vector2i`], [`Vector2f`], [`Vector3i`], and
//! [`Vector3f`].
//!
//! Vectors enforce a few preconditions, most importantly that they never
//! contain NaN components. Violations are caller defects and panic in
//! strict builds; see the [`check`] module for details.
//!
//! Supporting modules provide [approximate comparison][approx],
//! [floating-point compatibility][float] for `no_std` targets, and
//! [pseudo-random sampling][rand] of scalars and vectors.

pub use {
    approx::ApproxEq,
    check::{STRICT, Validate},
    scalar::{Scalar, Signed},
    vec::{
        ToVector, Vector2, Vector2f, Vector2i, Vector3, Vector3f, Vector3i,
        abs, abs_dot, dot, splat2, splat3, vec2, vec3,
    },
};

/// Implements the operator traits of a vector type in terms of its
/// inherent arithmetic methods.
///
/// `Index` and `IndexMut` are implemented separately by each type.
macro_rules! impl_vector_ops {
    ($vec:ident) => {
        impl<T: Scalar> ops::Add for $vec<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $vec::add(&self, &rhs)
            }
        }
        impl<T: Scalar> ops::Sub for $vec<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $vec::sub(&self, &rhs)
            }
        }
        impl<T: Scalar> ops::Mul<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn mul(self, s: T) -> Self {
                self.scale(s)
            }
        }
        impl<T: Scalar> ops::Div<T> for $vec<T> {
            type Output = Self;
            #[inline]
            fn div(self, s: T) -> Self {
                self.unscale(s)
            }
        }
        impl<T: Signed> ops::Neg for $vec<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                self.negate()
            }
        }

        impl<T: Scalar> ops::AddAssign for $vec<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = $vec::add(self, &rhs);
            }
        }
        impl<T: Scalar> ops::SubAssign for $vec<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $vec::sub(self, &rhs);
            }
        }
        impl<T: Scalar> ops::MulAssign<T> for $vec<T> {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                check::check_scalar(s);
                *self = self.scale(s);
            }
        }
        impl<T: Scalar> ops::DivAssign<T> for $vec<T> {
            #[inline]
            fn div_assign(&mut self, s: T) {
                *self = self.unscale(s);
            }
        }
    };
}

pub mod approx;
pub mod check;
pub mod float;
pub mod rand;
pub mod scalar;
pub mod vec;
pub mod vec2;
pub mod vec3;
