//! Vector utilities: free functions, constructor helpers, type aliases, and
//! conversions from other geometric types.
//!
//! The vector types themselves are defined in the [`vec2`][super::vec2] and
//! [`vec3`][super::vec3] modules and re-exported here.

use core::ops;

use crate::math::scalar::{Scalar, Signed};

pub use crate::math::{vec2::Vector2, vec3::Vector3};

//
// Traits and types
//

/// Trait for geometric values that can be explicitly converted to a vector.
///
/// Points, normals, and other vector-like types implement this to opt in
/// to conversion via [`Vector2::from_geom`] or [`Vector3::from_geom`].
/// The conversion must be explicit, as a point is not a displacement and
/// should not silently become one.
///
/// # Examples
/// ```
/// use lumen_core::math::{ToVector, Vector3, vec3};
///
/// struct Point3 { x: f32, y: f32, z: f32 }
///
/// impl ToVector<Vector3<f32>> for Point3 {
///     fn to_vector(&self) -> Vector3<f32> {
///         vec3(self.x, self.y, self.z)
///     }
/// }
///
/// let p = Point3 { x: 1.0, y: 2.0, z: 3.0 };
/// assert_eq!(Vector3::from_geom(&p), vec3(1.0, 2.0, 3.0));
/// ```
pub trait ToVector<V> {
    /// Returns the vector corresponding to `self`.
    fn to_vector(&self) -> V;
}

/// 2<sup>64</sup>. With [`TWO_POW_NEG_64`], used to rescale `f32` vectors
/// whose squared length is not a normal number.
pub(crate) const TWO_POW_64: f32 = f32::from_bits(0x5f80_0000);
/// 2<sup>-64</sup>.
pub(crate) const TWO_POW_NEG_64: f32 = f32::from_bits(0x1f80_0000);

/// A 2-vector with `i32` components.
pub type Vector2i = Vector2<i32>;
/// A 2-vector with `f32` components.
pub type Vector2f = Vector2<f32>;
/// A 3-vector with `i32` components.
pub type Vector3i = Vector3<i32>;
/// A 3-vector with `f32` components.
pub type Vector3f = Vector3<f32>;

//
// Free functions
//

/// Returns a 2-vector with components `x` and `y`.
///
/// Shorthand for [`Vector2::new`].
#[inline]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vector2<T> {
    Vector2::new(x, y)
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
///
/// Shorthand for [`Vector3::new`].
#[inline]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector3<T> {
    Vector3::new(x, y, z)
}

/// Returns a 2-vector with both components equal to `v`.
#[inline]
pub fn splat2<T: Scalar>(v: T) -> Vector2<T> {
    Vector2::splat(v)
}

/// Returns a 3-vector with all components equal to `v`.
#[inline]
pub fn splat3<T: Scalar>(v: T) -> Vector3<T> {
    Vector3::splat(v)
}

/// Returns the dot product of `a` and `b`.
///
/// # Examples
/// ```
/// use lumen_core::math::{dot, vec3};
///
/// assert_eq!(dot(&vec3(1, 0, 0), &vec3(0, 1, 0)), 0);
/// assert_eq!(dot(&vec3(1, 2, 3), &vec3(4, 5, 6)), 32);
/// ```
#[inline]
pub fn dot<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    a.dot(b)
}

/// Returns `v` with the absolute value of each component.
#[inline]
pub fn abs<T: Signed>(v: &Vector3<T>) -> Vector3<T> {
    v.abs()
}

/// Returns the absolute value of the dot product of `a` and `b`.
///
/// Useful with normals, whose orientation relative to another
/// vector is often irrelevant.
#[inline]
pub fn abs_dot<T: Signed>(a: &Vector3<T>, b: &Vector3<T>) -> T {
    a.abs_dot(b)
}

//
// Foreign trait impls
//

/// Implements `scalar * vector` for each of the given scalar types.
macro_rules! impl_scalar_mul {
    ($($t:ty),+) => {$(
        impl ops::Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;
            #[inline]
            fn mul(self, v: Vector2<$t>) -> Vector2<$t> {
                v.scale(self)
            }
        }
        impl ops::Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline]
            fn mul(self, v: Vector3<$t>) -> Vector3<$t> {
                v.scale(self)
            }
        }
    )+};
}

impl_scalar_mul!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

//
// Local trait impls
//

impl<T: Copy> ToVector<Vector2<T>> for [T; 2] {
    #[inline]
    fn to_vector(&self) -> Vector2<T> {
        let [x, y] = *self;
        Vector2 { x, y }
    }
}

impl<T: Copy> ToVector<Vector3<T>> for [T; 3] {
    #[inline]
    fn to_vector(&self) -> Vector3<T> {
        let [x, y, z] = *self;
        Vector3 { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::rand::{DefaultRng, Distrib, Uniform};
    use crate::{assert_approx_eq, math::ApproxEq};

    use super::*;

    const COUNT: usize = 1000;

    fn vectors3() -> impl Iterator<Item = Vector3f> {
        Uniform(splat3(-100.0f32)..splat3(100.0))
            .iter(DefaultRng::default())
            .take(COUNT)
    }

    fn scalars() -> impl Iterator<Item = f32> {
        Uniform(-10.0f32..10.0)
            .iter(DefaultRng::from_seed(0xDEAD_BEEF))
            .take(COUNT)
    }

    #[test]
    fn helpers_and_aliases() {
        let v: Vector2i = vec2(1, 2);
        assert_eq!(v, Vector2::new(1, 2));
        let v: Vector3f = vec3(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(splat2(7u16), vec2(7, 7));
        assert_eq!(splat3(-1i64), vec3(-1, -1, -1));
    }

    #[test]
    fn free_functions() {
        let a = vec3(1, -2, 3);
        let b = vec3(-4, 5, 6);
        assert_eq!(dot(&a, &b), 4);
        assert_eq!(dot(&a, &b), a.dot(&b));
        assert_eq!(abs(&a), vec3(1, 2, 3));
        assert_eq!(abs_dot(&a, &vec3(-1, 0, 0)), 1);
    }

    #[test]
    fn axes_are_orthogonal() {
        let x = Vector3i::new(1, 0, 0);
        let y = Vector3i::new(0, 1, 0);
        assert_eq!(dot(&x, &y), 0);
    }

    #[test]
    fn array_to_vector() {
        assert_eq!([1, 2].to_vector(), vec2(1, 2));
        assert_eq!([1.0, 2.0, 3.0].to_vector(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn scalar_mul_commutes() {
        for (v, s) in vectors3().zip(scalars()) {
            assert_eq!(s * v, v * s);
            let w = Vector2::new(v.x, v.y);
            assert_eq!(s * w, w * s);
        }
        assert_eq!(3u8 * vec2(2, 5), vec2(6, 15));
        assert_eq!(0.5f64 * vec3(2.0, 4.0, -8.0), vec3(1.0, 2.0, -4.0));
    }

    #[test]
    fn addition_commutes() {
        for (a, b) in vectors3().zip(vectors3().skip(1)) {
            assert_eq!(a + b, b + a);
        }
    }

    #[test]
    fn subtraction_adds_negation() {
        for (a, b) in vectors3().zip(vectors3().skip(1)) {
            assert_eq!(a + (-b), a - b);
        }
    }

    #[test]
    fn unscale_inverts_scale() {
        for (v, s) in vectors3().zip(scalars()) {
            if s.abs() < 0.01 {
                continue;
            }
            assert!(
                ((v * s) / s).approx_eq_eps(&v, &1e-3f32),
                "{v:?} * {s} / {s} != {v:?}"
            );
        }
        let v = vec3(1.0f32, 2.0, 3.0);
        assert_approx_eq!(v * 7.0 / 7.0, v);
    }

    #[test]
    fn dot_with_self_is_length_squared() {
        for v in vectors3() {
            assert_eq!(dot(&v, &v), v.length_squared());
        }
    }

    #[test]
    fn abs_dot_is_abs_of_dot() {
        for (a, b) in vectors3().zip(vectors3().skip(1)) {
            assert_eq!(abs_dot(&a, &b), dot(&a, &b).abs());
        }
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in vectors3() {
            assert_approx_eq!(v.normalize().length(), 1.0, eps = 1e-3);
        }
    }
}
