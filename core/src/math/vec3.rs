//! Three-component vectors.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops;

use crate::math::{
    ApproxEq,
    check::{self, Validate, index_out_of_range},
    scalar::{Scalar, Signed},
    vec::{TWO_POW_64, TWO_POW_NEG_64, ToVector},
};

/// A vector in three dimensions with components of type `T`.
///
/// Like [`Vector2`][crate::math::Vector2], this is a plain value type with
/// exact component-wise equality that never contains NaN components unless
/// its fields are assigned directly.
///
/// # Examples
/// ```
/// use lumen_core::math::{Vector3, vec3};
///
/// let x = vec3(1.0, 0.0, 0.0);
/// let y = Vector3::new(0.0, 1.0, 0.0);
///
/// assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
/// assert_eq!(x.dot(&y), 0.0);
/// assert_eq!((x - y)[1], -1.0);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: T::ZERO, y: T::ZERO, z: T::ZERO }
    }

    /// Returns a vector with components `x`, `y`, and `z`.
    ///
    /// # Panics
    /// In strict builds, if any of the components is NaN.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }.validated()
    }

    /// Returns a vector with all components equal to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Converts a point, normal, or other geometric value to a vector.
    ///
    /// # Panics
    /// In strict builds, if the resulting vector has NaN components.
    #[inline]
    pub fn from_geom<G: ToVector<Self> + ?Sized>(geom: &G) -> Self {
        geom.to_vector().validated()
    }

    /// Returns whether any component of `self` is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Adds `other` to `self` component-wise.
    ///
    /// # Panics
    /// In strict builds, if `self` or `other` has NaN components.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        check::check_operands("+", self, other);
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts `other` from `self` component-wise.
    ///
    /// # Panics
    /// In strict builds, if `self` or `other` has NaN components.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        check::check_operands("-", self, other);
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies each component of `self` by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Divides each component of `self` by `s`.
    ///
    /// As with [`Vector2::unscale`][crate::math::Vector2::unscale], this
    /// multiplies by the `f32` reciprocal of `s`.
    ///
    /// # Panics
    /// In strict builds, if `s` equals zero.
    #[inline]
    pub fn unscale(&self, s: T) -> Self {
        check::check_divisor(s);
        let inv = 1.0 / s.to_f32();
        Self::new(self.x.mul_f32(inv), self.y.mul_f32(inv), self.z.mul_f32(inv))
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both inputs, and its length equals the
    /// area of the parallelogram they span. The operands are in
    /// right-handed order: `x` cross `y` equals `z`.
    ///
    /// For unsigned `T`, this overflows unless the differences of the
    /// component products are non-negative.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the squared length of `self` as an `f32`.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self).to_f32()
    }

    /// Returns the length of `self` as an `f32`.
    ///
    /// This is the square root of [`length_squared`][Self::length_squared],
    /// and thus infinite if the squared length overflows `f32`, as it does
    /// for components larger than about 1.8e19 in magnitude.
    #[inline]
    pub fn length(&self) -> f32 {
        use crate::math::float::f32;
        f32::sqrt(self.length_squared())
    }

    /// Returns the component at index `i`, `x` being at index 0.
    ///
    /// # Panics
    /// If `i` > 2.
    #[inline]
    pub fn index(&self, i: usize) -> T {
        *ops::Index::index(self, i)
    }

    /// Returns a mutable reference to the component at index `i`.
    ///
    /// # Panics
    /// If `i` > 2.
    #[inline]
    pub fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => index_out_of_range(i, 3),
        }
    }
}

impl<T: Signed> Vector3<T> {
    /// Returns the additive inverse of `self`.
    #[inline]
    pub fn negate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Returns `self` with the absolute value of each component.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the absolute value of the dot product of `self` and `other`.
    #[inline]
    pub fn abs_dot(&self, other: &Self) -> T {
        self.dot(other).abs()
    }
}

impl Vector3<f32> {
    /// Returns `self` divided by its length.
    ///
    /// A vector whose squared length overflows to infinity, or falls into
    /// the subnormal range, is first rescaled by a power of two so that its
    /// length can be computed accurately.
    ///
    /// # Panics
    /// In strict builds, if `self` is the zero vector or has an infinite
    /// component (the result would contain NaNs). The squared length is
    /// computed in `f32`, so this includes vectors whose components are all
    /// below about 1e-23 in magnitude: their squares underflow to zero and
    /// the division panics with "vector division by zero".
    #[inline]
    pub fn normalize(&self) -> Self {
        let len_sqr = self.length_squared();
        let finite =
            self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
        if len_sqr == f32::INFINITY && finite {
            self.scale(TWO_POW_NEG_64).normalize()
        } else if 0.0 < len_sqr && len_sqr < f32::MIN_POSITIVE {
            self.scale(TWO_POW_64).normalize()
        } else {
            self.unscale(self.length())
        }
    }
}

impl<T: Scalar> Validate for Vector3<T> {
    #[inline]
    fn has_nans(&self) -> bool {
        Vector3::has_nans(self)
    }
}

impl<T: Scalar> ops::Index<usize> for Vector3<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => index_out_of_range(i, 3),
        }
    }
}

impl<T: Scalar> ops::IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        Vector3::index_mut(self, i)
    }
}

impl_vector_ops!(Vector3);

impl<T: Debug> Debug for Vector3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Vec3")?;
        Debug::fmt(&[&self.x, &self.y, &self.z], f)
    }
}

impl<T: Display> Display for Vector3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    /// Returns a vector with components `x`, `y`, and `z`.
    ///
    /// # Panics
    /// In strict builds, if any of the components is NaN.
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<E, T: Scalar + ApproxEq<T, E>> ApproxEq<Self, E> for Vector3<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.x.approx_eq_eps(&other.x, rel_eps)
            && self.y.approx_eq_eps(&other.y, rel_eps)
            && self.z.approx_eq_eps(&other.z, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::vec::{Vector3f, vec3};

    use super::*;

    mod float {
        use super::*;

        #[test]
        fn zero() {
            assert_eq!(Vector3::<f32>::zero(), vec3(0.0, 0.0, 0.0));
            assert_eq!(Vector3::<f64>::default(), Vector3::zero());
        }

        #[test]
        fn splat() {
            assert_eq!(Vector3::splat(-1.5), vec3(-1.5, -1.5, -1.5));
        }

        #[test]
        fn arithmetic() {
            let v = vec3(1.0, 2.0, 3.0);
            let w = vec3(0.5, -1.0, 2.0);
            assert_eq!(v.add(&w), vec3(1.5, 1.0, 5.0));
            assert_eq!(v + w, vec3(1.5, 1.0, 5.0));
            assert_eq!(v.sub(&w), vec3(0.5, 3.0, 1.0));
            assert_eq!(v - w, vec3(0.5, 3.0, 1.0));
            assert_eq!(v * 2.0, vec3(2.0, 4.0, 6.0));
            assert_eq!(2.0f64 * v, vec3(2.0, 4.0, 6.0));
            assert_eq!(v / 2.0, vec3(0.5, 1.0, 1.5));
            assert_eq!(-v, vec3(-1.0, -2.0, -3.0));
        }

        #[test]
        fn compound_assignment() {
            let mut v = vec3(1.0, 2.0, 3.0);
            v += vec3(1.0, 1.0, 1.0);
            v -= vec3(0.0, 0.0, 4.0);
            assert_eq!(v, vec3(2.0, 3.0, 0.0));
            v *= -1.0;
            v /= 0.5;
            assert_eq!(v, vec3(-4.0, -6.0, -0.0));
        }

        #[test]
        fn length() {
            let v = vec3(3.0, 0.0, 4.0);
            assert_eq!(v.length_squared(), 25.0);
            assert_eq!(v.length(), 5.0);
            assert_eq!(Vector3f::new(3.0, 4.0, 0.0).length(), 5.0);
            assert_eq!(Vector3::<f32>::zero().length(), 0.0);
        }

        #[test]
        fn length_out_of_normal_range() {
            let len = vec3(0.0, 1e-21f32, 0.0).length();
            assert!(0.999e-21 < len && len < 1.001e-21, "{len}");
            assert_eq!(vec3(1e20f32, 0.0, 0.0).length(), f32::INFINITY);
        }

        #[test]
        fn dot_product() {
            let v = vec3(1.0, 2.0, 3.0);
            assert_eq!(v.dot(&v), v.length_squared() as f64);
            assert_eq!(v.dot(&vec3(-3.0, 0.0, 1.0)), 0.0);
            assert_eq!(v.abs_dot(&vec3(-1.0, -1.0, -1.0)), 6.0);
        }

        #[test]
        fn cross_product() {
            let x = vec3(1.0, 0.0, 0.0);
            let y = vec3(0.0, 1.0, 0.0);
            let z = vec3(0.0, 0.0, 1.0);
            assert_eq!(x.cross(&y), z);
            assert_eq!(y.cross(&z), x);
            assert_eq!(z.cross(&x), y);
            assert_eq!(y.cross(&x), -z);

            let v = vec3(1.0, 2.0, 3.0);
            let w = vec3(-2.0, 0.5, 4.0);
            let c = v.cross(&w);
            assert_eq!(c.dot(&v), 0.0);
            assert_eq!(c.dot(&w), 0.0);
            assert_eq!(v.cross(&v), Vector3::zero());
        }

        #[test]
        fn normalize() {
            let v = vec3(0.0f32, 3.0, -4.0).normalize();
            assert_approx_eq!(v, vec3(0.0, 0.6, -0.8));
            assert_approx_eq!(v.length(), 1.0);
        }

        #[test]
        fn normalize_huge() {
            let v = vec3(1e20f32, 0.0, 0.0).normalize();
            assert_approx_eq!(v, vec3(1.0, 0.0, 0.0));
            let v = Vector3::splat(f32::MAX).normalize();
            assert_approx_eq!(v, Vector3::splat(0.57735026));
        }

        #[test]
        fn normalize_tiny() {
            let v = vec3(0.0f32, 3e-21, -4e-21).normalize();
            assert_approx_eq!(v, vec3(0.0, 0.6, -0.8));
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN component"]
        fn normalize_infinite() {
            let _ = vec3(f32::INFINITY, 1.0, 0.0).normalize();
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "vector division by zero"]
        fn normalize_underflowing() {
            let _ = vec3(1e-30f32, 0.0, 1e-30).normalize();
        }

        #[test]
        fn absolute_value() {
            assert_eq!(vec3(-1.0, 2.0, -0.5).abs(), vec3(1.0, 2.0, 0.5));
        }

        #[test]
        fn indexing() {
            let mut v = vec3(1.0, 2.0, 3.0);
            assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
            assert_eq!(v.index(2), 3.0);
            v[2] = -3.0;
            *v.index_mut(0) = 0.0;
            assert_eq!(v, vec3(0.0, 2.0, -3.0));
        }

        #[test]
        #[should_panic = "component index out of range: 3 (dimension 3)"]
        fn index_out_of_range() {
            let _ = vec3(1.0, 2.0, 3.0)[3];
        }

        #[test]
        #[should_panic = "component index out of range: 3 (dimension 3)"]
        fn index_mut_out_of_range() {
            let mut v = vec3(1.0, 2.0, 3.0);
            v[3] = 0.0;
        }

        #[test]
        fn has_nans() {
            let mut v = vec3(1.0, 2.0, 3.0);
            assert!(!v.has_nans());
            v.z = f64::NAN;
            assert!(v.has_nans());
        }

        #[test]
        fn array_conversions() {
            assert_eq!(Vector3::from([1.0, 2.0, 3.0]), vec3(1.0, 2.0, 3.0));
            assert_eq!(<[f64; 3]>::from(vec3(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0]);
            assert_eq!(
                Vector3::from_geom(&[1.0, 2.0, 3.0]),
                vec3(1.0, 2.0, 3.0)
            );
        }

        #[test]
        fn display_and_debug() {
            let v = vec3(1.0, -2.5, 0.0);
            assert_eq!(format!("{v}"), "[1, -2.5, 0]");
            assert_eq!(format!("{v:?}"), "Vec3[1.0, -2.5, 0.0]");
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN component"]
        fn new_with_nan() {
            Vector3::new(0.0, f32::NAN, 0.0);
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN component"]
        fn splat_nan() {
            Vector3::splat(f64::NAN);
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN operand to -"]
        fn sub_nan_operand() {
            let v = Vector3 { x: 0.0, y: 0.0, z: f32::NAN };
            let _ = vec3(1.0, 1.0, 1.0) - v;
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN component"]
        fn scale_by_nan() {
            let _ = vec3(1.0, 1.0, 1.0) * f32::NAN;
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "NaN component"]
        fn infinity_times_zero() {
            let _ = vec3(f32::INFINITY, 1.0, 1.0) * 0.0;
        }

        #[test]
        #[cfg_attr(not(any(debug_assertions, feature = "strict")), ignore)]
        #[should_panic = "vector division by zero"]
        fn divide_by_zero() {
            let mut v = vec3(1.0, 1.0, 1.0);
            v /= 0.0;
        }
    }

    mod int {
        use super::*;

        #[test]
        fn arithmetic() {
            let v = vec3(1, 2, 3);
            assert_eq!(v + vec3(1, 1, 1), vec3(2, 3, 4));
            assert_eq!(v - vec3(1, 1, 1), vec3(0, 1, 2));
            assert_eq!(v * -2, vec3(-2, -4, -6));
            assert_eq!(-2i32 * v, vec3(-2, -4, -6));
            assert_eq!(vec3(9, -9, 4) / 2, vec3(4, -4, 2));
        }

        #[test]
        fn cross_is_orthogonal() {
            let v = vec3(1, -2, 3);
            let w = vec3(4, 5, -6);
            let c = v.cross(&w);
            assert_eq!(c, vec3(-3, 18, 13));
            assert_eq!(c.dot(&v), 0);
            assert_eq!(c.dot(&w), 0);
        }

        #[test]
        fn length() {
            assert_eq!(vec3(2, 3, 6).length_squared(), 49.0);
            assert_eq!(vec3(2, 3, 6).length(), 7.0);
        }

        #[test]
        fn i64_components() {
            let v = Vector3::<i64>::new(1 << 40, 0, -1);
            assert_eq!(v.abs(), Vector3::new(1 << 40, 0, 1));
            assert_eq!(v.dot(&vec3(0, 5, 5)), -5);
        }
    }
}
