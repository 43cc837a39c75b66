//! Two-component vectors.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops;

use crate::math::{
    ApproxEq,
    check::{self, Validate, index_out_of_range},
    scalar::{Scalar, Signed},
    vec::{TWO_POW_64, TWO_POW_NEG_64, ToVector},
};

/// A vector in two dimensions with components of type `T`.
///
/// `Vector2` is a plain value type: it is `Copy` whenever `T` is, and
/// equality is exact and component-wise. Vectors created with
/// [`new`][Self::new] or any other checked constructor never contain NaN
/// components; see the [`check`][crate::math::check] module for how this
/// and other preconditions are enforced.
///
/// The arithmetic methods [`add`][Self::add], [`sub`][Self::sub],
/// [`scale`][Self::scale], [`unscale`][Self::unscale], and
/// [`negate`][Self::negate] define the behavior of the corresponding
/// operators `+`, `-`, `*`, `/`, and unary `-`.
///
/// # Examples
/// ```
/// use lumen_core::math::{Vector2, vec2};
///
/// let v = vec2(1.0, -2.0);
/// let w = Vector2::new(3.0, 4.0);
///
/// assert_eq!(v + w, vec2(4.0, 2.0));
/// assert_eq!(w * 2.0, vec2(6.0, 8.0));
/// assert_eq!(w.length_squared(), 25.0);
/// assert_eq!(w.to_string(), "[3, 4]");
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: T::ZERO, y: T::ZERO }
    }

    /// Returns a vector with components `x` and `y`.
    ///
    /// # Panics
    /// In strict builds, if `x` or `y` is NaN.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }.validated()
    }

    /// Returns a vector with both components equal to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// Converts a point or other geometric value to a vector.
    ///
    /// The conversion is explicit and may drop information, such as the
    /// third component of a 3-point.
    ///
    /// # Panics
    /// In strict builds, if the resulting vector has NaN components.
    #[inline]
    pub fn from_geom<G: ToVector<Self> + ?Sized>(geom: &G) -> Self {
        geom.to_vector().validated()
    }

    /// Returns whether either component of `self` is NaN.
    ///
    /// Always false if `T` is an integer type. Vectors whose fields were
    /// assigned directly may contain NaNs; other vectors may not.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Adds `other` to `self` component-wise.
    ///
    /// # Panics
    /// In strict builds, if `self` or `other` has NaN components.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        check::check_operands("+", self, other);
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts `other` from `self` component-wise.
    ///
    /// # Panics
    /// In strict builds, if `self` or `other` has NaN components.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        check::check_operands("-", self, other);
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components of `self` by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Divides both components of `self` by `s`.
    ///
    /// The division is computed as a multiplication by the reciprocal
    /// of `s` in `f32` precision, whatever the type `T`. Integer
    /// components are truncated toward zero.
    ///
    /// # Examples
    /// ```
    /// use lumen_core::math::vec2;
    ///
    /// assert_eq!(vec2(3.0, -1.0) / 2.0, vec2(1.5, -0.5));
    /// assert_eq!(vec2(7, -7) / 2, vec2(3, -3));
    /// ```
    ///
    /// # Panics
    /// In strict builds, if `s` equals zero.
    #[inline]
    pub fn unscale(&self, s: T) -> Self {
        check::check_divisor(s);
        let inv = 1.0 / s.to_f32();
        Self::new(self.x.mul_f32(inv), self.y.mul_f32(inv))
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Returns the perp dot product of `self` and `other`.
    ///
    /// This is the dot product of `self` rotated 90° counter-clockwise
    /// and `other`, and equals the z component of their 3D cross product.
    /// It is positive if `other` is counter-clockwise from `self`.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length of `self` as an `f32`.
    ///
    /// The sum of squares is computed in `T` and then converted.
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
    /// If `i` > 1.
    #[inline]
    pub fn index(&self, i: usize) -> T {
        *ops::Index::index(self, i)
    }

    /// Returns a mutable reference to the component at index `i`.
    ///
    /// # Panics
    /// If `i` > 1.
    #[inline]
    pub fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => index_out_of_range(i, 2),
        }
    }
}

impl<T: Signed> Vector2<T> {
    /// Returns the additive inverse of `self`.
    #[inline]
    pub fn negate(&self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Returns `self` with the absolute value of each component.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Returns the absolute value of the dot product of `self` and `other`.
    #[inline]
    pub fn abs_dot(&self, other: &Self) -> T {
        self.dot(other).abs()
    }
}

impl Vector2<f32> {
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
        let finite = self.x.is_finite() && self.y.is_finite();
        if len_sqr == f32::INFINITY && finite {
            self.scale(TWO_POW_NEG_64).normalize()
        } else if 0.0 < len_sqr && len_sqr < f32::MIN_POSITIVE {
            self.scale(TWO_POW_64).normalize()
        } else {
            self.unscale(self.length())
        }
    }
}

impl<T: Scalar> Validate for Vector2<T> {
    #[inline]
    fn has_nans(&self) -> bool {
        Vector2::has_nans(self)
    }
}

impl<T: Scalar> ops::Index<usize> for Vector2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => index_out_of_range(i, 2),
        }
    }
}

impl<T: Scalar> ops::IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        Vector2::index_mut(self, i)
    }
}

impl_vector_ops!(Vector2);

impl<T: Debug> Debug for Vector2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Vec2")?;
        Debug::fmt(&[&self.x, &self.y], f)
    }
}

impl<T: Display> Display for Vector2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    /// Returns a vector with components `x` and `y`.
    ///
    /// # Panics
    /// In strict builds, if `x` or `y` is NaN.
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<E, T: Scalar + ApproxEq<T, E>> ApproxEq<Self, E> for Vector2<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.x.approx_eq_eps(&other.x, rel_eps)
            && self.y.approx_eq_eps(&other.y, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}
