//! Approximate equality of scalars and vectors.
//!
//! Vector equality (`==`) is exact. Results that went through rounding, such
//! as a vector scaled and then unscaled, should instead be compared with
//! [`ApproxEq`] or the [`assert_approx_eq`][crate::assert_approx_eq] macro.

use crate::math::scalar::Signed;

/// Trait for testing approximate equality.
///
/// Two values are considered approximately equal if their absolute
/// difference is at most some small value, "epsilon", scaled by the
/// magnitude of the left operand (or one, whichever is greater). A relative
/// epsilon works for both small and large magnitudes, which a fixed one
/// does not.
///
/// Infinities and NaNs are never approximately equal to anything.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = Signed::abs(self - other);
        diff <= *rel_eps * Signed::abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            5e-3
        }
    }
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = Signed::abs(self - other);
        diff <= *rel_eps * Signed::abs(*self).max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-12
    }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use lumen_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// Vectors are compared component-wise:
/// ```
/// # use lumen_core::assert_approx_eq;
/// use lumen_core::math::vec3;
///
/// let v = vec3(1.0f32, 2.0, 3.0);
/// assert_approx_eq!(v * 10.0 / 10.0, v);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use lumen_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use lumen_core::assert_approx_eq;
/// assert_approx_eq!(1.0, 1.1, eps = 0.001, "{} is too far off", 1.1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}
