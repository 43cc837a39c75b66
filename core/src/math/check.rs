//! Contract checks shared by the vector types.
//!
//! A contract violation, such as constructing a vector with a NaN component
//! or dividing a vector by zero, is a defect in the calling code rather than
//! a recoverable condition. In *strict* builds, that is, builds with debug
//! assertions enabled or with the `strict` feature, violations panic before
//! a corrupted value can be produced. In other builds the checks compile
//! out and the result of a violating operation is unspecified (though never
//! undefined behavior).
//!
//! Index bounds are the exception: an out-of-range component index always
//! panics, as there is no component to return a reference to.

use core::fmt::Debug;

use crate::math::scalar::Scalar;

/// Whether contract checks are active in this build.
pub const STRICT: bool = cfg!(any(debug_assertions, feature = "strict"));

/// Asserts `$cond` if [`STRICT`] is true, otherwise does nothing.
macro_rules! contract {
    ($cond:expr, $($msg:tt)+) => {
        if $crate::math::check::STRICT {
            assert!($cond, $($msg)+);
        }
    };
}

/// Trait for values that may violate the no-NaN invariant.
pub trait Validate: Debug + Sized {
    /// Returns whether any component of `self` is NaN.
    fn has_nans(&self) -> bool;

    /// Returns `self` unchanged after checking that it has no NaNs.
    ///
    /// # Panics
    /// In strict builds, if `self.has_nans()`.
    #[inline]
    fn validated(self) -> Self {
        contract!(!self.has_nans(), "NaN component in {:?}", self);
        self
    }
}

/// Checks that neither operand of a binary operation has NaNs.
///
/// # Panics
/// In strict builds, if either `lhs` or `rhs` has NaNs.
#[inline]
pub fn check_operands<V: Validate>(op: &str, lhs: &V, rhs: &V) {
    contract!(
        !lhs.has_nans() && !rhs.has_nans(),
        "NaN operand to {op}: {lhs:?}, {rhs:?}"
    );
}

/// Checks that a scaling factor is not NaN.
///
/// # Panics
/// In strict builds, if `s` is NaN.
#[inline]
pub fn check_scalar<T: Scalar>(s: T) {
    contract!(!s.is_nan(), "NaN scale factor");
}

/// Checks that a divisor is nonzero.
///
/// # Panics
/// In strict builds, if `s` equals zero.
#[inline]
pub fn check_divisor<T: Scalar>(s: T) {
    contract!(s != T::ZERO, "vector division by zero");
}

/// Panics with a message reporting an out-of-range component index.
#[cold]
#[inline(never)]
pub fn index_out_of_range(i: usize, dim: usize) -> ! {
    panic!("component index out of range: {i} (dimension {dim})")
}
