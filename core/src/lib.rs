//! Core functionality of the `lumen` project.
//!
//! Provides generic two- and three-dimensional vector types, [`Vector2`] and
//! [`Vector3`], intended as the displacement and direction layer of a
//! geometry or rendering stack. Vectors are small `Copy` values
//! parameterized by their component type, which may be any primitive
//! integer or floating-point type.
//!
//! ```
//! use lumen_core::prelude::*;
//!
//! let a = vec3(1.0f32, 2.0, 3.0);
//! let b = Vector3::new(-1.0, 0.5, 0.0);
//!
//! assert_eq!(a + b, vec3(0.0, 2.5, 3.0));
//! assert_eq!(2.0 * a, a * 2.0);
//! assert_eq!(dot(&a, &b), 0.0);
//! ```
//!
//! # Contracts
//!
//! Vectors never contain NaN components, operations never receive NaN
//! operands, and vectors are never divided by zero. Violating these
//! preconditions is a bug in the calling code. In *strict* builds (with
//! debug assertions or the `strict` feature enabled), such violations are
//! detected and cause a panic; otherwise the checks are compiled out.
//!
//! The tests of these panics are ignored when the checks are compiled out.
//! To run them against optimized code as well, enable `strict`:
//!
//! ```text
//! cargo test                             # debug, checks on
//! cargo test --release --features strict # optimized, checks on
//! cargo test --release                   # optimized, contract tests ignored
//! ```
//!
//! [`Vector2`]: math::Vector2
//! [`Vector3`]: math::Vector3
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library, such as
//!   `sqrt`, which are not included in `core`.
//!
//!   If this feature is disabled, the crate only depends on `core` and
//!   `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `strict`:
//!   Keeps contract checks enabled in builds without debug assertions.
//!
//! All features are disabled by default. Without any of `std`, `libm`, or
//! `mm`, vector lengths are computed with a `core`-only approximation.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod math;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Scalar, Signed, ToVector, Vector2, Vector2f, Vector2i,
        Vector3, Vector3f, Vector3i, abs, abs_dot, dot, rand::Distrib,
        splat2, splat3, vec2, vec3,
    };
}
