//! The scalar type and the primitives used on it.
//!
//! All types in this crate store [`Scalar`]s. By default, [`Scalar`] is [`f32`]; enabling the
//! `double` Cargo feature switches it to [`f64`]. The functions in this module forward to the
//! inherent float methods of whichever width is selected, so the rest of the crate never names a
//! concrete float type.

/// The floating-point type used for every component.
#[cfg(not(feature = "double"))]
pub type Scalar = f32;
/// The floating-point type used for every component.
#[cfg(feature = "double")]
pub type Scalar = f64;

/// Mathematical constants for [`Scalar`] (`PI`, `TAU`, `FRAC_PI_2`, ...).
#[cfg(not(feature = "double"))]
pub use std::f32::consts;
/// Mathematical constants for [`Scalar`] (`PI`, `TAU`, `FRAC_PI_2`, ...).
#[cfg(feature = "double")]
pub use std::f64::consts;

/// Returns the square root of `x`, or NaN if `x` is negative.
#[inline]
pub fn sqrt(x: Scalar) -> Scalar {
    x.sqrt()
}

/// Computes the arccosine of `x`, in radians.
#[inline]
pub fn acos(x: Scalar) -> Scalar {
    x.acos()
}

/// Computes the arcsine of `x`, in radians.
#[inline]
pub fn asin(x: Scalar) -> Scalar {
    x.asin()
}

/// Computes the arctangent of `x`, in radians.
#[inline]
pub fn atan(x: Scalar) -> Scalar {
    x.atan()
}

/// Computes the cosine of `x` (in radians).
#[inline]
pub fn cos(x: Scalar) -> Scalar {
    x.cos()
}

/// Computes the sine of `x` (in radians).
#[inline]
pub fn sin(x: Scalar) -> Scalar {
    x.sin()
}

/// Computes the tangent of `x` (in radians).
#[inline]
pub fn tan(x: Scalar) -> Scalar {
    x.tan()
}

/// Returns the smaller of `a` and `b`.
///
/// If one of the arguments is NaN, the other one is returned.
#[inline]
pub fn min(a: Scalar, b: Scalar) -> Scalar {
    a.min(b)
}

/// Returns the larger of `a` and `b`.
///
/// If one of the arguments is NaN, the other one is returned.
#[inline]
pub fn max(a: Scalar, b: Scalar) -> Scalar {
    a.max(b)
}

/// Returns the absolute value of `x`.
#[inline]
pub fn abs(x: Scalar) -> Scalar {
    x.abs()
}

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// # use mmath::*;
/// assert_approx_eq!(radians(180.0), consts::PI).abs(1e-6);
/// ```
#[inline]
pub fn radians(degrees: Scalar) -> Scalar {
    degrees * (consts::PI / 180.0)
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// # use mmath::*;
/// assert_approx_eq!(degrees(consts::FRAC_PI_2), 90.0).abs(1e-4);
/// ```
#[inline]
pub fn degrees(radians: Scalar) -> Scalar {
    radians * (180.0 / consts::PI)
}
