//! Approximate equality for floating-point results.
//!
//! Few results computed by this crate are exactly representable, so tests and callers compare
//! them with [`assert_approx_eq!`][crate::assert_approx_eq] or through the [`ApproxEq`] trait.
//!
//! Tolerances are always given as a [`Scalar`], regardless of the compared type: a [`Vec3`] is
//! approximately equal to another if each of its components is.
//!
//! [`Vec3`]: crate::Vec3

mod impls;

use std::{fmt, panic::Location};

use crate::Scalar;

/// Absolute tolerance used when an assertion is not configured.
pub const DEFAULT_ABS_TOLERANCE: Scalar = Scalar::EPSILON;
/// Relative tolerance used when an assertion is not configured.
pub const DEFAULT_REL_TOLERANCE: Scalar = Scalar::EPSILON;

/// Component-wise approximate comparison.
///
/// See <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
/// for why there are three different comparisons.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Returns `true` if no component differs from its counterpart by more than `tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Scalar) -> bool;

    /// Returns `true` if no component differs from its counterpart by more than `tolerance` times
    /// the larger magnitude of the two.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Scalar) -> bool;

    /// Returns `true` if at most `ulps` representable values lie between each component and its
    /// counterpart.
    ///
    /// Components with different signs only compare equal if both are zero. NaN compares unequal
    /// to everything.
    fn ulps_diff_eq(&self, other: &Rhs, ulps: u32) -> bool;
}

#[derive(Clone, Copy, Default)]
struct Tolerances {
    abs: Option<Scalar>,
    rel: Option<Scalar>,
    ulps: Option<u32>,
}

impl Tolerances {
    const DEFAULT: Self = Self {
        abs: Some(DEFAULT_ABS_TOLERANCE),
        rel: Some(DEFAULT_REL_TOLERANCE),
        ulps: None,
    };

    fn is_unset(&self) -> bool {
        self.abs.is_none() && self.rel.is_none() && self.ulps.is_none()
    }

    /// Any configured comparison succeeding is enough.
    fn accepts<T: ApproxEq + ?Sized>(&self, left: &T, right: &T) -> bool {
        self.abs.map_or(false, |tol| left.abs_diff_eq(right, tol))
            || self.rel.map_or(false, |tol| left.rel_diff_eq(right, tol))
            || self.ulps.map_or(false, |ulps| left.ulps_diff_eq(right, ulps))
    }
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the guard is dropped at the end of the statement, which leaves room
/// to pick the comparison first:
///
/// ```
/// # use mmath::*;
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.001)).abs(0.01);
/// assert_approx_eq!(1000.0, 1001.0).rel(0.001).abs(0.1);
/// ```
///
/// Calling several of [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`] makes the
/// values equal if *any* of the comparisons succeeds. Calling none of them compares with
/// [`DEFAULT_ABS_TOLERANCE`] and [`DEFAULT_REL_TOLERANCE`].
pub struct Asserter<'a, T: ApproxEq + fmt::Debug> {
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    tolerances: Tolerances,
    location: &'static Location<'static>,
    message: Option<fmt::Arguments<'a>>,
}

impl<'a, T: ApproxEq + fmt::Debug> Asserter<'a, T> {
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            tolerances: Tolerances::default(),
            location: Location::caller(),
            message,
        }
    }

    /// Accepts an absolute difference of up to `tolerance` per component.
    ///
    /// Use this for values close to zero, such as components of a rotated unit vector.
    pub fn abs(&mut self, tolerance: Scalar) -> &mut Self {
        self.tolerances.abs = Some(tolerance);
        self
    }

    /// Accepts a difference of up to `tolerance` times the larger magnitude per component.
    ///
    /// A relative tolerance below 1.0 never matches a non-zero value against 0.0.
    pub fn rel(&mut self, tolerance: Scalar) -> &mut Self {
        self.tolerances.rel = Some(tolerance);
        self
    }

    /// Accepts up to `ulps` representable values between each pair of components.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.tolerances.ulps = Some(ulps);
        self
    }
}

impl<T: ApproxEq + fmt::Debug> Drop for Asserter<'_, T> {
    // The location is taken in `new`, because `#[track_caller]` has no effect on `drop`.
    fn drop(&mut self) {
        let tolerances = if self.tolerances.is_unset() {
            Tolerances::DEFAULT
        } else {
            self.tolerances
        };

        if tolerances.accepts(self.left, self.right) != self.expect_equal {
            fail(
                self.left,
                self.right,
                self.expect_equal,
                self.location,
                self.message.take(),
            );
        }
    }
}

#[cold]
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    location: &Location<'_>,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_equal { "≈" } else { "!≈" };
    let message = message.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("approximate assertion `left {op} right` failed at {location}{message}\n  left: {left:?}\n right: {right:?}");
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Like [`assert_eq!`], an optional format string and arguments can follow the two expressions.
/// The returned [`Asserter`] selects the comparison.
///
/// # Examples
///
/// ```
/// # use mmath::*;
/// let one: Scalar = (0..10).map(|_| 0.1).sum();
/// assert_approx_eq!(one, 1.0).abs(1e-6);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + Scalar::EPSILON).ulps(1);
///
/// let v = Quat::from_rotation_z(consts::FRAC_PI_2).rotate(Vec3::X);
/// assert_approx_eq!(v, Vec3::Y, "rotated {:?}", Vec3::X).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, true, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            true,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use mmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Vec2::X, Vec2::Y);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, false, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            false,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
