use crate::Scalar;

use super::ApproxEq;

// Both widths are covered so that unsuffixed literals, which fall back to `f64`, can be compared
// whichever width `Scalar` is. When the widths differ, the tolerance has been rounded to `f32`
// somewhere along the way, so the bound is widened by that rounding error.
macro_rules! float_impls {
    ($($float:ident: $bits:ident => $bound:ident),+) => {
        $(
            fn $bound(tolerance: Scalar) -> $float {
                let tolerance = tolerance as $float;
                if std::mem::size_of::<Scalar>() == std::mem::size_of::<$float>() {
                    tolerance
                } else {
                    tolerance * (1.0 + f32::EPSILON as $float)
                }
            }

            impl ApproxEq for $float {
                fn abs_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
                    if self.is_finite() && other.is_finite() {
                        (self - other).abs() <= $bound(tolerance)
                    } else {
                        // Infinities only match themselves, NaN matches nothing.
                        self == other
                    }
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
                    if self.is_finite() && other.is_finite() {
                        let magnitude = self.abs().max(other.abs());
                        (self - other).abs() <= magnitude * $bound(tolerance)
                    } else {
                        self == other
                    }
                }

                fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
                    if self.is_nan() || other.is_nan() {
                        false
                    } else if self.is_sign_negative() != other.is_sign_negative() {
                        // Only `-0.0` and `+0.0`.
                        self == other
                    } else {
                        self.to_bits().abs_diff(other.to_bits()) <= $bits::from(ulps)
                    }
                }
            }
        )+
    };
}

float_impls!(f32: u32 => f32_bound, f64: u64 => f64_bound);

impl<T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &T {
    fn abs_diff_eq(&self, other: &U, tolerance: Scalar) -> bool {
        (**self).abs_diff_eq(other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: Scalar) -> bool {
        (**self).rel_diff_eq(other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps: u32) -> bool {
        (**self).ulps_diff_eq(other, ulps)
    }
}

/// Slices of different lengths are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: Scalar) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: Scalar) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps: u32) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.ulps_diff_eq(b, ulps))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn abs_diff_eq(&self, other: &[U; N], tolerance: Scalar) -> bool {
        self[..].abs_diff_eq(&other[..], tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Scalar) -> bool {
        self[..].rel_diff_eq(&other[..], tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps)
    }
}
