use std::ops::{Add, Mul, Neg};

use crate::{approx::ApproxEq, Scalar, Vec3};

use super::Quat;

/// Component-wise addition.
impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

/// Negates all four components.
///
/// The result represents the same rotation as `self`.
impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

impl Mul<Scalar> for Quat {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}

/// The Hamilton product.
///
/// The resulting rotation applies `rhs` first, then `self`.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.axis(), rhs.axis());
        let w = self.w() * rhs.w() - a.dot(b);
        let axis = a * rhs.w() + b * self.w() + a.cross(b);
        Self::from_parts(axis, w)
    }
}

/// Rotates a [`Vec3`], same as [`Quat::rotate`].
impl Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl ApproxEq for Quat {
    fn abs_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps)
    }
}
