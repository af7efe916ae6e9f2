mod ops;
mod view;

use std::fmt;

use crate::{
    scalar::{self, Scalar},
    vec4, Mat3, Mat4, Vec3, Vec4,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are used to represent rotations in 3D space: a rotation
/// by `θ` around the unit axis `a` is stored as `(a·sin(θ/2), cos(θ/2))`. Construction does not
/// enforce unit length; only [`Quat::normalize`] and [`Quat::inverse`] restore it.
///
/// Quaternions are stored like a 4-dimensional vector with an `x`, `y`, `z` and `w` component.
/// [`Quat::as_vec4`] and [`Quat::axis`] copy the components out so the [`Vector`] operations can
/// be applied to them, and [`Quat::from_vec`] turns the result back into a quaternion.
///
/// # Conventions
///
/// Rotations are right-handed. The product `a * b` (the Hamilton product) rotates by `b` first,
/// then by `a`. [`Quat::to_mat3`] produces a matrix for the crate's row-vector convention, so
/// `v * q.to_mat3()` equals `q.rotate(v)`.
///
/// [`Vector`]: crate::Vector
#[derive(Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Quat {
    vec: Vec4,
}

impl Quat {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self { vec: Vec4::W };

    /// Creates a quaternion from a 4-dimensional [`Vec4`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vec4) -> Self {
        Self { vec }
    }

    /// Creates a quaternion from its imaginary components `x`, `y`, `z` and its real part `w`.
    #[inline]
    pub const fn from_components(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from its imaginary part `axis` and its real part `w`.
    #[inline]
    pub fn from_parts(axis: Vec3, w: Scalar) -> Self {
        Self {
            vec: axis.extend(w),
        }
    }

    /// Creates a quaternion rotating by `radians` around `axis`.
    ///
    /// `axis` should have unit length, otherwise the resulting quaternion will not either.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let q = Quat::from_axis_angle(Vec3::Y, consts::FRAC_PI_2);
    /// assert_approx_eq!(q.rotate(Vec3::X), -Vec3::Z).abs(1e-6);
    /// ```
    pub fn from_axis_angle(axis: Vec3, radians: Scalar) -> Self {
        let half = radians * 0.5;
        Self::from_parts(axis * scalar::sin(half), scalar::cos(half))
    }

    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: Scalar) -> Self {
        Self::from_axis_angle(Vec3::X, radians)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: Scalar) -> Self {
        Self::from_axis_angle(Vec3::Y, radians)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: Scalar) -> Self {
        Self::from_axis_angle(Vec3::Z, radians)
    }

    /// Creates a quaternion from the Euler angles `(pitch, yaw, roll)` stored in the X, Y and Z
    /// components of `angles`.
    ///
    /// The result is the fixed half-angle product
    ///
    /// ```text
    /// x = cy·sr·cp − sy·cr·sp
    /// y = cy·cr·sp + sy·sr·cp
    /// z = sy·cr·cp − cy·sr·sp
    /// w = cy·cr·cp + sy·sr·sp
    /// ```
    ///
    /// where `cp`/`sp`, `cy`/`sy` and `cr`/`sr` are the cosine and sine of half the pitch, yaw and
    /// roll angle. With a single non-zero angle, pitch rotates around the Y axis, yaw around Z and
    /// roll around X.
    ///
    /// There is no conversion in the other direction.
    #[doc(alias = "euler")]
    pub fn from_euler(angles: Vec3) -> Self {
        let (cy, sy) = (scalar::cos(angles.y() * 0.5), scalar::sin(angles.y() * 0.5));
        let (cr, sr) = (scalar::cos(angles.z() * 0.5), scalar::sin(angles.z() * 0.5));
        let (cp, sp) = (scalar::cos(angles.x() * 0.5), scalar::sin(angles.x() * 0.5));

        Self::from_components(
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
            cy * cr * cp + sy * sr * sp,
        )
    }

    /// Returns a copy of the 4 components of this quaternion as a [`Vec4`].
    #[inline]
    pub const fn as_vec4(&self) -> Vec4 {
        self.vec
    }

    /// Returns the imaginary part (X, Y and Z) of this quaternion.
    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.vec.truncate()
    }

    /// Returns the dot product of `self` and `other`, treating both as 4-dimensional vectors.
    pub fn dot(&self, other: Quat) -> Scalar {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> Scalar {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> Scalar {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// A quaternion of length zero is returned unchanged.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(|| {
            log::trace!("normalize: zero-length quaternion left unchanged");
            self
        })
    }

    /// Returns a normalized copy of this quaternion, or [`None`] if its length is zero.
    pub fn try_normalize(self) -> Option<Self> {
        self.vec.try_normalize().map(Self::from_vec)
    }

    /// Adds `value` to all four components.
    pub fn add_scalar(self, value: Scalar) -> Self {
        Self::from_vec(self.vec + value)
    }

    /// Returns the conjugate of this quaternion: the imaginary part is negated, `w` is kept.
    ///
    /// For unit quaternions, the conjugate is also the inverse rotation.
    pub fn conjugate(self) -> Self {
        Self::from_parts(-self.axis(), self.w())
    }

    /// Returns the inverse of this quaternion.
    ///
    /// This is the [conjugate][Quat::conjugate], additionally divided by the squared length when
    /// the length is within `1e-5` of one. Quaternions further away from unit length are only
    /// conjugated, so their product with `self` is *not* the identity. Use
    /// [`Quat::checked_inverse`] for the exact inverse of arbitrary quaternions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let q = Quat::from_rotation_x(1.0);
    /// assert_approx_eq!(q * q.inverse(), Quat::IDENTITY).abs(1e-6);
    ///
    /// // Far from unit length: conjugated, not rescaled.
    /// let q = Quat::from_components(0.0, 0.0, 0.0, 2.0);
    /// assert_eq!(q.inverse(), q);
    /// ```
    pub fn inverse(self) -> Self {
        let conjugate = self.conjugate();
        let length = self.length();
        if scalar::abs(length - 1.0) <= 1e-5 {
            conjugate * (1.0 / (length * length))
        } else {
            log::trace!("inverse: length {length} is not close to 1, only conjugating");
            conjugate
        }
    }

    /// Returns the inverse of this quaternion, or [`None`] if its length is zero.
    ///
    /// Unlike [`Quat::inverse`], this always divides the conjugate by the squared length, so
    /// `q * q.checked_inverse()` is the identity for every non-zero `q`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let q = Quat::from_components(0.0, 0.0, 0.0, 2.0);
    /// assert_eq!(q.checked_inverse(), Some(Quat::from_components(0.0, 0.0, 0.0, 0.5)));
    /// assert_eq!(Quat::from_vec(Vec4::ZERO).checked_inverse(), None);
    /// ```
    pub fn checked_inverse(self) -> Option<Self> {
        let length2 = self.length2();
        if length2 == 0.0 {
            return None;
        }
        Some(self.conjugate() * (1.0 / length2))
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Computes the same result as the sandwich product `q·(v, 0)·q⁻¹` without forming the full
    /// quaternion products.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let q = Quat::from_rotation_z(consts::FRAC_PI_2);
    /// assert_approx_eq!(q.rotate(Vec3::X), Vec3::Y).abs(1e-6);
    /// assert_approx_eq!(q * Vec3::Y, -Vec3::X).abs(1e-6);
    /// ```
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let axis = self.axis();
        let t = axis.cross(v) * 2.0;
        v + (t * self.w() + axis.cross(t))
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    #[rustfmt::skip]
    pub fn to_mat3(&self) -> Mat3 {
        let [x, y, z, w] = self.vec.into_array();
        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (xw, yw, zw) = (x * w, y * w, z * w);

        Mat3::from_rows([
            [1.0 - 2.0 * (y2 + z2), 2.0 * (xy + zw),       2.0 * (xz - yw)],
            [2.0 * (xy - zw),       1.0 - 2.0 * (x2 + z2), 2.0 * (yz + xw)],
            [2.0 * (xz + yw),       2.0 * (yz - xw),       1.0 - 2.0 * (x2 + y2)],
        ])
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    ///
    /// The rotation occupies the upper-left 3x3 block, the rest is taken from the identity matrix.
    pub fn to_mat4(&self) -> Mat4 {
        self.to_mat3().resize()
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// If the 4-dimensional dot product of the quaternions is negative, `other` is replaced by its
    /// [inverse][Quat::inverse] and the dot product by its absolute value. When that dot product
    /// is 0.95 or above, the quaternions are close to parallel and the components are linearly
    /// interpolated instead. The result is not renormalized in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let from = Quat::IDENTITY;
    /// let to = Quat::from_rotation_y(1.0);
    /// assert_approx_eq!(from.slerp(to, 0.5), Quat::from_rotation_y(0.5)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Quat, t: Scalar) -> Self {
        let mut dot = self.dot(other);
        let other = if dot < 0.0 {
            dot = -dot;
            other.inverse()
        } else {
            other
        };

        if dot < 0.95 {
            let angle = scalar::acos(dot);
            let sum = self * scalar::sin(angle * (1.0 - t)) + other * scalar::sin(angle * t);
            sum * (1.0 / scalar::sin(angle))
        } else {
            log::trace!("slerp: dot product {dot} too close to 1, interpolating linearly");
            Self::from_vec(self.vec.lerp(other.vec, t))
        }
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for Mat3 {
    fn from(q: Quat) -> Self {
        q.to_mat3()
    }
}

impl From<Quat> for Mat4 {
    fn from(q: Quat) -> Self {
        q.to_mat4()
    }
}

impl fmt::Debug for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.into_array();
        f.debug_tuple("Quat")
            .field(&x)
            .field(&y)
            .field(&z)
            .field(&w)
            .finish()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq, assert_approx_ne,
        scalar::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI},
        vec3, Vec3, Vec4,
    };

    use super::*;

    #[test]
    fn fmt() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{q:?}"), "Quat(1.0, 2.0, 3.0, 4.0)");
        assert_eq!(format!("{q}"), "(1, 2, 3, 4)");
    }

    #[test]
    fn identity() {
        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
        assert_eq!(Quat::default(), Quat::IDENTITY);
        assert_eq!(Quat::IDENTITY.to_mat3(), Mat3::IDENTITY);
        assert_eq!(Quat::IDENTITY.to_mat4(), Mat4::IDENTITY);

        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
    }

    #[test]
    fn views() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.axis(), vec3(1.0, 2.0, 3.0));
        assert_eq!(q.w(), 4.0);
        assert_eq!(q.as_vec4(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Quat::from_parts(q.axis(), q.w()), q);
        assert_eq!(Quat::from_vec(q.as_vec4()), q);
    }

    #[test]
    fn axis_angle() {
        let q = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert_approx_eq!(q.rotate(Vec3::X), vec3(0.0, 0.0, -1.0)).abs(1e-5);
        assert_approx_eq!(q.length(), 1.0).abs(1e-6);

        assert_approx_eq!(Quat::from_rotation_x(FRAC_PI_2).rotate(Vec3::Y), Vec3::Z).abs(1e-6);
        assert_approx_eq!(Quat::from_rotation_y(FRAC_PI_2).rotate(Vec3::Z), Vec3::X).abs(1e-6);
        assert_approx_eq!(Quat::from_rotation_z(FRAC_PI_2).rotate(Vec3::X), Vec3::Y).abs(1e-6);
        assert_approx_eq!(Quat::from_rotation_z(PI).rotate(Vec3::X), -Vec3::X).abs(1e-6);
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::from_components(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_components(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_components(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quat::IDENTITY);
    }

    #[test]
    fn product_applies_rhs_first() {
        let a = Quat::from_rotation_x(0.7);
        let b = Quat::from_rotation_y(-1.3);
        let v = vec3(0.5, 2.0, -1.0);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v))).abs(1e-5);
        assert_approx_ne!((a * b).rotate(v), b.rotate(a.rotate(v))).abs(1e-5);

        // Matrices apply their left operand first.
        assert_approx_eq!((a * b).to_mat3(), b.to_mat3() * a.to_mat3()).abs(1e-5);
    }

    #[test]
    fn rotate_matches_sandwich() {
        let q = Quat::from_axis_angle(vec3(1.0, 2.0, 2.0) * (1.0 / 3.0), 2.1);
        let v = vec3(-1.0, 0.5, 4.0);
        let sandwich = q * Quat::from_parts(v, 0.0) * q.conjugate();
        assert_approx_eq!(q.rotate(v), sandwich.axis()).abs(1e-5);
        assert_approx_eq!(sandwich.w(), 0.0).abs(1e-5);
    }

    #[test]
    fn rotate_matches_matrix() {
        let v = vec3(1.0, 2.0, 3.0);
        for i in -8..=8 {
            let theta = i as Scalar * 0.4;
            let q = Quat::from_axis_angle(Vec3::Y, theta);
            assert_approx_eq!(q.rotate(v), v * q.to_mat3()).abs(1e-5);
            assert_approx_eq!(q * v, v * Mat3::rotation_y(theta)).abs(1e-5);
        }
    }

    #[test]
    fn to_mat4() {
        let q = Quat::from_rotation_z(0.25);
        let m = Mat4::from(q);
        assert_eq!(Mat3::from(m), Mat3::from(q));
        assert_eq!(m.row(3), Vec4::W);
        assert_eq!(m.w0(), 0.0);
    }

    #[test]
    fn conjugate() {
        let q = Quat::from_components(1.0, -2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::from_components(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn inverse_near_unit_length() {
        let q = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 1.0);
        assert_approx_eq!(q * q.inverse(), Quat::IDENTITY).abs(1e-6);
        assert_approx_eq!(q.inverse(), q.conjugate()).abs(1e-5);

        let v = vec3(3.0, -1.0, 2.0);
        assert_approx_eq!(q.inverse().rotate(q.rotate(v)), v).abs(1e-5);
    }

    #[test]
    fn inverse_far_from_unit_length() {
        // Only conjugated, both for long and short quaternions.
        let long = Quat::from_components(1.0, 1.0, 1.0, 1.0);
        assert_eq!(long.inverse(), long.conjugate());
        assert_approx_ne!(long * long.inverse(), Quat::IDENTITY);

        let short = Quat::from_components(0.0, 0.0, 0.0, 0.5);
        assert_eq!(short.inverse(), short);

        // The checked variant always rescales.
        let inv = long.checked_inverse().unwrap();
        assert_approx_eq!(inv, long.conjugate() * 0.25);
        assert_approx_eq!(long * inv, Quat::IDENTITY).abs(1e-6);
        assert_eq!(Quat::from_vec(Vec4::ZERO).checked_inverse(), None);
    }

    #[test]
    fn normalize() {
        let q = Quat::from_components(0.0, 3.0, 0.0, 4.0).normalize();
        assert_approx_eq!(q, Quat::from_components(0.0, 0.6, 0.0, 0.8)).abs(1e-6);
        assert_approx_eq!(q.length(), 1.0).abs(1e-6);

        let zero = Quat::from_vec(Vec4::ZERO);
        assert_eq!(zero.normalize(), zero);
        assert_eq!(zero.try_normalize(), None);
    }

    #[test]
    fn add_scalar() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.add_scalar(1.0), Quat::from_components(2.0, 3.0, 4.0, 5.0));
        assert_eq!(q + q, q * 2.0);
    }

    #[test]
    fn euler_single_angles() {
        let a: Scalar = 0.8;
        let (c, s) = ((a * 0.5).cos(), (a * 0.5).sin());

        let pitch = Quat::from_euler(vec3(a, 0.0, 0.0));
        assert_approx_eq!(pitch, Quat::from_components(0.0, s, 0.0, c)).abs(1e-6);
        let yaw = Quat::from_euler(vec3(0.0, a, 0.0));
        assert_approx_eq!(yaw, Quat::from_components(0.0, 0.0, s, c)).abs(1e-6);
        let roll = Quat::from_euler(vec3(0.0, 0.0, a));
        assert_approx_eq!(roll, Quat::from_components(s, 0.0, 0.0, c)).abs(1e-6);

        assert_eq!(Quat::from_euler(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn euler_is_unit_length() {
        let q = Quat::from_euler(vec3(0.3, -1.1, 2.4));
        assert_approx_eq!(q.length(), 1.0).abs(1e-6);
    }

    #[test]
    fn slerp_endpoints() {
        let f = Quat::from_rotation_x(0.3);
        let l = Quat::from_axis_angle(vec3(0.0, 0.6, 0.8), 2.0);
        assert!(f.dot(l) >= 0.0 && f.dot(l) < 0.95);
        assert_approx_eq!(f.slerp(l, 0.0), f).abs(1e-5);
        assert_approx_eq!(f.slerp(l, 1.0), l).abs(1e-5);
    }

    #[test]
    fn slerp_half_turn() {
        let half_turn = Quat::from_axis_angle(Vec3::Z, PI);
        let q = Quat::IDENTITY.slerp(half_turn, 0.5);

        // A quarter turn around Z. Depending on the rounding of `cos(π/2)`, the sign of the dot
        // product (and thus the direction of the turn) can flip.
        assert_approx_eq!(q.x(), 0.0).abs(1e-4);
        assert_approx_eq!(q.y(), 0.0).abs(1e-4);
        assert_approx_eq!(q.z().abs(), FRAC_1_SQRT_2).abs(1e-4);
        assert_approx_eq!(q.w(), FRAC_1_SQRT_2).abs(1e-4);
    }

    #[test]
    fn slerp_is_monotonic() {
        let l = Quat::from_rotation_z(1.0);
        let mut prev = 0.0;
        for i in 0..=10 {
            let q = Quat::IDENTITY.slerp(l, i as Scalar / 10.0);
            let angle = 2.0 * scalar::acos(q.w().clamp(-1.0, 1.0));
            assert!(angle + 1e-5 >= prev, "{angle} < {prev} at step {i}");
            prev = angle;
        }
        assert_approx_eq!(prev, 1.0).abs(1e-5);
    }

    #[test]
    fn slerp_near_parallel_falls_back_to_lerp() {
        let f = Quat::IDENTITY;
        let l = Quat::from_rotation_z(0.1);
        let q = f.slerp(l, 0.5);
        assert_eq!(q.as_vec4(), f.as_vec4().lerp(l.as_vec4(), 0.5));
        assert!(q.length() < 1.0);
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let f = Quat::IDENTITY;
        let l = Quat::from_vec(-Quat::from_rotation_z(1.0).as_vec4());
        assert!(f.dot(l) < 0.0);
        // The negative dot product selects `l.inverse()` as the endpoint.
        assert_approx_eq!(f.slerp(l, 1.0), l.inverse()).abs(1e-5);
    }
}
