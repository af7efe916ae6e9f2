//! Rotation, scaling, translation, projection and view matrices.
//!
//! All matrices follow the crate's row-vector convention: a point `p` is transformed as `p·M`,
//! translations live in the last row, and the rotation constructors are right-handed.

use crate::{
    scalar::{self, Scalar},
    Mat3, Mat4, Vec3,
};

impl Mat3 {
    /// Creates a matrix rotating by `radians` around the X axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = Vec3::Y * Mat3::rotation_x(consts::FRAC_PI_2);
    /// assert_approx_eq!(v, Vec3::Z).abs(1e-6);
    /// ```
    #[rustfmt::skip]
    pub fn rotation_x(radians: Scalar) -> Self {
        let c = scalar::cos(radians);
        let s = scalar::sin(radians);
        Self::from_rows([
            [1.0, 0.0, 0.0],
            [0.0,   c,   s],
            [0.0,  -s,   c],
        ])
    }

    /// Creates a matrix rotating by `radians` around the Y axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = Vec3::X * Mat3::rotation_y(consts::FRAC_PI_2);
    /// assert_approx_eq!(v, -Vec3::Z).abs(1e-6);
    /// ```
    #[rustfmt::skip]
    pub fn rotation_y(radians: Scalar) -> Self {
        let c = scalar::cos(radians);
        let s = scalar::sin(radians);
        Self::from_rows([
            [  c, 0.0,  -s],
            [0.0, 1.0, 0.0],
            [  s, 0.0,   c],
        ])
    }

    /// Creates a matrix rotating by `radians` around the Z axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = Vec3::X * Mat3::rotation_z(consts::FRAC_PI_2);
    /// assert_approx_eq!(v, Vec3::Y).abs(1e-6);
    /// ```
    #[rustfmt::skip]
    pub fn rotation_z(radians: Scalar) -> Self {
        let c = scalar::cos(radians);
        let s = scalar::sin(radians);
        Self::from_rows([
            [  c,   s, 0.0],
            [ -s,   c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }
}

impl Mat4 {
    /// Creates a matrix scaling X, Y and Z by the components of `scale`.
    pub fn scaling(scale: Vec3) -> Self {
        Self::from_diagonal(scale.extend(1.0))
    }

    /// Creates a matrix translating points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let m = Mat4::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.row(3), vec4(1.0, 2.0, 3.0, 1.0));
    ///
    /// // Points move, directions (W = 0) don't.
    /// assert_eq!(vec4(1.0, 1.0, 1.0, 1.0) * m, vec4(2.0, 3.0, 4.0, 1.0));
    /// assert_eq!(vec4(1.0, 1.0, 1.0, 0.0) * m, vec4(1.0, 1.0, 1.0, 0.0));
    /// ```
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        *m.row_mut(3) = offset.extend(1.0);
        m
    }

    /// Creates a perspective projection matrix.
    ///
    /// - `aspect` is the viewport width divided by its height.
    /// - `fov_y` is the vertical field of view, in radians.
    /// - `z_near` and `z_far` are the distances to the near and far clipping planes.
    ///
    /// The camera looks down the negative Z axis; after the perspective divide, depth `-z_near`
    /// maps to -1 and `-z_far` maps to +1.
    #[rustfmt::skip]
    pub fn perspective(aspect: Scalar, fov_y: Scalar, z_near: Scalar, z_far: Scalar) -> Self {
        let f = 1.0 / scalar::tan(fov_y * 0.5);
        let nf = 1.0 / (z_near - z_far);
        Self::from_rows([
            [f / aspect, 0.0, 0.0,                           0.0],
            [0.0,        f,   0.0,                           0.0],
            [0.0,        0.0, (z_far + z_near) * nf,        -1.0],
            [0.0,        0.0, (2.0 * z_far * z_near) * nf,   0.0],
        ])
    }

    /// Creates an orthographic projection matrix mapping the given box to the `[-1, 1]` cube.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let m = Mat4::ortho(-2.0, 2.0, 1.0, -1.0, 0.0, 10.0);
    /// assert_eq!(vec4(2.0, 1.0, -10.0, 1.0) * m, vec4(1.0, 1.0, 1.0, 1.0));
    /// assert_eq!(vec4(-2.0, -1.0, 0.0, 1.0) * m, vec4(-1.0, -1.0, -1.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn ortho(
        left: Scalar,
        right: Scalar,
        top: Scalar,
        bottom: Scalar,
        z_near: Scalar,
        z_far: Scalar,
    ) -> Self {
        let tb = top - bottom;
        let rl = right - left;
        let fne = z_far - z_near;
        Self::from_rows([
            [2.0 / rl,              0.0,                   0.0,                      0.0],
            [0.0,                   2.0 / tb,              0.0,                      0.0],
            [0.0,                   0.0,                  -2.0 / fne,                0.0],
            [-(right + left) / rl, -(top + bottom) / tb,  -(z_far + z_near) / fne,   1.0],
        ])
    }

    /// Creates a view matrix for a camera at `eye` looking at `center`.
    ///
    /// The camera basis is right-handed and orthonormal: its Z axis points from `eye` towards
    /// `center`, X is `up × Z` and Y is `Z × X`. `up` must not be parallel to the view direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let view = Mat4::look_at(vec3(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Y);
    /// // The eye ends up at the origin, the target in front of it.
    /// assert_eq!(vec4(0.0, 0.0, -5.0, 1.0) * view, vec4(0.0, 0.0, 0.0, 1.0));
    /// assert_eq!(Vec4::W * view, vec4(0.0, 0.0, 5.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (center - eye).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self::from_rows([
            [x.x(),        y.x(),        z.x(),        0.0],
            [x.y(),        y.y(),        z.y(),        0.0],
            [x.z(),        y.z(),        z.z(),        0.0],
            [-x.dot(eye), -y.dot(eye),  -z.dot(eye),   1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq,
        scalar::consts::{FRAC_PI_2, PI},
        vec3, vec4, Mat3, Mat4, Scalar, Vec3, Vec4,
    };

    #[rustfmt::skip]
    #[test]
    fn rotation_sign_placement() {
        let (s, c): (Scalar, Scalar) = (0.6, 0.8);
        let angle = s.atan2(c);

        assert_approx_eq!(Mat3::rotation_x(angle), Mat3::from_rows([
            [1.0, 0.0, 0.0],
            [0.0,   c,   s],
            [0.0,  -s,   c],
        ])).abs(1e-6);
        assert_approx_eq!(Mat3::rotation_y(angle), Mat3::from_rows([
            [  c, 0.0,  -s],
            [0.0, 1.0, 0.0],
            [  s, 0.0,   c],
        ])).abs(1e-6);
        assert_approx_eq!(Mat3::rotation_z(angle), Mat3::from_rows([
            [  c,   s, 0.0],
            [ -s,   c, 0.0],
            [0.0, 0.0, 1.0],
        ])).abs(1e-6);
    }

    #[test]
    fn rotations_are_right_handed() {
        assert_approx_eq!(Vec3::Y * Mat3::rotation_x(FRAC_PI_2), Vec3::Z).abs(1e-6);
        assert_approx_eq!(Vec3::Z * Mat3::rotation_y(FRAC_PI_2), Vec3::X).abs(1e-6);
        assert_approx_eq!(Vec3::X * Mat3::rotation_z(FRAC_PI_2), Vec3::Y).abs(1e-6);
        assert_approx_eq!(Vec3::X * Mat3::rotation_z(PI), -Vec3::X).abs(1e-6);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let m = Mat3::rotation_x(0.3) * Mat3::rotation_y(-1.2) * Mat3::rotation_z(2.5);
        assert_approx_eq!(m * m.transpose(), Mat3::IDENTITY).abs(1e-6);
        assert_approx_eq!(m.determinant(), 1.0).abs(1e-6);
    }

    #[test]
    fn scaling() {
        let m = Mat4::scaling(vec3(2.0, 3.0, -1.0));
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0) * m, vec4(2.0, 3.0, -1.0, 1.0));
        assert_eq!(m.into_diagonal(), [2.0, 3.0, -1.0, 1.0]);
    }

    #[test]
    fn translation() {
        let m = Mat4::translation(vec3(1.0, -2.0, 3.0));
        assert_eq!(m.x3(), 1.0);
        assert_eq!(m.y3(), -2.0);
        assert_eq!(m.z3(), 3.0);
        assert_eq!(m.w3(), 1.0);
        assert_eq!(Vec4::W * m, vec4(1.0, -2.0, 3.0, 1.0));
    }

    #[test]
    fn perspective_depth_range() {
        let m = Mat4::perspective(1.0, FRAC_PI_2, 1.0, 3.0);
        let near = (vec4(0.0, 0.0, -1.0, 1.0) * m).div_w();
        let far = (vec4(0.0, 0.0, -3.0, 1.0) * m).div_w();
        assert_approx_eq!(near.z(), -1.0).abs(1e-6);
        assert_approx_eq!(far.z(), 1.0).abs(1e-6);

        // Exact terms of the third and fourth row.
        assert_eq!(m.z2(), (3.0 + 1.0) / (1.0 - 3.0));
        assert_eq!(m.w2(), -1.0);
        assert_eq!(m.z3(), 2.0 * 3.0 * 1.0 / (1.0 - 3.0));
        assert_eq!(m.w3(), 0.0);
    }

    #[test]
    fn perspective_aspect() {
        let m = Mat4::perspective(2.0, FRAC_PI_2, 0.1, 100.0);
        assert_approx_eq!(m.x0(), 0.5).abs(1e-6);
        assert_approx_eq!(m.y1(), 1.0).abs(1e-6);
    }

    #[test]
    fn look_at_basis() {
        let eye = vec3(3.0, 4.0, 5.0);
        let center = vec3(-1.0, 0.5, 2.0);
        let view = Mat4::look_at(eye, center, Vec3::Y);

        let basis = Mat3::from(view);
        assert_approx_eq!(basis * basis.transpose(), Mat3::IDENTITY).abs(1e-5);

        // The eye maps to the origin and the target onto the +Z axis.
        assert_approx_eq!((eye.extend(1.0) * view).truncate(), Vec3::ZERO).abs(1e-5);
        let target = (center.extend(1.0) * view).truncate();
        assert_approx_eq!(target.x(), 0.0).abs(1e-5);
        assert_approx_eq!(target.y(), 0.0).abs(1e-5);
        assert_approx_eq!(target.z(), eye.distance(center)).abs(1e-5);
    }
}
