use std::{fmt, ops::Mul};

use crate::{approx::ApproxEq, Mat4, Quat, Scalar, Vec3};

/// A node of a translate-rotate-scale hierarchy.
///
/// A transform maps a point `p` from its local frame into the parent frame by rotating it, then
/// scaling the result component-wise, then adding the position:
/// `rotation.rotate(p) * scale + position`.
///
/// # Examples
///
/// ```
/// # use mmath::*;
/// let parent = Transform::new(vec3(1.0, 0.0, 0.0), Vec3::ONE, Quat::IDENTITY);
/// let child = Transform::new(vec3(0.0, 1.0, 0.0), Vec3::ONE, Quat::IDENTITY);
/// assert_eq!(parent.compose(child).position, vec3(1.0, 1.0, 0.0));
/// ```
#[derive(Clone, Copy, PartialEq, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Quat,
}

impl Transform {
    /// The transform that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        scale: Vec3::ONE,
        rotation: Quat::IDENTITY,
    };

    /// Creates a transform from its parts.
    pub fn new(position: Vec3, scale: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// Expresses `child`, given relative to `self`, in the frame `self` is relative to.
    ///
    /// The child's position is rotated into this frame, scaled by this transform's scale and
    /// offset by its position. Scales multiply component-wise and rotations are combined with the
    /// Hamilton product (`self.rotation * child.rotation`).
    ///
    /// The same operation is available as `self * child`.
    pub fn compose(&self, child: Transform) -> Self {
        Self {
            position: self.rotation.rotate(child.position) * self.scale + self.position,
            scale: self.scale * child.scale,
            rotation: self.rotation * child.rotation,
        }
    }

    /// Maps a point from the local frame of this transform into its parent frame.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation.rotate(point) * self.scale + self.position
    }

    /// Interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Position and scale are interpolated linearly, rotation with [`Quat::slerp`].
    pub fn lerp(&self, other: Transform, t: Scalar) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            scale: self.scale.lerp(other.scale, t),
            rotation: self.rotation.slerp(other.rotation, t),
        }
    }

    /// Converts this transform to a 4x4 matrix for the crate's row-vector convention.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let t = Transform::new(vec3(1.0, 2.0, 3.0), Vec3::splat(2.0), Quat::IDENTITY);
    /// assert_eq!(vec4(1.0, 1.0, 1.0, 1.0) * t.to_mat4(), vec4(3.0, 4.0, 5.0, 1.0));
    /// ```
    #[rustfmt::skip]
    pub fn to_mat4(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale.into_array();
        let [px, py, pz] = self.position.into_array();
        self.rotation.to_mat4() * Mat4::from_rows([
            [sx,  0.0, 0.0, 0.0],
            [0.0, sy,  0.0, 0.0],
            [0.0, 0.0, sz,  0.0],
            [px,  py,  pz,  1.0],
        ])
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composes two transforms, see [`Transform::compose`].
impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.to_mat4()
    }
}

impl ApproxEq for Transform {
    fn abs_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.position.abs_diff_eq(&other.position, tolerance)
            && self.scale.abs_diff_eq(&other.scale, tolerance)
            && self.rotation.abs_diff_eq(&other.rotation, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.position.rel_diff_eq(&other.position, tolerance)
            && self.scale.rel_diff_eq(&other.scale, tolerance)
            && self.rotation.rel_diff_eq(&other.rotation, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.position.ulps_diff_eq(&other.position, ulps)
            && self.scale.ulps_diff_eq(&other.scale, ulps)
            && self.rotation.ulps_diff_eq(&other.rotation, ulps)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {}, scale {}, rotation {}",
            self.position, self.scale, self.rotation
        )
    }
}
