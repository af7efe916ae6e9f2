use std::{array, fmt};

use crate::scalar::{self, Scalar};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// An `N`-element vector of [`Scalar`]s.
///
/// The crate only names the 2-, 3- and 4-dimensional instantiations ([`Vec2`], [`Vec3`],
/// [`Vec4`]); everything in the generic `impl` block behaves identically for each of them.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a value into each element, [`Vector::from_fn`] invokes a closure
///   with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is all-zeroes, [`Vector::ONE`] is all-ones, and `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors along the axes that exist for the dimension.
///
/// # Element Access
///
/// All accessors are views over the same `N` elements:
///
/// - Positional getters `x()`, `y()`, `z()`, `w()`, and for [`Vec3`]/[`Vec4`] the color channel
///   getters `r()`, `g()`, `b()`, `a()`. Each has a `*_mut` and a `set_*` counterpart.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`].
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented, so vectors can be cast to
///   bytes for GPU upload.
///
/// # Arithmetic
///
/// Every operation returns a new value instead of writing through a destination, so there is no
/// way for an output to alias an input. Element-wise `+`, `-`, `*` and `/` accept either another
/// vector or a [`Scalar`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub(crate) [Scalar; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// A vector with each element set to 1.
    ///
    /// Multiplying a vector element-wise with this leaves it unchanged, which makes it the neutral
    /// scale of a [`Transform`][crate::Transform].
    pub const ONE: Self = Self([1.0; N]);

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(Vec3::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: Scalar) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = Vec3::from_fn(|i| i as Scalar + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> Scalar,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|e| e * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Scalar) -> Scalar,
    {
        Self(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise using a closure.
    pub(crate) fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(Scalar, Scalar) -> Scalar,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[Scalar; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.as_mut_array()[1] = 777.0;
    /// assert_eq!(v, [1.0, 777.0, 3.0]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Scalar; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub const fn into_array(self) -> [Scalar; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Scalar> {
        self.0.get_mut(index)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors:
    /// - If the dot product is greater than zero, the angle between the vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
    /// assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> Scalar {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    pub fn length2(self) -> Scalar {
        self.dot(self)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> Scalar {
        scalar::sqrt(self.length2())
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec3(1.0, 1.0, 1.0).distance(vec3(1.0, 4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> Scalar {
        (other - self).length()
    }

    /// Scales this vector to unit length.
    ///
    /// A vector of length zero has no direction and is returned unchanged. Use
    /// [`Vector::try_normalize`] to detect that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3::Z);
    /// assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or_else(|| {
            log::trace!("normalize: zero-length vector {self:?} left unchanged");
            self
        })
    }

    /// Scales this vector to unit length, or returns [`None`] if its length is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(-Vec2::Y));
    /// assert_eq!(Vec2::ZERO.try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(self * (1.0 / len))
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// `t` is not clamped: values outside of `0..=1` extrapolate along the line through both
    /// vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let (a, b) = (vec2(0.0, 10.0), vec2(4.0, 20.0));
    /// assert_eq!(a.lerp(b, 0.5), vec2(2.0, 15.0));
    /// assert_eq!(a.lerp(b, 2.0), vec2(8.0, 30.0));
    /// ```
    pub fn lerp(self, other: Self, t: Scalar) -> Self {
        (other - self) * t + self
    }

    /// Returns a vector containing the absolute value of each element.
    pub fn abs(self) -> Self {
        self.map(scalar::abs)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let a = vec3(-1.0, 2.0, Scalar::NAN);
    /// let b = vec3(3.0, Scalar::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, Scalar::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, scalar::min)
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let a = vec3(-1.0, 2.0, Scalar::NAN);
    /// let b = vec3(3.0, Scalar::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, scalar::max)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = vec3(-5.0, 0.5, 5.0).clamp(Vec3::ZERO, Vec3::ONE);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_approx_eq!(Vec3::Y.abs_angle_to(Vec3::X), consts::FRAC_PI_2);
    /// assert_approx_eq!(Vec3::Y.abs_angle_to(-Vec3::Y), consts::PI);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> Scalar {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push the cosine of (anti)parallel vectors slightly outside of `[-1, 1]`.
        scalar::acos(cos.clamp(-1.0, 1.0))
    }
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);

    /// Appends a Z coordinate, yielding a [`Vec3`].
    ///
    /// Chain two calls to promote to a [`Vec4`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0).extend(1.0), vec4(-1.0, 2.0, 5.0, 1.0));
    /// ```
    pub fn extend(self, z: Scalar) -> Vec3 {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Appends a W coordinate, yielding a [`Vec4`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec3(-1.0, 2.0, 3.5).extend(1.0), vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, w: Scalar) -> Vec4 {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Drops the Z coordinate.
    pub fn truncate(self) -> Vec2 {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule; swapping the
    /// arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// Drops the W coordinate.
    ///
    /// Chain two calls to demote to a [`Vec2`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let v = vec4(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(v.truncate(), vec3(1.0, 2.0, 3.0));
    /// assert_eq!(v.truncate().truncate(), vec2(1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vec3 {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Performs the perspective divide, dividing X, Y and Z by W.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(vec4(2.0, 4.0, -8.0, 2.0).div_w(), vec3(1.0, 2.0, -4.0));
    /// ```
    pub fn div_w(self) -> Vec3 {
        let [x, y, z, w] = self.0;
        let inv = 1.0 / w;
        vec3(x * inv, y * inv, z * inv)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[Scalar; N]> for Vector<N> {
    #[inline]
    fn from(value: [Scalar; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [Scalar; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AsRef<[Scalar]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[Scalar] {
        &self.0
    }
}

impl<const N: usize> AsMut<[Scalar]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Scalar] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2(x: Scalar, y: Scalar) -> Vec2 {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vec3 {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Vec4 {
    Vector([x, y, z, w])
}
