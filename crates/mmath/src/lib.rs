//! Vector, matrix, quaternion and transform math for real-time graphics and simulation.
//!
//! # Overview
//!
//! - [`Vector`] (aliased as [`Vec2`], [`Vec3`] and [`Vec4`]) provides element-wise arithmetic,
//!   dot and cross products, lengths, normalization and interpolation.
//! - [`Matrix`] (aliased as [`Mat2`], [`Mat3`] and [`Mat4`]) provides matrix algebra plus the
//!   usual rotation, scaling, translation, projection and view constructors.
//! - [`Quat`] represents rotations and supports the Hamilton product, vector rotation,
//!   conversion to matrices and spherical interpolation.
//! - [`Transform`] is a position/scale/rotation node of a transform hierarchy.
//!
//! # Conventions
//!
//! - Vectors are *row vectors*: a point `p` is transformed by a matrix `M` as `p * M`. In a
//!   product `A * B` of matrices, `A` is applied first, and translations live in the last row.
//! - Rotations are right-handed.
//! - Matrices are stored row-major, without padding. Every type implements [`bytemuck::Pod`], so
//!   it can be copied into GPU buffers as-is.
//! - All types are [`Copy`], and every operation returns its result instead of writing it into
//!   an output parameter.
//!
//! # Goals & Non-Goals
//!
//! - Only 2-, 3- and 4-dimensional vectors and matrices are supported. Const generics keep the
//!   operations that are shared between the dimensions in one place.
//! - No SIMD. The code is plain scalar arithmetic that the compiler is free to vectorize.
//! - A single, compile-time selectable scalar type: [`f32`] by default, or [`f64`] when the
//!   `double` Cargo feature is enabled. See the [`scalar`] module.
//! - No fallible operations. Degenerate inputs (zero-length vectors, near-parallel quaternions)
//!   take a documented fallback path, which is reported via [`log::trace!`]. Methods prefixed
//!   with `try_` or `checked_` return an [`Option`] instead.

pub mod approx;
mod matrix;
mod quat;
pub mod scalar;
mod transform;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use scalar::{consts, degrees, radians, Scalar};
pub use transform::*;
pub use vector::*;
