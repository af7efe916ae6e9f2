use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{approx::ApproxEq, Matrix, Scalar, Vector};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = Scalar;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl<const N: usize> ApproxEq for Matrix<N> {
    fn abs_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.as_flat().abs_diff_eq(other.as_flat(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.as_flat().rel_diff_eq(other.as_flat(), tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.as_flat().ulps_diff_eq(other.as_flat(), ulps)
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Matrix<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Matrix<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Scalar::neg)
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<Scalar> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Matrix.
///
/// Under the row-vector convention, `v * (a * b)` equals `(v * a) * b`: `a` is applied first.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| (0..N).fold(0.0, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Row Vector * Matrix.
impl<const N: usize> Mul<Matrix<N>> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Matrix<N>) -> Self {
        rhs.mul_vec(self)
    }
}
