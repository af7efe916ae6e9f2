use std::fmt;

use crate::{Scalar, Vector};

mod construct;
mod ops;
mod view;

/// A 2x2 matrix.
pub type Mat2 = Matrix<2>;
/// A 3x3 matrix.
pub type Mat3 = Matrix<3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4>;

/// A square, row-major `N`x`N` matrix of [`Scalar`]s.
///
/// # Conventions
///
/// Vectors are treated as *row vectors* that get multiplied from the left: transforming `v` by
/// `M` computes `v·M` (see [`Matrix::mul_vec`]). Consequently, in a product `A * B` the
/// transformation `A` is applied first, and the translation of a 4x4 affine matrix lives in its
/// last row.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix row by row, [`Matrix::from_fn`] invokes a closure with
///   the row and column of each element.
/// - [`Matrix::diagonal`] and [`Matrix::from_diagonal`] create diagonal matrices.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`].
/// - Rotation, scaling, translation, projection and view matrices are created by the
///   constructors on [`Mat3`] and [`Mat4`].
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples. Whole rows are
/// available via [`Matrix::row`] and [`Matrix::rows`], the N² elements via [`Matrix::as_flat`],
/// and single cells via named getters where the letter is the column and the digit the row
/// (`x0()`, `y0()`, ..., `w3()`).
///
/// ```
/// # use mmath::*;
/// let mut mat = Mat2::from_rows([
///     [0.0, 1.0],
///     [2.0, 3.0],
/// ]);
/// mat[(1, 0)] = 4.0;
/// assert_eq!(mat.x1(), 4.0);
/// assert_eq!(mat.row(1), vec2(4.0, 3.0));
/// assert_eq!(mat.as_flat(), &[0.0, 1.0, 4.0, 3.0]);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>([Vector<N>; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; N]);

    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = Self::diagonal(1.0);

    /// Creates a matrix with `value` on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(Mat2::diagonal(3.0), Mat2::from_rows([
    ///     [3.0, 0.0],
    ///     [0.0, 3.0],
    /// ]));
    /// ```
    pub const fn diagonal(value: Scalar) -> Self {
        let mut rows = [Vector::ZERO; N];
        let mut i = 0;
        while i < N {
            rows[i].0[i] = value;
            i += 1;
        }
        Self(rows)
    }

    /// Creates a matrix from its rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mat = Mat2::from_rows([
    ///     vec2(0.0, 1.0),
    ///     vec2(2.0, 3.0),
    /// ]);
    /// assert_eq!(mat[(0, 1)], 1.0);
    /// assert_eq!(mat[(1, 0)], 2.0);
    /// ```
    pub fn from_rows<R: Into<Vector<N>>>(rows: [R; N]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a matrix by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mat = Mat2::from_fn(|row, col| (row * 10 + col) as Scalar);
    /// assert_eq!(mat, Mat2::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> Scalar,
    {
        Self(std::array::from_fn(|row| {
            Vector::from_fn(|col| cb(row, col))
        }))
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let diag = Mat3::from_diagonal([1.0, 2.0, 3.0]);
    /// assert_eq!(diag, Mat3::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { 0.0 })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    pub fn into_diagonal(self) -> Vector<N> {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(Mat3::from_diagonal([1.0, 2.0, 3.0]).trace(), 6.0);
    /// assert_eq!(Mat4::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> Scalar {
        (0..N).fold(0.0, |acc, i| acc + self[(i, i)])
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Scalar) -> Scalar,
    {
        Self(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns row `index` of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector<N> {
        self.0[index]
    }

    /// Returns a mutable reference to row `index` of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> &mut Vector<N> {
        &mut self.0[index]
    }

    /// Returns all rows of the matrix.
    #[inline]
    pub fn rows(&self) -> &[Vector<N>; N] {
        &self.0
    }

    /// Returns the `N * N` elements of the matrix in row-major order.
    ///
    /// This is the layout the matrix has in memory.
    #[inline]
    pub fn as_flat(&self) -> &[Scalar] {
        bytemuck::cast_slice(&self.0)
    }

    /// Returns the `N * N` elements of the matrix in row-major order, mutably.
    #[inline]
    pub fn as_flat_mut(&mut self) -> &mut [Scalar] {
        bytemuck::cast_slice_mut(&mut self.0)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mat = Mat2::from_rows([
    ///     [0.0, 1.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3.0));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Scalar> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mat = Mat2::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]).transpose();
    /// assert_eq!(mat, Mat2::from_rows([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self {
        Self::from_fn(|row, col| self[(col, row)])
    }

    /// Transforms the row vector `v` by this matrix, computing `v·M`.
    ///
    /// Element `i` of the result is the dot product of `v` with column `i` of the matrix. This is
    /// the same operation as `v * m`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let m = Mat2::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// assert_eq!(m.mul_vec(vec2(4.0, 5.0)), vec2(4.0 * 0.0 + 5.0 * 2.0, 4.0 * 1.0 + 5.0 * 3.0));
    /// assert_eq!(Mat4::IDENTITY.mul_vec(vec4(1.0, 2.0, 3.0, 1.0)), vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn mul_vec(&self, v: Vector<N>) -> Vector<N> {
        Vector::from_fn(|i| (0..N).fold(0.0, |acc, c| acc + self[(c, i)] * v[c]))
    }

    /// Returns a matrix of a different dimension with the contents of `self` in its upper-left
    /// block.
    ///
    /// When growing, the elements not present in `self` are taken from the identity matrix, so an
    /// embedded linear map keeps acting on the added dimensions as the identity. When shrinking,
    /// the upper-left `M`x`M` block is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let mat = Mat2::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// assert_eq!(mat.resize::<3>(), Mat3::from_rows([
    ///     [1.0, 2.0, 0.0],
    ///     [3.0, 4.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// assert_eq!(mat.resize::<3>().resize::<2>(), mat);
    /// ```
    pub fn resize<const M: usize>(self) -> Matrix<M> {
        Matrix::from_fn(|row, col| {
            if row < N && col < N {
                self[(row, col)]
            } else if row == col {
                1.0
            } else {
                0.0
            }
        })
    }
}

impl Matrix<2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Scalar {
        let [[a, b], [c, d]] = self.0.map(Vector::into_array);
        a * d - b * c
    }

    /// Inverts this 2x2 matrix, or returns [`None`] if its determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// assert_eq!(Mat2::IDENTITY.checked_inverse(), Some(Mat2::IDENTITY));
    /// assert_eq!(Mat2::ZERO.checked_inverse(), None);
    /// ```
    pub fn checked_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let [[a, b], [c, d]] = self.0.map(Vector::into_array);
        Some(Self::from_rows([[d, -b], [-c, a]]) * (1.0 / det))
    }
}

impl Matrix<3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> Scalar {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0.map(Vector::into_array);
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Inverts this 3x3 matrix via its adjugate, or returns [`None`] if its determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mmath::*;
    /// let m = Mat3::from_diagonal([2.0, 4.0, 0.5]);
    /// assert_eq!(m.checked_inverse(), Some(Mat3::from_diagonal([0.5, 0.25, 2.0])));
    /// assert_eq!(Mat3::ZERO.checked_inverse(), None);
    /// ```
    pub fn checked_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }

        let [[a, b, c], [d, e, f], [g, h, i]] = self.0.map(Vector::into_array);
        #[rustfmt::skip]
        let adjugate = Self::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        Some(adjugate * (1.0 / det))
    }
}

macro_rules! resize_conversions {
    ($($from:literal => $to:literal),+) => {
        $(
            impl From<Matrix<$from>> for Matrix<$to> {
                #[inline]
                fn from(mat: Matrix<$from>) -> Self {
                    mat.resize()
                }
            }
        )+
    };
}

resize_conversions!(2 => 3, 2 => 4, 3 => 2, 3 => 4, 4 => 2, 4 => 3);

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> From<[[Scalar; N]; N]> for Matrix<N> {
    fn from(rows: [[Scalar; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a Vector<N>);
        impl<const N: usize> fmt::Debug for FormatRow<'_, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.as_slice().iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem:?}")?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(FormatRow))
            .finish()
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        write!(f, "]")
    }
}
