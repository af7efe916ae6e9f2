//! Named getters for single matrix cells.
//!
//! The letter selects the column (`x`, `y`, `z`, `w`), the digit selects the row. `m.y3()` is
//! the same element as `m[(3, 1)]`: the Y translation of an affine [`Mat4`][crate::Mat4].

use crate::Scalar;

use super::Matrix;

macro_rules! cells {
    ($n:literal: $($name:ident = ($row:literal, $col:literal)),+ $(,)?) => {
        impl Matrix<$n> {
            $(
                #[inline]
                pub fn $name(&self) -> Scalar {
                    self.0[$row].0[$col]
                }
            )+
        }
    };
}

cells!(2:
    x0 = (0, 0), y0 = (0, 1),
    x1 = (1, 0), y1 = (1, 1),
);

cells!(3:
    x0 = (0, 0), y0 = (0, 1), z0 = (0, 2),
    x1 = (1, 0), y1 = (1, 1), z1 = (1, 2),
    x2 = (2, 0), y2 = (2, 1), z2 = (2, 2),
);

cells!(4:
    x0 = (0, 0), y0 = (0, 1), z0 = (0, 2), w0 = (0, 3),
    x1 = (1, 0), y1 = (1, 1), z1 = (1, 2), w1 = (1, 3),
    x2 = (2, 0), y2 = (2, 1), z2 = (2, 2), w2 = (2, 3),
    x3 = (3, 0), y3 = (3, 1), z3 = (3, 2), w3 = (3, 3),
);

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat3, Mat4, Scalar};

    #[test]
    fn cells_match_index() {
        let m = Mat4::from_fn(|row, col| (row * 4 + col) as Scalar);
        assert_eq!(m.x0(), 0.0);
        assert_eq!(m.w0(), 3.0);
        assert_eq!(m.x1(), 4.0);
        assert_eq!(m.z2(), 10.0);
        assert_eq!(m.y3(), m[(3, 1)]);
        assert_eq!(m.w3(), 15.0);

        let m = Mat3::from_fn(|row, col| (row * 3 + col) as Scalar);
        assert_eq!(m.y0(), 1.0);
        assert_eq!(m.x2(), 6.0);
        assert_eq!(m.z1(), 5.0);

        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!([m.x0(), m.y0(), m.x1(), m.y1()], [1.0, 2.0, 3.0, 4.0]);
    }
}
