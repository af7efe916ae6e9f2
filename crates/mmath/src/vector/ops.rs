//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Scalar};

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Scalar;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[Scalar; N]> for Vector<N> {
    fn eq(&self, other: &[Scalar; N]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [Scalar; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> PartialEq<[Scalar]> for Vector<N> {
    fn eq(&self, other: &[Scalar]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> ApproxEq for Vector<N> {
    fn abs_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps)
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Scalar::neg)
    }
}

// Every binary operator exists in four shapes: vector-vector, vector-scalar, and the compound
// assignment version of each.
macro_rules! elementwise_ops {
    ($($op:ident :: $method:ident, $op_assign:ident :: $method_assign:ident;)+) => {
        $(
            impl<const N: usize> $op<Vector<N>> for Vector<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Vector<N>) -> Self {
                    self.zip_map(rhs, Scalar::$method)
                }
            }

            impl<const N: usize> $op<Scalar> for Vector<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Scalar) -> Self {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            impl<const N: usize> $op_assign<Vector<N>> for Vector<N> {
                #[inline]
                fn $method_assign(&mut self, rhs: Vector<N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$method_assign(rhs));
                }
            }

            impl<const N: usize> $op_assign<Scalar> for Vector<N> {
                #[inline]
                fn $method_assign(&mut self, rhs: Scalar) {
                    self.0.iter_mut().for_each(|lhs| lhs.$method_assign(rhs));
                }
            }
        )+
    };
}

elementwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

/// Scalar-Vector multiplication (scaling).
impl<const N: usize> Mul<Vector<N>> for Scalar {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}
