use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::DecafPoint;
use crate::DecafScalar;
use crate::curve::scalar_mul::montgomery_ladder;

// Scalar multiplication. `DecafScalar` is always below the group order, so
// these never fail.

impl Mul<&DecafScalar> for &DecafPoint {
    type Output = DecafPoint;

    fn mul(self, scalar: &DecafScalar) -> DecafPoint {
        DecafPoint(montgomery_ladder(&self.0, &scalar.0))
    }
}

impl Mul<&DecafPoint> for &DecafScalar {
    type Output = DecafPoint;

    fn mul(self, point: &DecafPoint) -> DecafPoint {
        point * self
    }
}

impl_binop_variants!(Mul, mul, LHS = DecafPoint, RHS = DecafScalar, Output = DecafPoint);
impl_binop_variants!(Mul, mul, LHS = DecafScalar, RHS = DecafPoint, Output = DecafPoint);
impl_assign_variants!(MulAssign, mul_assign, *, LHS = DecafPoint, RHS = DecafScalar);

// Point addition

impl Add<&DecafPoint> for &DecafPoint {
    type Output = DecafPoint;

    fn add(self, other: &DecafPoint) -> DecafPoint {
        DecafPoint(self.0.add(&other.0))
    }
}

impl_binop_variants!(Add, add, LHS = DecafPoint, RHS = DecafPoint, Output = DecafPoint);
impl_assign_variants!(AddAssign, add_assign, +, LHS = DecafPoint, RHS = DecafPoint);

// Point subtraction

impl Sub<&DecafPoint> for &DecafPoint {
    type Output = DecafPoint;

    fn sub(self, other: &DecafPoint) -> DecafPoint {
        DecafPoint(self.0.sub(&other.0))
    }
}

impl_binop_variants!(Sub, sub, LHS = DecafPoint, RHS = DecafPoint, Output = DecafPoint);
impl_assign_variants!(SubAssign, sub_assign, -, LHS = DecafPoint, RHS = DecafPoint);

// Negation

impl Neg for &DecafPoint {
    type Output = DecafPoint;

    fn neg(self) -> DecafPoint {
        DecafPoint(self.0.negate())
    }
}

impl_neg_variant!(DecafPoint);

impl<T> Sum<T> for DecafPoint
where
    T: Borrow<DecafPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::IDENTITY, |acc, item| acc + item.borrow())
    }
}
