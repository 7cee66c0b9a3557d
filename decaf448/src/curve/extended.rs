use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

use crate::curve::scalar_mul::montgomery_ladder;
use crate::field::{FieldElement, ORDER};
use crate::{Error, Result};
use elliptic_curve::bigint::U448;

/// A point on `x^2 + y^2 = 1 + D x^2 y^2` with `D = -39081`, in extended
/// homogeneous coordinates: `x = X/Z`, `y = Y/Z`, `X*Y = Z*T`.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl ConstantTimeEq for ExtendedPoint {
    /// Equality up to the 2-torsion the Decaf quotient removes:
    /// `X1*Y2 == Y1*X2` or `Y1*Y2 == X1*X2`.
    fn ct_eq(&self, other: &Self) -> Choice {
        let XY = self.X * other.Y;
        let YX = self.Y * other.X;

        let YY = self.Y * other.Y;
        let XX = self.X * other.X;

        XY.ct_eq(&YX) | YY.ct_eq(&XX)
    }
}

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ExtendedPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &ExtendedPoint) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for ExtendedPoint {}

impl Default for ExtendedPoint {
    fn default() -> ExtendedPoint {
        ExtendedPoint::IDENTITY
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for ExtendedPoint {}

impl ExtendedPoint {
    /// Identity point
    pub const IDENTITY: ExtendedPoint = ExtendedPoint {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Unified addition, "Twisted Edwards Curves Revisited" (Hisil et al.)
    /// with `a = 1`. Valid for every pair of inputs, including `P + P`.
    pub(crate) fn add(&self, other: &ExtendedPoint) -> ExtendedPoint {
        let A = self.X * other.X;
        let B = self.Y * other.Y;
        let C = self.T * other.T * FieldElement::EDWARDS_D;
        let D = self.Z * other.Z;
        let E = (self.X + self.Y) * (other.X + other.Y) - A - B;
        let F = D - C;
        let G = D + C;
        let H = B - A;

        ExtendedPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    pub(crate) fn sub(&self, other: &ExtendedPoint) -> ExtendedPoint {
        self.add(&other.negate())
    }

    /// Dedicated doubling (dbl-2008-hwcd) with `a = 1`.
    pub(crate) fn double(&self) -> ExtendedPoint {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().double();
        let D = A;
        let E = (self.X + self.Y).square() - A - B;
        let G = D + B;
        let F = G - C;
        let H = D - B;

        ExtendedPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Negates a point
    pub(crate) fn negate(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }

    pub(crate) fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Computes `scalar * self`, rejecting scalars that are not below the
    /// group order.
    pub(crate) fn scalar_mul(&self, scalar: &U448) -> Result<ExtendedPoint> {
        let in_range = scalar.ct_lt(&ORDER);
        Option::from(CtOption::new(*scalar, in_range))
            .map(|k| montgomery_ladder(self, &k))
            .ok_or(Error::ScalarOutOfRange)
    }

    /// Checks the curve equation and the `T` invariant
    #[cfg(test)]
    pub(crate) fn is_on_curve(&self) -> Choice {
        let XY = self.X * self.Y;
        let ZT = self.Z * self.T;

        // (X^2 + Y^2) * Z^2 == Z^4 + D * X^2 * Y^2
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let lhs = (XX + YY) * ZZ;
        let rhs = ZZ.square() + FieldElement::EDWARDS_D * XX * YY;

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs) & !self.Z.is_zero()
    }
}
