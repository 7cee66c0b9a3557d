use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use elliptic_curve::bigint::{Encoding, U448};
use subtle::{
    Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess,
    CtOption,
};

#[cfg(feature = "zeroize")]
use zeroize::DefaultIsZeroes;

use super::{FIELD_MODULUS, ResidueType};
use crate::curve::extended::ExtendedPoint;

/// An integer modulo `p = 2^448 - 2^224 - 1`, held in Montgomery form.
///
/// All arithmetic is constant time and every result is fully reduced.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) ResidueType);

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:x})", self.0.retrieve())
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0.retrieve())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0.retrieve())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ResidueType::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

#[cfg(feature = "zeroize")]
impl DefaultIsZeroes for FieldElement {}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg())
    }
}

impl_binop_variants!(Add, add, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
impl_binop_variants!(Sub, sub, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
impl_binop_variants!(Mul, mul, LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
impl_assign_variants!(AddAssign, add_assign, +, LHS = FieldElement, RHS = FieldElement);
impl_assign_variants!(SubAssign, sub_assign, -, LHS = FieldElement, RHS = FieldElement);
impl_assign_variants!(MulAssign, mul_assign, *, LHS = FieldElement, RHS = FieldElement);
impl_neg_variant!(FieldElement);

impl FieldElement {
    /// Zero
    pub const ZERO: Self = Self(ResidueType::ZERO);
    /// One
    pub const ONE: Self = Self(ResidueType::ONE);
    /// Two
    pub const TWO: Self = Self(ResidueType::new(&U448::from_u64(2)));
    /// `p - 1`
    pub const MINUS_ONE: Self = Self(ResidueType::new(&U448::from_be_hex(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffffffffffffffffffffffffffffffffffffffffffffffffffffe",
    )));
    /// `D = -39081`
    pub const EDWARDS_D: Self = Self(ResidueType::new(&U448::from_be_hex(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffff6756",
    )));
    /// `-4 * D = 156324`
    pub const NEG_FOUR_D: Self = Self(ResidueType::new(&U448::from_u64(156324)));
    /// `1 - D = 39082`
    pub const ONE_MINUS_D: Self = Self(ResidueType::new(&U448::from_u64(39082)));
    /// `1 - 2 * D = 78163`
    pub const ONE_MINUS_TWO_D: Self = Self(ResidueType::new(&U448::from_u64(78163)));
    /// The non-negative square root of `-D`.
    pub const SQRT_MINUS_D: Self = Self(ResidueType::new(&U448::from_be_hex(
        "22d962fbeb24f7683bf68d722fa26aa0a1f1a7b8a5b8d54b64a2d780968c14ba839a66f4fd6eded260337bf6aa20ce529642ef0f45572736",
    )));
    /// `1 / sqrt(-D)`
    pub const INV_SQRT_MINUS_D: Self = Self(ResidueType::new(&U448::from_be_hex(
        "6ef40652e222c057902be35a0bcac8075a90950c3a5b27a7d6ba56f128a6521abe707ee2c21fba15efbb2479f19e94f353afbb5eb878682c",
    )));

    /// `(p - 3) / 4`, exact because `p = 3 mod 4`.
    const P_MINUS_THREE_DIV_FOUR: U448 = U448::from_be_hex(
        "3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    );
    /// `(p - 1) / 2`
    const P_MINUS_ONE_DIV_TWO: U448 = U448::from_be_hex(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffff7fffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    );
    const P_MINUS_TWO: U448 = FIELD_MODULUS.wrapping_sub(&U448::from_u64(2));

    /// Reduces an arbitrary 448-bit integer modulo `p`.
    ///
    /// `2^448 < 2p`, so a single conditional subtraction suffices.
    pub fn from_uint(integer: &U448) -> Self {
        let reduced = U448::conditional_select(
            &integer.wrapping_sub(&FIELD_MODULUS),
            integer,
            integer.ct_lt(&FIELD_MODULUS),
        );
        Self(ResidueType::new(&reduced))
    }

    /// Little-endian bytes, reduced modulo `p`. Values `>= p` are accepted.
    pub fn from_bytes(bytes: &[u8; 56]) -> Self {
        Self::from_uint(&U448::from_le_slice(bytes))
    }

    /// Big-endian bytes, reduced modulo `p`. Values `>= p` are accepted.
    pub fn from_be_bytes(bytes: &[u8; 56]) -> Self {
        Self::from_uint(&U448::from_be_slice(bytes))
    }

    /// Little-endian bytes, rejecting any value `>= p`.
    pub fn from_repr(bytes: &[u8; 56]) -> CtOption<Self> {
        let integer = U448::from_le_slice(bytes);
        let is_some = integer.ct_lt(&FIELD_MODULUS);
        CtOption::new(Self(ResidueType::new(&integer)), is_some)
    }

    /// Canonical little-endian encoding of the representative in `[0, p)`.
    pub fn to_bytes(self) -> [u8; 56] {
        self.0.retrieve().to_le_bytes()
    }

    /// Parity of the canonical representative: odd means negative.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Constant-time test against zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `-self` when `self` is negative, otherwise `self`.
    pub fn abs(&self) -> Self {
        let mut abs = *self;
        abs.conditional_negate(self.is_negative());
        abs
    }

    /// Squares a field element
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Doubles a field element
    pub fn double(&self) -> Self {
        self + self
    }

    /// Modular exponentiation. The exponent's bit length is not hidden.
    pub fn pow(&self, exponent: &U448) -> Self {
        Self(self.0.pow(exponent))
    }

    /// Inversion by Fermat's little theorem; zero maps to zero.
    pub fn invert(&self) -> Self {
        self.pow(&Self::P_MINUS_TWO)
    }

    /// Euler's criterion. Zero is reported as a non-square.
    pub fn is_square(&self) -> Choice {
        self.pow(&Self::P_MINUS_ONE_DIV_TWO).ct_eq(&Self::ONE)
    }

    /// Orders two canonical representatives. Variable time: public values only.
    pub fn cmp_vartime(&self, other: &Self) -> Ordering {
        self.0.retrieve().cmp(&other.0.retrieve())
    }

    /// Computes `(was_square, |sqrt(u / v)|)`.
    ///
    /// With `r = u * (u * v)^((p - 3) / 4)`, `was_square` is `v * r^2 == u`.
    /// The returned root is always the non-negative one, whether or not the
    /// ratio was a square.
    pub fn sqrt_ratio_m1(u: &Self, v: &Self) -> (Choice, Self) {
        let r = u * (u * v).pow(&Self::P_MINUS_THREE_DIV_FOUR);
        let check = v * r.square();
        let was_square = check.ct_eq(u);
        (was_square, r.abs())
    }

    /// The Decaf448 Elligator map from one field element to a curve point.
    ///
    /// The output is `(w0*w3, w2*w1, w0*w2, w1*w3)` as `(X, Y, T, Z)`.
    pub(crate) fn map_to_curve_decaf448(&self) -> ExtendedPoint {
        let r = -self.square();
        let r_minus_one = r - Self::ONE;
        let r_plus_one = r + Self::ONE;

        let u0 = Self::EDWARDS_D * r_minus_one;
        let u1 = (u0 + Self::ONE) * (u0 - r);

        let (was_square, v) = Self::sqrt_ratio_m1(&Self::ONE_MINUS_TWO_D, &(r_plus_one * u1));
        let v_prime = Self::conditional_select(&(self * v), &v, was_square);
        let sgn = Self::conditional_select(&Self::MINUS_ONE, &Self::ONE, was_square);
        let s = v_prime * r_plus_one;

        let ss = s.square();
        let w0 = s.abs().double();
        let w1 = ss + Self::ONE;
        let w2 = ss - Self::ONE;
        let w3 = v_prime * s * r_minus_one * Self::ONE_MINUS_TWO_D + sgn;

        ExtendedPoint {
            X: w0 * w3,
            Y: w2 * w1,
            Z: w1 * w3,
            T: w0 * w2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn small(n: u64) -> FieldElement {
        FieldElement::from_uint(&U448::from_u64(n))
    }

    #[test]
    fn get_constants() {
        assert_eq!(-FieldElement::ONE, FieldElement::MINUS_ONE);
        assert_eq!(FieldElement::EDWARDS_D, -small(39081));
        assert_eq!(FieldElement::ONE - FieldElement::EDWARDS_D, FieldElement::ONE_MINUS_D);
        assert_eq!(
            FieldElement::ONE - FieldElement::EDWARDS_D.double(),
            FieldElement::ONE_MINUS_TWO_D
        );
        assert_eq!(
            FieldElement::EDWARDS_D.double().double(),
            -FieldElement::NEG_FOUR_D
        );
        assert_eq!(
            FieldElement::SQRT_MINUS_D.square(),
            -FieldElement::EDWARDS_D
        );
        assert_eq!(
            FieldElement::SQRT_MINUS_D * FieldElement::INV_SQRT_MINUS_D,
            FieldElement::ONE
        );
        assert_eq!(FieldElement::SQRT_MINUS_D.is_negative().unwrap_u8(), 0);
    }

    #[test]
    fn non_canonical_bytes_are_reduced() {
        let p = hex!(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
            "feffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        assert_eq!(FieldElement::from_bytes(&p), FieldElement::ZERO);
        assert!(bool::from(FieldElement::from_repr(&p).is_none()));

        // 2^448 - 1 = p + 2^224
        let two_pow_224 = FieldElement::TWO.pow(&U448::from_u64(224));
        assert_eq!(FieldElement::from_bytes(&[0xff; 56]), two_pow_224);
        assert!(bool::from(FieldElement::from_repr(&[0xff; 56]).is_none()));
        assert_eq!(FieldElement::from_repr(&two_pow_224.to_bytes()).unwrap(), two_pow_224);
    }

    #[test]
    fn byte_order() {
        let mut le = [0u8; 56];
        le[0] = 0x01;
        le[1] = 0x02;
        let mut be = [0u8; 56];
        be[55] = 0x01;
        be[54] = 0x02;
        assert_eq!(FieldElement::from_bytes(&le), small(0x0201));
        assert_eq!(FieldElement::from_be_bytes(&be), small(0x0201));
        assert_eq!(small(0x0201).to_bytes(), le);
    }

    #[test]
    fn sqrt_ratio() {
        // 3 is odd, so the non-negative root of 9 is p - 3
        let (was_square, root) = FieldElement::sqrt_ratio_m1(&small(9), &FieldElement::ONE);
        assert_eq!(was_square.unwrap_u8(), 1);
        assert_eq!(root, -small(3));
        assert_eq!(root.square(), small(9));
        assert_eq!(root.is_negative().unwrap_u8(), 0);

        let (was_square, root) = FieldElement::sqrt_ratio_m1(&small(16), &FieldElement::ONE);
        assert_eq!(was_square.unwrap_u8(), 1);
        assert_eq!(root, small(4));

        let (was_square, root) = FieldElement::sqrt_ratio_m1(&small(4), &small(9));
        assert_eq!(was_square.unwrap_u8(), 1);
        assert_eq!(root.square() * small(9), small(4));
        assert_eq!(root.is_negative().unwrap_u8(), 0);

        // -1 is not a square since p = 3 mod 4
        let (was_square, root) =
            FieldElement::sqrt_ratio_m1(&FieldElement::MINUS_ONE, &FieldElement::ONE);
        assert_eq!(was_square.unwrap_u8(), 0);
        assert_eq!(root.is_negative().unwrap_u8(), 0);
    }

    #[test]
    fn squares() {
        assert_eq!(small(4).is_square().unwrap_u8(), 1);
        assert_eq!(FieldElement::MINUS_ONE.is_square().unwrap_u8(), 0);
        assert_eq!(FieldElement::EDWARDS_D.is_square().unwrap_u8(), 0);
        assert_eq!(FieldElement::ZERO.is_square().unwrap_u8(), 0);
    }

    #[test]
    fn invert() {
        let x = small(39081);
        assert_eq!(x * x.invert(), FieldElement::ONE);
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(small(3).is_negative().unwrap_u8(), 1);
        assert_eq!(small(4).is_negative().unwrap_u8(), 0);
        assert_eq!(small(3).abs(), -small(3));
        assert_eq!(small(4).abs(), small(4));
        // p - 1 is even, so -1 is non-negative
        assert_eq!(FieldElement::MINUS_ONE.abs(), FieldElement::MINUS_ONE);
    }

    #[test]
    fn select_and_swap() {
        let (a, b) = (small(1), small(2));
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(1)), b);
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(0)), a);

        let (mut x, mut y) = (a, b);
        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(0));
        assert_eq!((x, y), (a, b));
        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(1));
        assert_eq!((x, y), (b, a));
    }

    #[test]
    fn compare() {
        assert_eq!(small(2).cmp_vartime(&small(3)), Ordering::Less);
        assert_eq!(FieldElement::MINUS_ONE.cmp_vartime(&small(3)), Ordering::Greater);
        assert_eq!(small(7).cmp_vartime(&small(7)), Ordering::Equal);
    }
}
