use core::fmt::{Display, Formatter, Result as FmtResult};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use elliptic_curve::bigint::{Encoding, U448};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

use crate::{Error, Result};

/// Little-endian encoding of a [`DecafScalar`].
pub type ScalarBytes = [u8; 56];

/// The order of the Decaf448 group,
/// `l = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885`.
pub const ORDER: U448 = U448::from_be_hex(
    "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3",
);

/// An integer in `[0, l)`, used to multiply Decaf448 group elements.
///
/// Values are range checked on construction, so scalar multiplication by a
/// `DecafScalar` never needs to fail.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecafScalar(pub(crate) U448);

impl Display for DecafScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in self.to_bytes().iter().rev() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for DecafScalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for DecafScalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U448::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for DecafScalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for DecafScalar {}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for DecafScalar {}

impl From<u64> for DecafScalar {
    fn from(value: u64) -> Self {
        Self(U448::from_u64(value))
    }
}

impl From<DecafScalar> for ScalarBytes {
    fn from(scalar: DecafScalar) -> ScalarBytes {
        scalar.to_bytes()
    }
}

impl TryFrom<ScalarBytes> for DecafScalar {
    type Error = Error;

    fn try_from(bytes: ScalarBytes) -> Result<Self> {
        Self::from_canonical_bytes(&bytes)
    }
}

impl Add<&DecafScalar> for &DecafScalar {
    type Output = DecafScalar;

    fn add(self, rhs: &DecafScalar) -> DecafScalar {
        DecafScalar(self.0.add_mod(&rhs.0, &ORDER))
    }
}

impl Sub<&DecafScalar> for &DecafScalar {
    type Output = DecafScalar;

    fn sub(self, rhs: &DecafScalar) -> DecafScalar {
        DecafScalar(self.0.sub_mod(&rhs.0, &ORDER))
    }
}

impl Neg for &DecafScalar {
    type Output = DecafScalar;

    fn neg(self) -> DecafScalar {
        DecafScalar(U448::ZERO.sub_mod(&self.0, &ORDER))
    }
}

impl_binop_variants!(Add, add, LHS = DecafScalar, RHS = DecafScalar, Output = DecafScalar);
impl_binop_variants!(Sub, sub, LHS = DecafScalar, RHS = DecafScalar, Output = DecafScalar);
impl_assign_variants!(AddAssign, add_assign, +, LHS = DecafScalar, RHS = DecafScalar);
impl_assign_variants!(SubAssign, sub_assign, -, LHS = DecafScalar, RHS = DecafScalar);
impl_neg_variant!(DecafScalar);

impl Sum for DecafScalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, s| acc + s)
    }
}

impl<'a> Sum<&'a DecafScalar> for DecafScalar {
    fn sum<I: Iterator<Item = &'a DecafScalar>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl DecafScalar {
    /// Zero
    pub const ZERO: Self = Self(U448::ZERO);
    /// One
    pub const ONE: Self = Self(U448::ONE);

    /// Accepts `integer` only if it is below the group order.
    pub fn from_uint(integer: &U448) -> Result<Self> {
        let is_some = integer.ct_lt(&ORDER);
        Option::from(CtOption::new(Self(*integer), is_some)).ok_or(Error::ScalarOutOfRange)
    }

    /// Decodes a little-endian scalar, rejecting values `>= l`.
    pub fn from_canonical_bytes(bytes: &ScalarBytes) -> Result<Self> {
        Self::from_uint(&U448::from_le_slice(bytes))
    }

    /// Little-endian encoding
    pub fn to_bytes(&self) -> ScalarBytes {
        self.0.to_le_bytes()
    }

    /// The scalar as an unsigned integer in `[0, l)`.
    pub fn to_uint(&self) -> U448 {
        self.0
    }

    /// Samples a scalar uniformly from `[0, l)` by rejection sampling.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let mut bytes = [0u8; 56];

        loop {
            rng.fill_bytes(&mut bytes);
            // l < 2^446
            bytes[55] &= 0x3f;
            if let Ok(scalar) = Self::from_canonical_bytes(&bytes) {
                return scalar;
            }
        }
    }
}
