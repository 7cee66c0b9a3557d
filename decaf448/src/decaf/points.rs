use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

use elliptic_curve::bigint::U448;
use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXof, Expander};
use rand_core::CryptoRngCore;
use sha3::Shake256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::constants::DECAF_BASEPOINT;
use crate::curve::extended::ExtendedPoint;
use crate::field::FieldElement;
use crate::{Error, Result};

/// The bytes representation of a compressed point
pub type DecafPointBytes = [u8; 56];

/// Domain separation tag used by [`DecafPoint::hash_with_defaults`].
pub const DEFAULT_HASH_TO_GROUP_SUITE: &[u8] = b"decaf448_XOF:SHAKE256_D448MAP_RO_";

/// An element of the Decaf448 group.
///
/// Internally a point on Ed448-Goldilocks. Points that differ by the
/// 2-torsion point `(0, -1)` are the same group element: they compare equal
/// and share one encoding.
#[derive(Copy, Clone, Debug)]
pub struct DecafPoint(pub(crate) ExtendedPoint);

impl Default for DecafPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for DecafPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:x}", self.compress())
    }
}

impl LowerHex for DecafPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:x}, Y: {:x}, Z: {:x}, T: {:x} }}",
            self.0.X, self.0.Y, self.0.Z, self.0.T
        )
    }
}

impl UpperHex for DecafPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:X}, Y: {:X}, Z: {:X}, T: {:X} }}",
            self.0.X, self.0.Y, self.0.Z, self.0.T
        )
    }
}

impl ConstantTimeEq for DecafPoint {
    fn ct_eq(&self, other: &DecafPoint) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for DecafPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        DecafPoint(ExtendedPoint::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for DecafPoint {
    fn eq(&self, other: &DecafPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for DecafPoint {}

impl From<DecafPoint> for DecafPointBytes {
    fn from(point: DecafPoint) -> DecafPointBytes {
        point.compress().0
    }
}

impl From<&DecafPoint> for DecafPointBytes {
    fn from(point: &DecafPoint) -> DecafPointBytes {
        point.compress().0
    }
}

#[cfg(feature = "alloc")]
impl From<DecafPoint> for Vec<u8> {
    fn from(point: DecafPoint) -> Vec<u8> {
        Self::from(&point)
    }
}

#[cfg(feature = "alloc")]
impl From<&DecafPoint> for Vec<u8> {
    fn from(point: &DecafPoint) -> Vec<u8> {
        point.compress().0.to_vec()
    }
}

impl TryFrom<&[u8]> for DecafPoint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        CompressedDecaf::from_slice(bytes)?.decompress()
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Vec<u8>> for DecafPoint {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::try_from(bytes.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Box<[u8]>> for DecafPoint {
    type Error = Error;

    fn try_from(bytes: Box<[u8]>) -> Result<Self> {
        Self::try_from(bytes.as_ref())
    }
}

impl TryFrom<DecafPointBytes> for DecafPoint {
    type Error = Error;

    fn try_from(bytes: DecafPointBytes) -> Result<Self> {
        CompressedDecaf(bytes).decompress()
    }
}

impl TryFrom<&DecafPointBytes> for DecafPoint {
    type Error = Error;

    fn try_from(bytes: &DecafPointBytes) -> Result<Self> {
        Self::try_from(*bytes)
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for DecafPoint {
    fn serialize<S: serdect::serde::Serializer>(
        &self,
        s: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serdect::serde::Serialize::serialize(&self.compress(), s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for DecafPoint {
    fn deserialize<D>(d: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let compressed = <CompressedDecaf as serdect::serde::Deserialize>::deserialize(d)?;
        compressed
            .decompress()
            .map_err(serdect::serde::de::Error::custom)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for DecafPoint {}

impl DecafPoint {
    /// The generator point
    pub const GENERATOR: DecafPoint = DECAF_BASEPOINT;
    /// The identity point
    pub const IDENTITY: DecafPoint = DecafPoint(ExtendedPoint::IDENTITY);

    /// Check if the point is the identity
    pub fn is_identity(&self) -> Choice {
        self.0.is_identity()
    }

    /// Double this point
    pub fn double(&self) -> DecafPoint {
        DecafPoint(self.0.double())
    }

    /// Multiply this point by an integer, which must be below the group
    /// order.
    ///
    /// Runs a constant-time Montgomery ladder; scalars `>= l` are rejected
    /// with [`Error::ScalarOutOfRange`] rather than reduced.
    pub fn scalar_mul(&self, scalar: &U448) -> Result<DecafPoint> {
        self.0.scalar_mul(scalar).map(DecafPoint)
    }

    /// Compress this point to its canonical 56-byte encoding
    pub fn compress(&self) -> CompressedDecaf {
        let X = self.0.X;
        let Z = self.0.Z;
        let T = self.0.T;

        let u1 = (X + T) * (X - T);
        // always square for points of the group
        let (_, invsqrt) = FieldElement::sqrt_ratio_m1(
            &FieldElement::ONE,
            &(u1 * FieldElement::ONE_MINUS_D * X.square()),
        );
        let ratio = (invsqrt * u1 * FieldElement::SQRT_MINUS_D).abs();
        let u2 = FieldElement::INV_SQRT_MINUS_D * ratio * Z - T;
        let s = (FieldElement::ONE_MINUS_D * invsqrt * X * u2).abs();

        CompressedDecaf(s.to_bytes())
    }

    /// Return a `DecafPoint` chosen uniformly at random using a user-provided RNG.
    ///
    /// Uses the Decaf448 map, so that the discrete log
    /// of the output point with respect to any other point
    /// is unknown.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let mut uniform_bytes = [0u8; 112];
        rng.fill_bytes(&mut uniform_bytes);
        Self::from_uniform_bytes(&uniform_bytes)
    }

    /// Construct a `DecafPoint` using `ExpandMsg`.
    ///
    /// The message is expanded to 112 bytes under the domain separation tag
    /// `dst` and fed to [`DecafPoint::from_uniform_bytes`]. Fails only when
    /// the expander rejects `dst`.
    pub fn hash<X>(msg: &[u8], dst: &[u8]) -> elliptic_curve::Result<Self>
    where
        X: for<'a> ExpandMsg<'a>,
    {
        let dst = [dst];
        let mut uniform_bytes = [0u8; 112];
        let mut expander = X::expand_message(&[msg], &dst, uniform_bytes.len())?;
        expander.fill_bytes(&mut uniform_bytes);
        Ok(Self::from_uniform_bytes(&uniform_bytes))
    }

    /// Hash `msg` with SHAKE256 under [`DEFAULT_HASH_TO_GROUP_SUITE`].
    pub fn hash_with_defaults(msg: &[u8]) -> elliptic_curve::Result<Self> {
        Self::hash::<ExpandMsgXof<Shake256>>(msg, DEFAULT_HASH_TO_GROUP_SUITE)
    }

    /// Construct a `DecafPoint` from 112 bytes of data.
    ///
    /// If the input bytes are uniformly distributed, the resulting
    /// point will be uniformly distributed over the group, and its
    /// discrete log with respect to other points is unknown.
    ///
    /// Each 56-byte half is read as a little-endian integer reduced modulo
    /// `p` (so values `>= p` are accepted), mapped to the curve, and the two
    /// results are added.
    pub fn from_uniform_bytes(bytes: &[u8; 112]) -> Self {
        let mut lo = [0u8; 56];
        let mut hi = [0u8; 56];
        lo.copy_from_slice(&bytes[..56]);
        hi.copy_from_slice(&bytes[56..]);

        let u0 = FieldElement::from_bytes(&lo);
        let u1 = FieldElement::from_bytes(&hi);
        let q0 = u0.map_to_curve_decaf448();
        let q1 = u1.map_to_curve_decaf448();
        Self(q0.add(&q1))
    }
}

/// A compressed decaf point
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct CompressedDecaf(pub DecafPointBytes);

impl Default for CompressedDecaf {
    fn default() -> CompressedDecaf {
        Self::IDENTITY
    }
}

impl Display for CompressedDecaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for CompressedDecaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl UpperHex for CompressedDecaf {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for CompressedDecaf {
    fn ct_eq(&self, other: &CompressedDecaf) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl ConditionallySelectable for CompressedDecaf {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut bytes = [0u8; 56];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(bytes)
    }
}

impl PartialEq for CompressedDecaf {
    fn eq(&self, other: &CompressedDecaf) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for CompressedDecaf {}

impl From<CompressedDecaf> for DecafPointBytes {
    fn from(compressed: CompressedDecaf) -> DecafPointBytes {
        compressed.0
    }
}

impl From<&CompressedDecaf> for DecafPointBytes {
    fn from(compressed: &CompressedDecaf) -> DecafPointBytes {
        compressed.0
    }
}

#[cfg(feature = "alloc")]
impl From<CompressedDecaf> for Vec<u8> {
    fn from(compressed: CompressedDecaf) -> Vec<u8> {
        compressed.0.to_vec()
    }
}

/// Accepts only encodings of group elements.
impl TryFrom<DecafPointBytes> for CompressedDecaf {
    type Error = Error;

    fn try_from(bytes: DecafPointBytes) -> Result<Self> {
        let compressed = CompressedDecaf(bytes);
        compressed.decompress()?;
        Ok(compressed)
    }
}

/// Accepts only encodings of group elements.
impl TryFrom<&[u8]> for CompressedDecaf {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from(Self::from_slice(bytes)?.0)
    }
}

#[cfg(feature = "alloc")]
impl TryFrom<Vec<u8>> for CompressedDecaf {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::try_from(bytes.as_slice())
    }
}

impl AsRef<DecafPointBytes> for CompressedDecaf {
    fn as_ref(&self) -> &DecafPointBytes {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for CompressedDecaf {
    fn serialize<S: serdect::serde::Serializer>(
        &self,
        s: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serdect::array::serialize_hex_lower_or_bin(&self.0, s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for CompressedDecaf {
    fn deserialize<D>(d: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut bytes = [0u8; 56];
        serdect::array::deserialize_hex_or_bin(&mut bytes, d)?;
        Self::try_from(bytes).map_err(serdect::serde::de::Error::custom)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for CompressedDecaf {}

impl CompressedDecaf {
    /// The compressed generator point
    pub const GENERATOR: Self = Self([
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x33, 0x33,
        0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33,
        0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33,
    ]);
    /// The compressed identity point
    pub const IDENTITY: Self = Self([0u8; 56]);

    /// Wrap `bytes` without validating them, failing only if the length is
    /// not 56.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        DecafPointBytes::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength)
    }

    /// Decode the group element this encoding represents.
    ///
    /// Every check runs in constant time; a failure is reported as
    /// [`Error::NonCanonical`] (`s >= p`), then [`Error::InvalidSign`]
    /// (`s` odd), then [`Error::NotOnCurve`].
    pub fn decompress(&self) -> Result<DecafPoint> {
        let s = FieldElement::from_repr(&self.0);
        let s_is_canonical = s.is_some();
        let s = s.unwrap_or(FieldElement::ZERO);
        let s_is_negative = s.is_negative();

        let ss = s.square();
        let u1 = FieldElement::ONE + ss;
        let u1_sqr = u1.square();
        let u2 = u1_sqr + FieldElement::NEG_FOUR_D * ss;
        let (was_square, invsqrt) =
            FieldElement::sqrt_ratio_m1(&FieldElement::ONE, &(u2 * u1_sqr));

        let u3 = (s.double() * invsqrt * u1 * FieldElement::SQRT_MINUS_D).abs();
        let X = u3 * invsqrt * u2 * FieldElement::INV_SQRT_MINUS_D;
        let Y = (FieldElement::ONE - ss) * invsqrt * u1;
        let T = X * Y;
        let point = DecafPoint(ExtendedPoint {
            X,
            Y,
            Z: FieldElement::ONE,
            T,
        });

        if !bool::from(s_is_canonical) {
            Err(Error::NonCanonical)
        } else if bool::from(s_is_negative) {
            Err(Error::InvalidSign)
        } else if !bool::from(was_square) {
            Err(Error::NotOnCurve)
        } else {
            Ok(point)
        }
    }

    /// Get the bytes of this compressed point
    pub fn as_bytes(&self) -> &DecafPointBytes {
        &self.0
    }

    /// Copy the bytes of this compressed point
    pub fn to_bytes(&self) -> DecafPointBytes {
        self.0
    }
}
