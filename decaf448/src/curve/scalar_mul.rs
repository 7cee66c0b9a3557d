use crate::curve::extended::ExtendedPoint;
use elliptic_curve::bigint::{Encoding, U448};
use subtle::{Choice, ConditionallySelectable};

/// Bit length of the group order.
const SCALAR_BITS: usize = 446;

/// Montgomery ladder over the low 446 bits of `scalar`, most significant bit
/// first.
///
/// Each step performs one addition and one doubling regardless of the bit,
/// and the two accumulators are exchanged with constant-time swaps. Callers
/// ensure `scalar < l`.
pub(crate) fn montgomery_ladder(point: &ExtendedPoint, scalar: &U448) -> ExtendedPoint {
    let bytes = scalar.to_le_bytes();
    let mut r0 = ExtendedPoint::IDENTITY;
    let mut r1 = *point;

    // invariant: r1 = r0 + point
    for i in (0..SCALAR_BITS).rev() {
        let bit = Choice::from((bytes[i >> 3] >> (i & 7)) & 1);
        ExtendedPoint::conditional_swap(&mut r0, &mut r1, bit);
        r1 = r0.add(&r1);
        r0 = r0.double();
        ExtendedPoint::conditional_swap(&mut r0, &mut r1, bit);
    }

    r0
}
