//! Group law and encoding properties of Decaf448.

use decaf448::elliptic_curve::bigint::{Encoding, U448};
use decaf448::{CompressedDecaf, DecafPoint, DecafScalar, Error, FIELD_MODULUS, ORDER};
use hex_literal::hex;
use proptest::{prelude::*, prop_compose, proptest};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

prop_compose! {
    fn point()(seed in any::<[u8; 32]>()) -> DecafPoint {
        DecafPoint::random(&mut ChaCha8Rng::from_seed(seed))
    }
}

prop_compose! {
    fn scalar()(seed in any::<[u8; 32]>()) -> DecafScalar {
        DecafScalar::random(&mut ChaCha8Rng::from_seed(seed))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn identity_and_negation(p in point()) {
        prop_assert_eq!(p + DecafPoint::IDENTITY, p);
        prop_assert_eq!(DecafPoint::IDENTITY + p, p);
        prop_assert_eq!(p + (-p), DecafPoint::IDENTITY);
        prop_assert!(bool::from((p - p).is_identity()));
    }

    #[test]
    fn double_is_add(p in point()) {
        prop_assert_eq!(p.double(), p + p);
        prop_assert_eq!(p.double().compress(), (p + p).compress());
    }

    #[test]
    fn addition_commutes_and_associates(a in point(), b in point(), c in point()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn encoding_round_trips(p in point()) {
        let compressed = p.compress();
        let decoded = compressed.decompress().unwrap();
        prop_assert_eq!(decoded, p);
        prop_assert_eq!(decoded.compress(), compressed);
        // encodings are never negative
        prop_assert_eq!(compressed.0[0] & 1, 0);
    }

    #[test]
    fn decode_accepts_only_canonical_encodings(bytes in any::<[u8; 32]>(), tail in any::<[u8; 24]>()) {
        let mut encoding = [0u8; 56];
        encoding[..32].copy_from_slice(&bytes);
        encoding[32..].copy_from_slice(&tail);
        if let Ok(p) = CompressedDecaf(encoding).decompress() {
            prop_assert_eq!(p.compress().0, encoding);
        }
    }

    #[test]
    fn scalar_mul_is_linear(p in point(), s1 in scalar(), s2 in scalar()) {
        let lhs = p.scalar_mul(&(s1 + s2).to_uint()).unwrap();
        let rhs = p.scalar_mul(&s1.to_uint()).unwrap() + p.scalar_mul(&s2.to_uint()).unwrap();
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(p * (s1 + s2), p * s1 + p * s2);
    }

    #[test]
    fn scalar_mul_edges(p in point()) {
        prop_assert_eq!(p.scalar_mul(&U448::ZERO), Ok(DecafPoint::IDENTITY));
        prop_assert_eq!(p.scalar_mul(&U448::ONE), Ok(p));
        prop_assert_eq!(p.scalar_mul(&ORDER), Err(Error::ScalarOutOfRange));
        prop_assert_eq!(
            p.scalar_mul(&ORDER.wrapping_sub(&U448::ONE)),
            Ok(-p)
        );
    }

    #[test]
    fn one_way_map_is_deterministic(seed in any::<[u8; 32]>()) {
        let p1 = DecafPoint::random(&mut ChaCha8Rng::from_seed(seed));
        let p2 = DecafPoint::random(&mut ChaCha8Rng::from_seed(seed));
        prop_assert_eq!(p1.compress(), p2.compress());
    }
}

#[test]
fn generator_has_prime_order() {
    let g = DecafPoint::GENERATOR;
    let l_minus_one = ORDER.wrapping_sub(&U448::ONE);
    let minus_g = g.scalar_mul(&l_minus_one).unwrap();
    assert_eq!(minus_g + g, DecafPoint::IDENTITY);
    assert_eq!(g.compress(), CompressedDecaf::GENERATOR);
}

#[test]
fn rejects_wrong_lengths() {
    for len in [0, 1, 32, 55, 57, 112] {
        let bytes = vec![0u8; len];
        assert_eq!(DecafPoint::try_from(&bytes[..]), Err(Error::InvalidLength));
        assert_eq!(CompressedDecaf::from_slice(&bytes), Err(Error::InvalidLength));
    }
}

#[test]
fn rejects_non_canonical() {
    assert_eq!(
        CompressedDecaf([0xff; 56]).decompress(),
        Err(Error::NonCanonical)
    );

    // p itself reduces to zero but is not canonical
    let p: [u8; 56] = FIELD_MODULUS.to_le_bytes();
    assert_eq!(CompressedDecaf(p).decompress(), Err(Error::NonCanonical));

    // p + 2 is a valid representative of 2, still rejected
    let p_plus_two: [u8; 56] = FIELD_MODULUS.wrapping_add(&U448::from_u64(2)).to_le_bytes();
    assert_eq!(
        CompressedDecaf(p_plus_two).decompress(),
        Err(Error::NonCanonical)
    );
}

#[test]
fn rejects_negative() {
    let minus_one = hex!(
        "feffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "feffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    );
    // p - 1 is even, hence non-negative; p - 2 is odd
    let mut minus_two = minus_one;
    minus_two[0] = 0xfd;

    assert_eq!(CompressedDecaf(minus_two).decompress(), Err(Error::InvalidSign));

    let mut one = [0u8; 56];
    one[0] = 1;
    assert_eq!(CompressedDecaf(one).decompress(), Err(Error::InvalidSign));
}

#[test]
fn rejects_non_square() {
    let mut four = [0u8; 56];
    four[0] = 4;
    assert_eq!(CompressedDecaf(four).decompress(), Err(Error::NotOnCurve));
}

#[test]
fn scalar_bytes_round_trip() {
    let s = DecafScalar::from(1234567u64);
    let bytes = s.to_bytes();
    assert_eq!(DecafScalar::from_canonical_bytes(&bytes), Ok(s));
    assert_eq!(
        DecafScalar::from_canonical_bytes(&ORDER.to_le_bytes()),
        Err(Error::ScalarOutOfRange)
    );
}
