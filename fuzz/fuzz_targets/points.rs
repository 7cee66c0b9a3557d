#![no_main]
use ciborium::de;
use decaf448::{CompressedDecaf, DecafPoint, DecafScalar, Error};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

fn test_group(p1: DecafPoint, p2: DecafPoint, s: DecafScalar) {
    let sum = p1 + p2;
    let scalar_mul = p1 * s;

    // Test that addition and doubling are consistent
    assert!(p1.double() == p1 + p1 - DecafPoint::IDENTITY);

    // Test that negation works correctly
    assert!(sum + (-sum) == DecafPoint::IDENTITY);

    // Test scalar multiplication distributive property
    assert!(scalar_mul + scalar_mul == p1 * (s + s));
    assert_eq!(p1.scalar_mul(&s.to_uint()), Ok(scalar_mul));
}

fn test_decode(bytes: [u8; 56]) -> Option<DecafPoint> {
    match CompressedDecaf(bytes).decompress() {
        Ok(point) => {
            // accepted encodings are canonical
            assert_eq!(point.compress().0, bytes);
            Some(point)
        }
        Err(Error::InvalidSign) => {
            assert_eq!(bytes[0] & 1, 1);
            None
        }
        Err(Error::NonCanonical) | Err(Error::NotOnCurve) => None,
        Err(e) => panic!("unexpected decode error: {e}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 264 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    let p1 = test_decode(data[32..88].try_into().unwrap())
        .unwrap_or_else(|| DecafPoint::random(&mut rng));
    let p2 = DecafPoint::from_uniform_bytes(&data[88..200].try_into().unwrap());
    let p3 = de::from_reader(&data[200..200 + usize::from(data[3] & 0x3f)])
        .unwrap_or(DecafPoint::GENERATOR);
    let p4 = DecafPoint::try_from(&data[..usize::from(data[4])]).unwrap_or(DecafPoint::IDENTITY);
    let scalar = DecafScalar::from_canonical_bytes(&data[200..256].try_into().unwrap())
        .unwrap_or_else(|_| DecafScalar::random(&mut rng));

    test_group(p1 + p3, p2 + p4, scalar);
});
