#![no_main]
use decaf448::{DecafScalar, FieldElement};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

fn test_field(fe1: FieldElement, fe2: FieldElement, fe3: FieldElement) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + FieldElement::ZERO, fe1);
    assert_eq!(fe1 * FieldElement::ONE, fe1);
    assert_eq!(fe1 - fe1, FieldElement::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);

    // Inverse, square, sqrt_ratio
    assert_eq!(fe1 + (-fe1), FieldElement::ZERO);
    if !bool::from(fe1.is_zero()) {
        assert_eq!(fe1 * fe1.invert(), FieldElement::ONE);
    }
    let (was_square, root) = FieldElement::sqrt_ratio_m1(&fe1.square(), &FieldElement::ONE);
    assert!(bool::from(was_square));
    assert_eq!(root, fe1.abs());
    assert!(!bool::from(root.is_negative()));

    // Encoding
    assert_eq!(FieldElement::from_bytes(&fe1.to_bytes()), fe1);
}

fn test_scalar(s1: DecafScalar, s2: DecafScalar) {
    assert_eq!(s1 + s2, s2 + s1);
    assert_eq!(s1 - s2 + s2, s1);
    assert_eq!(s1 + (-s1), DecafScalar::ZERO);
    assert_eq!(DecafScalar::from_canonical_bytes(&s1.to_bytes()), Ok(s1));
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 200 {
        return;
    }

    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    let fe1 = FieldElement::from_bytes(&data[32..88].try_into().unwrap());
    let fe2 = FieldElement::from_be_bytes(&data[88..144].try_into().unwrap());
    let fe3 = FieldElement::from_repr(&data[144..200].try_into().unwrap())
        .unwrap_or(FieldElement::TWO);
    test_field(fe1, fe2, fe3);

    let s1 = DecafScalar::from_canonical_bytes(&data[32..88].try_into().unwrap())
        .unwrap_or_else(|_| DecafScalar::random(&mut rng));
    let s2 = DecafScalar::random(&mut rng);
    test_scalar(s1, s2);
});
