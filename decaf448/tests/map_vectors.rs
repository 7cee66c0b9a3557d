//! One-way map conformance vectors.

use decaf448::{CompressedDecaf, DecafPoint};
use serde::Deserialize;

const VECTORS: &str = include_str!("data/decaf448_map.json");

#[derive(Deserialize)]
struct TestGroup {
    group: String,
    hash: String,
    vectors: Vec<TestVector>,
}

#[derive(Deserialize)]
struct TestVector {
    #[serde(rename = "in")]
    input: String,
    #[serde(rename = "out")]
    output: String,
}

fn load() -> TestGroup {
    serde_json::from_str(VECTORS).expect("fixture is valid JSON")
}

#[test]
fn fixture_header() {
    let group = load();
    assert_eq!(group.group, "decaf448");
    assert_eq!(group.hash, "SHAKE256");
    assert!(!group.vectors.is_empty());
}

#[test]
fn one_way_map() {
    for (i, vector) in load().vectors.iter().enumerate() {
        let input: [u8; 112] = hex::decode(&vector.input)
            .unwrap()
            .try_into()
            .expect("112-byte input");
        let output: [u8; 56] = hex::decode(&vector.output)
            .unwrap()
            .try_into()
            .expect("56-byte output");

        let point = DecafPoint::from_uniform_bytes(&input);
        assert_eq!(point.compress().0, output, "vector {i}");

        // mapping is deterministic
        assert_eq!(DecafPoint::from_uniform_bytes(&input).compress().0, output);

        // decoding and re-encoding the output is the identity
        let decoded = CompressedDecaf(output).decompress().unwrap();
        assert_eq!(decoded, point, "vector {i}");
        assert_eq!(decoded.compress().0, output, "vector {i}");
    }
}

#[test]
fn zero_input_maps_to_identity() {
    let point = DecafPoint::from_uniform_bytes(&[0u8; 112]);
    assert_eq!(point, DecafPoint::IDENTITY);
    assert_eq!(point.compress(), CompressedDecaf::IDENTITY);
}

#[test]
fn non_canonical_halves_are_reduced() {
    // p + 1 and 1 are the same field element
    let mut p_plus_one = [0u8; 112];
    p_plus_one[28..56].fill(0xff);
    let mut one = [0u8; 112];
    one[0] = 1;

    assert_eq!(
        DecafPoint::from_uniform_bytes(&p_plus_one).compress(),
        DecafPoint::from_uniform_bytes(&one).compress()
    );
}
