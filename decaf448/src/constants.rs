use crate::curve::extended::ExtendedPoint;
use crate::decaf::DecafPoint;
use crate::field::{FieldElement, ResidueType};
use elliptic_curve::bigint::U448;

/// The Decaf448 generator, encoded as `66…66 33…33`.
///
/// This is twice the Ed448 base point, written in extended coordinates with
/// `Z = 1`.
pub const DECAF_BASEPOINT: DecafPoint = DecafPoint(ExtendedPoint {
    X: FieldElement(ResidueType::new(&U448::from_be_hex(
        "55555555555555555555555555555555555555555555555555555555aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    ))),
    Y: FieldElement(ResidueType::new(&U448::from_be_hex(
        "51fa169cb528fb724ca629dfaf793d4ffc91285fca77b228481c928c75273b47f29a9a7cc5d5cf6744434d412e325f9425150432156c7912",
    ))),
    Z: FieldElement::ONE,
    T: FieldElement(ResidueType::new(&U448::from_be_hex(
        "696d84643374bace9d70983a12aa9d461da74d2d5c35e8d97ba72c3aba4450a5d29274229bd22c1d5e3a6474ee4ffb0e7a9e200a28eee402",
    ))),
});
