mod element;
mod scalar;

pub use element::FieldElement;
pub use scalar::{DecafScalar, ORDER, ScalarBytes};

use elliptic_curve::bigint::{
    U448, impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
};

impl_modulus!(
    MODULUS,
    U448,
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
);
pub(crate) type ResidueType = Residue<MODULUS, { MODULUS::LIMBS }>;

/// The field modulus `p = 2^448 - 2^224 - 1`.
pub const FIELD_MODULUS: U448 = MODULUS::MODULUS;
