//! The Decaf448 prime-order group: canonical encodings, the one-way map and
//! the group law on equivalence classes of curve points.

mod ops;
mod points;

pub use points::{CompressedDecaf, DEFAULT_HASH_TO_GROUP_SUITE, DecafPoint, DecafPointBytes};
