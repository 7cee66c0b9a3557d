pub(crate) mod extended;
pub(crate) mod scalar_mul;
