use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::error::Error as StdError;

/// Result type with the `decaf448` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Decoding and scalar errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Encoding is not exactly 56 bytes long
    InvalidLength,
    /// Encoded integer is not below the field modulus
    NonCanonical,
    /// Encoded integer is negative (odd)
    InvalidSign,
    /// Encoding does not describe a group element
    NotOnCurve,
    /// Scalar is not below the group order
    ScalarOutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength => write!(f, "encoding must be exactly 56 bytes"),
            Error::NonCanonical => write!(f, "encoding is not a canonical field element"),
            Error::InvalidSign => write!(f, "encoding is a negative field element"),
            Error::NotOnCurve => write!(f, "encoding does not describe a group element"),
            Error::ScalarOutOfRange => write!(f, "scalar is not below the group order"),
        }
    }
}

#[cfg(feature = "std")]
impl StdError for Error {}
