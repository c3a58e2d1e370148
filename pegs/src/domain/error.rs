//! Domain-level errors.
//!
//! Radius conversions cannot fail. These errors only arise when pegs are
//! described as text, e.g. on the command line.

use core::fmt;

/// Errors that can occur while reading a peg description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShapeError {
    /// The peg kind is not one of `round`, `square` or `hexagon`.
    UnknownKind(String),

    /// The dimension is not a number.
    InvalidDimension(String),

    /// The dimension parsed to infinity or NaN.
    NonFiniteDimension,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(
                f,
                "Unknown peg kind '{}' (expected round, square or hexagon)",
                kind
            ),
            Self::InvalidDimension(raw) => write!(f, "Invalid dimension '{}': not a number", raw),
            Self::NonFiniteDimension => write!(f, "Dimension must be a finite number"),
        }
    }
}

impl core::error::Error for ShapeError {}
