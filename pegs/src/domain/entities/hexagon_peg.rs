//! Hexagon peg entity.

use crate::domain::value_objects::SideLength;

/// A regular hexagonal peg, described by the length of its sides.
///
/// Use a [`HexagonPegAdapter`](crate::HexagonPegAdapter) to treat it as a
/// [`RoundPeg`](crate::RoundPeg).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonPeg {
    side_length: SideLength,
}

impl HexagonPeg {
    /// Create a hexagonal peg with the given side length.
    pub fn new(side_length: impl Into<SideLength>) -> Self {
        Self {
            side_length: side_length.into(),
        }
    }

    /// Get the side length.
    #[inline]
    pub const fn side_length(&self) -> SideLength {
        self.side_length
    }
}
