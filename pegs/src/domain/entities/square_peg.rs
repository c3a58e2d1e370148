//! Square peg entity.

use crate::domain::value_objects::SideLength;

/// A square peg, described by the length of its sides.
///
/// `SquarePeg` does not implement [`RoundPeg`](crate::RoundPeg); wrap it in a
/// [`SquarePegAdapter`](crate::SquarePegAdapter) to use it as one.
///
/// # Examples
///
/// ```
/// use pegs::domain::SquarePeg;
///
/// let peg = SquarePeg::new(4);
/// assert_eq!(peg.side_length().value(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    side_length: SideLength,
}

impl SquarePeg {
    /// Create a square peg with the given side length.
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
