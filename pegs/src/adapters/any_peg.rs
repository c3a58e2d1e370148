//! Owned, closed set of every peg variant.

use crate::domain::{
    ports::RoundPeg,
    value_objects::{PegKind, Radius, SideLength},
    HexagonPeg, SquarePeg,
};

use super::{FixedRoundPeg, HexagonPegAdapter, SquarePegAdapter};

/// Any of the peg variants, without boxing.
///
/// Useful when pegs are built from runtime input (e.g. the command line)
/// and stored in a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyPeg {
    /// A peg that is round already.
    Round(FixedRoundPeg),
    /// An adapted square peg.
    Square(SquarePegAdapter),
    /// An adapted hexagonal peg.
    Hexagon(HexagonPegAdapter),
}

impl AnyPeg {
    /// Build a peg of the given kind from a single dimension.
    ///
    /// For [`PegKind::Round`] the dimension is the radius itself, truncated
    /// toward zero. For the other kinds it is the side length of the shape
    /// that gets wrapped in the matching adapter.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegs::{AnyPeg, PegKind, RoundPeg, SideLength};
    ///
    /// let peg = AnyPeg::from_kind(PegKind::Hexagon, SideLength::new(6.0));
    /// assert_eq!(peg.radius().value(), 5);
    /// ```
    pub fn from_kind(kind: PegKind, dimension: SideLength) -> Self {
        match kind {
            PegKind::Round => {
                AnyPeg::Round(FixedRoundPeg::new(Radius::truncate(dimension.value())))
            }
            PegKind::Square => AnyPeg::Square(SquarePegAdapter::new(SquarePeg::new(dimension))),
            PegKind::Hexagon => {
                AnyPeg::Hexagon(HexagonPegAdapter::new(HexagonPeg::new(dimension)))
            }
        }
    }

    /// The kind of peg this is.
    pub const fn kind(&self) -> PegKind {
        match self {
            AnyPeg::Round(_) => PegKind::Round,
            AnyPeg::Square(_) => PegKind::Square,
            AnyPeg::Hexagon(_) => PegKind::Hexagon,
        }
    }

    /// Output label for this peg's radius.
    pub const fn label(&self) -> &'static str {
        self.kind().label()
    }
}

impl RoundPeg for AnyPeg {
    fn radius(&self) -> Radius {
        match self {
            AnyPeg::Round(peg) => peg.radius(),
            AnyPeg::Square(peg) => peg.radius(),
            AnyPeg::Hexagon(peg) => peg.radius(),
        }
    }
}

impl From<FixedRoundPeg> for AnyPeg {
    fn from(peg: FixedRoundPeg) -> Self {
        AnyPeg::Round(peg)
    }
}

impl From<SquarePegAdapter> for AnyPeg {
    fn from(peg: SquarePegAdapter) -> Self {
        AnyPeg::Square(peg)
    }
}

impl From<HexagonPegAdapter> for AnyPeg {
    fn from(peg: HexagonPegAdapter) -> Self {
        AnyPeg::Hexagon(peg)
    }
}
