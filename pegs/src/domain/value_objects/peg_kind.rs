//! Peg kind value object.

use core::fmt;
use core::str::FromStr;

use crate::domain::error::ShapeError;

/// The shape of a peg, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegKind {
    /// A peg that is already round.
    Round,
    /// A square peg, adapted through its side length.
    Square,
    /// A regular hexagonal peg, adapted through its side length.
    Hexagon,
}

impl PegKind {
    /// All kinds, in the order the demonstration driver builds them.
    pub const ALL: [PegKind; 3] = [PegKind::Round, PegKind::Square, PegKind::Hexagon];

    /// Output label used when printing a radius for this kind.
    pub const fn label(self) -> &'static str {
        match self {
            PegKind::Round => "Round Peg Radius",
            PegKind::Square => "Square Peg Adapter Radius",
            PegKind::Hexagon => "Hexagon Peg Adapter Radius",
        }
    }

    /// Lowercase name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            PegKind::Round => "round",
            PegKind::Square => "square",
            PegKind::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for PegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PegKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round" | "circle" => Ok(PegKind::Round),
            "square" => Ok(PegKind::Square),
            "hexagon" | "hex" => Ok(PegKind::Hexagon),
            _ => Err(ShapeError::UnknownKind(s.trim().to_string())),
        }
    }
}
