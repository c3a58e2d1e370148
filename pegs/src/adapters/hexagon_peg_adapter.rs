//! Adapter exposing a `HexagonPeg` through the `RoundPeg` port.

use crate::domain::{geometry, ports::RoundPeg, value_objects::Radius, HexagonPeg};

/// Adapter that lets a [`HexagonPeg`] stand in for a round one.
///
/// Reports `side * sqrt(3) / 2`, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonPegAdapter {
    peg: HexagonPeg,
}

impl HexagonPegAdapter {
    /// Create a new adapter wrapping the given hexagonal peg.
    pub fn new(peg: HexagonPeg) -> Self {
        Self { peg }
    }

    /// Get a reference to the wrapped peg.
    pub fn peg(&self) -> &HexagonPeg {
        &self.peg
    }

    /// Consume the adapter and return the wrapped peg.
    pub fn into_inner(self) -> HexagonPeg {
        self.peg
    }
}

impl From<HexagonPeg> for HexagonPegAdapter {
    fn from(peg: HexagonPeg) -> Self {
        Self::new(peg)
    }
}

impl RoundPeg for HexagonPegAdapter {
    fn radius(&self) -> Radius {
        let radius = geometry::hexagon_equivalent_radius(self.peg.side_length());

        #[cfg(feature = "log")]
        log::trace!(
            "hexagon peg side {} -> radius {}",
            self.peg.side_length(),
            radius
        );

        radius
    }
}
