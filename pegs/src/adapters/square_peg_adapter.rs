//! Adapter exposing a `SquarePeg` through the `RoundPeg` port.

use crate::domain::{geometry, ports::RoundPeg, value_objects::Radius, SquarePeg};

/// Adapter that lets a [`SquarePeg`] stand in for a round one.
///
/// The adapter owns the square peg and reports the radius
/// `side * sqrt(2) / 2`, truncated toward zero.
///
/// # Examples
///
/// ```
/// use pegs::{RoundPeg, SquarePeg, SquarePegAdapter};
///
/// let adapter = SquarePegAdapter::new(SquarePeg::new(4));
/// assert_eq!(adapter.radius().value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    /// Create a new adapter wrapping the given square peg.
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }

    /// Get a reference to the wrapped peg.
    pub fn peg(&self) -> &SquarePeg {
        &self.peg
    }

    /// Consume the adapter and return the wrapped peg.
    pub fn into_inner(self) -> SquarePeg {
        self.peg
    }
}

impl From<SquarePeg> for SquarePegAdapter {
    fn from(peg: SquarePeg) -> Self {
        Self::new(peg)
    }
}

impl RoundPeg for SquarePegAdapter {
    fn radius(&self) -> Radius {
        let radius = geometry::square_equivalent_radius(self.peg.side_length());

        #[cfg(feature = "log")]
        log::trace!(
            "square peg side {} -> radius {}",
            self.peg.side_length(),
            radius
        );

        radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_adapter_radius() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(4));
        assert_eq!(adapter.radius(), Radius::new(2));
    }

    #[test]
    fn test_square_adapter_zero_side() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(0));
        assert_eq!(adapter.radius(), Radius::ZERO);
    }

    #[test]
    fn test_square_adapter_is_idempotent() {
        let adapter = SquarePegAdapter::new(SquarePeg::new(13.7));
        let first = adapter.radius();
        assert_eq!(adapter.radius(), first);
        assert_eq!(adapter.radius(), first);
    }

    #[test]
    fn test_square_adapter_gives_back_peg() {
        let peg = SquarePeg::new(9);
        let adapter = SquarePegAdapter::from(peg);
        assert_eq!(adapter.peg(), &peg);
        assert_eq!(adapter.into_inner(), peg);
    }
}
