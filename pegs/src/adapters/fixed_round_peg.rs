//! A peg that is round to begin with.

use crate::domain::{ports::RoundPeg, value_objects::Radius};

/// Direct implementation of [`RoundPeg`] with a constant radius.
///
/// # Examples
///
/// ```
/// use pegs::{FixedRoundPeg, RoundPeg};
///
/// let peg = FixedRoundPeg::new(3);
/// assert_eq!(peg.radius().value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoundPeg {
    radius: Radius,
}

impl FixedRoundPeg {
    /// Create a round peg with the given radius.
    pub fn new(radius: impl Into<Radius>) -> Self {
        Self {
            radius: radius.into(),
        }
    }
}

impl RoundPeg for FixedRoundPeg {
    #[inline]
    fn radius(&self) -> Radius {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_radius() {
        assert_eq!(FixedRoundPeg::new(3).radius(), Radius::new(3));
        assert_eq!(FixedRoundPeg::new(Radius::ZERO).radius(), Radius::ZERO);
    }
}
