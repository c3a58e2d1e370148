//! Round hole entity.

use crate::domain::value_objects::Radius;

/// A round hole of fixed radius.
///
/// Only the radius is modelled; nothing in this crate checks whether a peg
/// fits a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundHole {
    radius: Radius,
}

impl RoundHole {
    /// Create a hole with the given radius.
    pub fn new(radius: impl Into<Radius>) -> Self {
        Self {
            radius: radius.into(),
        }
    }

    /// Get the radius of the hole.
    #[inline]
    pub const fn radius(&self) -> Radius {
        self.radius
    }
}
