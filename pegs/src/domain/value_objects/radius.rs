//! Integer radius value object.

use core::fmt;

/// An integer radius, as reported by every [`RoundPeg`](crate::RoundPeg).
///
/// Radii are measured in the same unit as the dimension they were derived
/// from. No sign check is performed: a negative side length yields a
/// negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Radius(i32);

impl Radius {
    /// The zero radius.
    pub const ZERO: Self = Self(0);

    /// Create a new radius.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegs::domain::Radius;
    ///
    /// let radius = Radius::new(3);
    /// assert_eq!(radius.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Convert a real-valued radius to an integer one.
    ///
    /// The fractional part is discarded toward zero, never rounded. Values
    /// outside the `i32` range saturate and `NaN` becomes zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegs::domain::Radius;
    ///
    /// assert_eq!(Radius::truncate(2.828).value(), 2);
    /// assert_eq!(Radius::truncate(-2.828).value(), -2);
    /// assert_eq!(Radius::truncate(f64::NAN).value(), 0);
    /// ```
    #[inline]
    pub fn truncate(value: f64) -> Self {
        Self(value as i32)
    }

    /// Get the underlying integer value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Radius {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Radius> for i32 {
    fn from(radius: Radius) -> Self {
        radius.value()
    }
}
