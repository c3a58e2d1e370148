//! Side length value object.

use core::fmt;
use core::str::FromStr;

use crate::domain::error::ShapeError;

/// The length of one side of a polygonal peg.
///
/// Any real value is admitted, including zero and negative lengths; they
/// simply propagate into the radius conversion. Only parsing from text
/// rejects input (non-numbers and non-finite values).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SideLength(f64);

impl SideLength {
    /// Create a new side length.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegs::domain::SideLength;
    ///
    /// let side = SideLength::new(4.0);
    /// assert_eq!(side.value(), 4.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SideLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for SideLength {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for SideLength {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<u32> for SideLength {
    fn from(value: u32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<SideLength> for f64 {
    fn from(side: SideLength) -> Self {
        side.value()
    }
}

impl FromStr for SideLength {
    type Err = ShapeError;

    /// Parse a side length such as `"4"` or `"2.5"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegs::domain::SideLength;
    ///
    /// let side: SideLength = "6".parse().unwrap();
    /// assert_eq!(side.value(), 6.0);
    /// assert!("six".parse::<SideLength>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ShapeError::InvalidDimension(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(ShapeError::NonFiniteDimension);
        }

        Ok(Self(value))
    }
}
