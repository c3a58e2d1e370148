//! Side-length to radius conversions.
//!
//! Both conversions compute the real-valued equivalent radius and then
//! truncate it toward zero through [`Radius::truncate`]. Inputs are not
//! validated: zero yields zero and negative lengths yield non-positive radii.

use core::f64::consts::SQRT_2;

use crate::domain::value_objects::{Radius, SideLength};

/// `sqrt(3)`. `core::f64::consts::SQRT_3` is not stable yet.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Equivalent radius of a square peg: `side * sqrt(2) / 2`, truncated.
///
/// # Examples
///
/// ```
/// use pegs::domain::{geometry, SideLength};
///
/// let radius = geometry::square_equivalent_radius(SideLength::new(4.0));
/// assert_eq!(radius.value(), 2);
/// ```
#[inline]
pub fn square_equivalent_radius(side: SideLength) -> Radius {
    Radius::truncate(side.value() * SQRT_2 / 2.0)
}

/// Equivalent radius of a regular hexagonal peg: `side * sqrt(3) / 2`, truncated.
///
/// # Examples
///
/// ```
/// use pegs::domain::{geometry, SideLength};
///
/// let radius = geometry::hexagon_equivalent_radius(SideLength::new(6.0));
/// assert_eq!(radius.value(), 5);
/// ```
#[inline]
pub fn hexagon_equivalent_radius(side: SideLength) -> Radius {
    Radius::truncate(side.value() * SQRT_3 / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_3_constant() {
        assert_eq!(SQRT_3, 3.0_f64.sqrt());
    }

    #[test]
    fn test_square_radius() {
        assert_eq!(square_equivalent_radius(SideLength::new(4.0)), Radius::new(2));
        assert_eq!(square_equivalent_radius(SideLength::new(10.0)), Radius::new(7));
        assert_eq!(square_equivalent_radius(SideLength::new(1.0)), Radius::new(0));
    }

    #[test]
    fn test_hexagon_radius() {
        assert_eq!(hexagon_equivalent_radius(SideLength::new(6.0)), Radius::new(5));
        assert_eq!(hexagon_equivalent_radius(SideLength::new(2.0)), Radius::new(1));
        assert_eq!(hexagon_equivalent_radius(SideLength::new(100.0)), Radius::new(86));
    }

    #[test]
    fn test_zero_side() {
        assert_eq!(square_equivalent_radius(SideLength::new(0.0)), Radius::ZERO);
        assert_eq!(hexagon_equivalent_radius(SideLength::new(0.0)), Radius::ZERO);
    }

    #[test]
    fn test_negative_side_truncates_toward_zero() {
        // -4 * sqrt(2) / 2 = -2.83
        assert_eq!(square_equivalent_radius(SideLength::new(-4.0)), Radius::new(-2));
        // -6 * sqrt(3) / 2 = -5.20
        assert_eq!(hexagon_equivalent_radius(SideLength::new(-6.0)), Radius::new(-5));
    }

    #[test]
    fn test_fractional_side() {
        // 2.9 * sqrt(2) / 2 = 2.05
        assert_eq!(square_equivalent_radius(SideLength::new(2.9)), Radius::new(2));
    }
}
