//! RoundPeg port - the single capability every peg exposes.

use crate::domain::value_objects::Radius;

/// Anything that can report the radius of a round peg.
///
/// # Hexagonal Architecture
///
/// ```text
/// ┌─────────────────────┐
/// │   Callers / Driver  │
/// └──────────┬──────────┘
///            │ depends on
///            ▼
/// ┌─────────────────────┐
/// │   RoundPeg Port     │  ◄── This trait
/// └──────────┬──────────┘
///            │ implemented by
///            ▼
/// ┌─────────────────────────────────────────┐
/// │  Adapter Layer                          │
/// │  FixedRoundPeg, SquarePegAdapter,       │
/// │  HexagonPegAdapter, AnyPeg              │
/// └─────────────────────────────────────────┘
/// ```
///
/// # Contract
///
/// - The radius is in the same unit as the dimension it was derived from.
/// - `radius` is pure: repeated calls on the same value return the same
///   result, and it never fails or panics.
///
/// The trait is object safe, and it is implemented for `&T` and `Box<T>` so
/// trait objects can be passed anywhere an `impl RoundPeg` is expected.
///
/// # Examples
///
/// ```
/// use pegs::{RoundPeg, SquarePeg, SquarePegAdapter};
///
/// fn describe(peg: &dyn RoundPeg) -> String {
///     format!("radius {}", peg.radius())
/// }
///
/// let adapter = SquarePegAdapter::new(SquarePeg::new(4));
/// assert_eq!(describe(&adapter), "radius 2");
/// ```
pub trait RoundPeg {
    /// Get the radius of this peg.
    fn radius(&self) -> Radius;
}

impl<T: RoundPeg + ?Sized> RoundPeg for &T {
    #[inline]
    fn radius(&self) -> Radius {
        (**self).radius()
    }
}

impl<T: RoundPeg + ?Sized> RoundPeg for Box<T> {
    #[inline]
    fn radius(&self) -> Radius {
        (**self).radius()
    }
}
