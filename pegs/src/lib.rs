//! Round peg adapters with hexagonal architecture.
//!
//! This crate shows square and hexagonal pegs being used where a round peg is
//! expected. Each shape is wrapped in an adapter that implements the
//! [`RoundPeg`] port by converting the shape's side length to an equivalent
//! radius.
//!
//! # Architecture
//!
//! ## Domain Layer (`domain`)
//! Pure data and arithmetic:
//! - **Entities**: `SquarePeg`, `HexagonPeg`, `RoundHole`
//! - **Value Objects**: `SideLength`, `Radius`, `PegKind`
//! - **Geometry**: `square_equivalent_radius`, `hexagon_equivalent_radius`
//! - **Ports**: `RoundPeg`
//!
//! ## Adapter Layer (`adapters`)
//! Implementations of the `RoundPeg` port:
//! - **`SquarePegAdapter`**: `side * sqrt(2) / 2`
//! - **`HexagonPegAdapter`**: `side * sqrt(3) / 2`
//! - **`FixedRoundPeg`**: a constant radius
//! - **`AnyPeg`**: any of the above, chosen at runtime
//!
//! # Quick Start
//!
//! ```
//! use pegs::{FixedRoundPeg, HexagonPeg, HexagonPegAdapter, RoundPeg, SquarePeg, SquarePegAdapter};
//!
//! let pegs: [&dyn RoundPeg; 3] = [
//!     &FixedRoundPeg::new(3),
//!     &SquarePegAdapter::new(SquarePeg::new(4)),
//!     &HexagonPegAdapter::new(HexagonPeg::new(6)),
//! ];
//!
//! let radii: Vec<i32> = pegs.iter().map(|peg| peg.radius().value()).collect();
//! assert_eq!(radii, [3, 2, 5]);
//! ```
//!
//! # Truncation
//!
//! Radii are integers. Conversions discard the fractional part toward zero
//! (`2.83` becomes `2`, `-2.83` becomes `-2`), saturate at the `i32` bounds,
//! and map `NaN` to `0`.
//!
//! # Features
//!
//! - `log`: Emit `trace!` records for every conversion

#![warn(missing_docs)]

// Core layers
pub mod adapters;
pub mod domain;

// Re-export commonly used types for convenience
pub use domain::{
    HexagonPeg, PegKind, Radius, RoundHole, RoundPeg, ShapeError, SideLength, SquarePeg,
};

pub use adapters::{AnyPeg, FixedRoundPeg, HexagonPegAdapter, SquarePegAdapter};
