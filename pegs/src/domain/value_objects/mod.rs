//! Value objects for the domain layer.
//!
//! Value objects are immutable data types that represent concepts in the
//! domain model. They keep side lengths and radii from being mixed up with
//! each other or with bare numbers.

mod peg_kind;
mod radius;
mod side_length;

pub use peg_kind::PegKind;
pub use radius::Radius;
pub use side_length::SideLength;
