//! Shape value holders.
//!
//! Each holder carries a single dimension, fixed at construction and exposed
//! read-only. None of them knows about radii or the `RoundPeg` port; that
//! translation is the job of the adapters.

mod hexagon_peg;
mod round_hole;
mod square_peg;

pub use hexagon_peg::HexagonPeg;
pub use round_hole::RoundHole;
pub use square_peg::SquarePeg;
