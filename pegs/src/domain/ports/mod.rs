//! Ports define the interfaces between the domain and the outside world.
//!
//! In hexagonal architecture terms `RoundPeg` is a **primary (driving)
//! port**: it is what callers program against, and every peg variant in the
//! adapter layer plugs into it.

mod round_peg;

pub use round_peg::RoundPeg;
