//! Adapter layer - peg variants plugged into the `RoundPeg` port.
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - RoundPeg (port)               │
//!     │  - geometry (conversions)        │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implements
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - SquarePegAdapter              │
//!     │  - HexagonPegAdapter             │
//!     │  - FixedRoundPeg                 │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ wraps
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  Shape holders (SquarePeg, ...)  │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`SquarePegAdapter`**: Adapts `SquarePeg` to the `RoundPeg` port
//! - **`HexagonPegAdapter`**: Adapts `HexagonPeg` to the `RoundPeg` port
//! - **`FixedRoundPeg`**: Direct implementation with a constant radius
//! - **`AnyPeg`**: Enum over the three, for pegs chosen at runtime

mod any_peg;
mod fixed_round_peg;
mod hexagon_peg_adapter;
mod square_peg_adapter;

pub use any_peg::AnyPeg;
pub use fixed_round_peg::FixedRoundPeg;
pub use hexagon_peg_adapter::HexagonPegAdapter;
pub use square_peg_adapter::SquarePegAdapter;
