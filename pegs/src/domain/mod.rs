//! Domain layer - shapes, radii and the conversions between them.
//!
//! The domain layer contains:
//! - **Entities**: Shape value holders (`SquarePeg`, `HexagonPeg`, `RoundHole`)
//! - **Value Objects**: `SideLength`, `Radius`, `PegKind`
//! - **Geometry**: Pure side-length to radius conversions
//! - **Ports**: The `RoundPeg` capability
//! - **Domain Errors**: Failures when reading pegs from text
//!
//! # Hexagonal Architecture
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Entities & Value Objects  │  │
//!     │  │  - SquarePeg, Radius, etc. │  │
//!     │  └────────────────────────────┘  │
//!     │              ▲                   │
//!     │              │                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Geometry                │  │
//!     │  │    - *_equivalent_radius   │  │
//!     │  └────────────────────────────┘  │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │    - RoundPeg              │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ implemented by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - SquarePegAdapter              │
//!     │  - HexagonPegAdapter             │
//!     │  - FixedRoundPeg                 │
//!     └──────────────────────────────────┘
//! ```
//!
//! Shape holders never implement `RoundPeg` themselves. An adapter owns one
//! holder and translates its dimension; it does not pretend to be the shape.

pub mod entities;
pub mod error;
pub mod geometry;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{HexagonPeg, RoundHole, SquarePeg};
pub use error::ShapeError;
pub use ports::RoundPeg;
pub use value_objects::{PegKind, Radius, SideLength};
