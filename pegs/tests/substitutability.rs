//! Substitutability tests for the RoundPeg port
//!
//! The same assertion battery runs against every peg variant through:
//! - a generic `impl RoundPeg` parameter
//! - a `&dyn RoundPeg` reference
//! - a `Box<dyn RoundPeg>`
//! - the `AnyPeg` enum

use pegs::{
    AnyPeg, FixedRoundPeg, HexagonPeg, HexagonPegAdapter, PegKind, Radius, RoundHole, RoundPeg,
    SideLength, SquarePeg, SquarePegAdapter,
};

/// Checks every peg must pass, whatever its variant.
fn check_round_peg<P: RoundPeg>(peg: P, expected: i32) {
    let first = peg.radius();
    assert_eq!(first, Radius::new(expected));
    // Pure: no state changes between calls
    for _ in 0..3 {
        assert_eq!(peg.radius(), first);
    }
    assert!(first.value() >= 0, "non-negative input must give non-negative radius");
}

fn demo_pegs() -> Vec<(Box<dyn RoundPeg>, i32)> {
    vec![
        (Box::new(FixedRoundPeg::new(3)), 3),
        (Box::new(SquarePegAdapter::new(SquarePeg::new(4))), 2),
        (Box::new(HexagonPegAdapter::new(HexagonPeg::new(6))), 5),
    ]
}

#[test]
fn test_generic_battery() {
    check_round_peg(FixedRoundPeg::new(3), 3);
    check_round_peg(SquarePegAdapter::new(SquarePeg::new(4)), 2);
    check_round_peg(HexagonPegAdapter::new(HexagonPeg::new(6)), 5);
}

#[test]
fn test_dyn_reference_battery() {
    let round = FixedRoundPeg::new(3);
    let square = SquarePegAdapter::new(SquarePeg::new(4));
    let hexagon = HexagonPegAdapter::new(HexagonPeg::new(6));

    let pegs: [(&dyn RoundPeg, i32); 3] = [(&round, 3), (&square, 2), (&hexagon, 5)];
    for (peg, expected) in pegs {
        check_round_peg(peg, expected);
    }
}

#[test]
fn test_boxed_battery() {
    for (peg, expected) in demo_pegs() {
        check_round_peg(peg, expected);
    }
}

#[test]
fn test_any_peg_battery() {
    let cases = [
        (PegKind::Round, 3.0, 3),
        (PegKind::Square, 4.0, 2),
        (PegKind::Hexagon, 6.0, 5),
    ];
    for (kind, dimension, expected) in cases {
        let peg = AnyPeg::from_kind(kind, SideLength::new(dimension));
        assert_eq!(peg.kind(), kind);
        check_round_peg(peg, expected);
    }
}

#[test]
fn test_zero_side_battery() {
    check_round_peg(SquarePegAdapter::new(SquarePeg::new(0)), 0);
    check_round_peg(HexagonPegAdapter::new(HexagonPeg::new(0)), 0);
    check_round_peg(FixedRoundPeg::new(0), 0);
}

#[test]
fn test_hole_is_independent_of_pegs() {
    let hole = RoundHole::new(5);
    let total: i32 = demo_pegs().iter().map(|(peg, _)| peg.radius().value()).sum();
    assert_eq!(total, 10);
    assert_eq!(hole.radius().value(), 5);
}
