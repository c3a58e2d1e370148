//! Command-line interface definitions and command dispatch

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use pegs::{
    FixedRoundPeg, HexagonPeg, HexagonPegAdapter, PegKind, RoundHole, RoundPeg, SquarePeg,
    SquarePegAdapter,
};

use crate::peg_spec;

/// Round peg adapters - report the radius of round, square and hexagonal pegs
#[derive(Parser)]
#[command(name = "pegs")]
#[command(version)]
#[command(about = "Fit square and hexagonal pegs into a round-peg world", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the sample pegs and print their radii (default)
    Demo,

    /// Print the radius of each given peg
    Radius {
        /// Pegs as 'kind:dimension', e.g. round:3 square:4 hexagon:6
        #[arg(required = true, value_name = "KIND:DIMENSION")]
        specs: Vec<String>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => write_demo(&mut out),
        Commands::Radius { specs } => write_radii(&mut out, &specs),
    }
}

/// Construct the sample pegs and print one line per peg
pub fn write_demo<W: Write>(out: &mut W) -> Result<()> {
    let round_hole = RoundHole::new(5);
    debug!("Constructed round hole with radius {}", round_hole.radius());

    let round_peg = FixedRoundPeg::new(3);
    let square_peg_adapter = SquarePegAdapter::new(SquarePeg::new(4));
    let hexagon_peg = HexagonPeg::new(6);
    let hexagon_peg_adapter = HexagonPegAdapter::new(hexagon_peg);

    let pegs: [(PegKind, &dyn RoundPeg); 3] = [
        (PegKind::Round, &round_peg),
        (PegKind::Square, &square_peg_adapter),
        (PegKind::Hexagon, &hexagon_peg_adapter),
    ];

    for (kind, peg) in pegs {
        debug!("Querying {} peg", kind);
        write_radius(out, kind.label(), peg)?;
    }

    Ok(())
}

/// Parse every spec up front, then print one line per peg in argument order
pub fn write_radii<W: Write, S: AsRef<str>>(out: &mut W, specs: &[S]) -> Result<()> {
    let specs = peg_spec::parse_all(specs)?;
    info!("Computing radii for {} peg(s)", specs.len());

    for spec in specs {
        let peg = spec.into_peg();
        write_radius(out, peg.label(), &peg)?;
    }

    Ok(())
}

fn write_radius<W: Write>(out: &mut W, label: &str, peg: &dyn RoundPeg) -> Result<()> {
    writeln!(out, "{}: {}", label, peg.radius()).context("Failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_output() {
        let output = capture(|out| write_demo(out));
        assert_eq!(
            output,
            "Round Peg Radius: 3\n\
             Square Peg Adapter Radius: 2\n\
             Hexagon Peg Adapter Radius: 5\n"
        );
    }

    #[test]
    fn test_radii_output_in_argument_order() {
        let output = capture(|out| write_radii(out, &["hexagon:6", "round:3", "square:4"]));
        assert_eq!(
            output,
            "Hexagon Peg Adapter Radius: 5\n\
             Round Peg Radius: 3\n\
             Square Peg Adapter Radius: 2\n"
        );
    }

    #[test]
    fn test_radii_negative_truncates_toward_zero() {
        let output = capture(|out| write_radii(out, &["square:-4"]));
        assert_eq!(output, "Square Peg Adapter Radius: -2\n");
    }

    #[test]
    fn test_radii_error_prints_nothing() {
        let mut buf = Vec::new();
        let result = write_radii(&mut buf, &["square:4", "square:x"]);
        assert!(result.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_cli_defaults_to_demo() {
        let cli = Cli::try_parse_from(["pegs"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_radius_specs() {
        let cli = Cli::try_parse_from(["pegs", "radius", "square:4", "hex:6"]).unwrap();
        match cli.command {
            Some(Commands::Radius { specs }) => assert_eq!(specs, ["square:4", "hex:6"]),
            _ => panic!("Expected Radius command"),
        }
    }

    #[test]
    fn test_cli_radius_requires_specs() {
        assert!(Cli::try_parse_from(["pegs", "radius"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
