//! Peg specification parsing for CLI commands
//!
//! Pegs are described on the command line as `kind:dimension`:
//!
//! - `round:3` - a round peg of radius 3
//! - `square:4` - a square peg with side length 4
//! - `hexagon:6` (or `hex:6`) - a regular hexagonal peg with side length 6
//!
//! Kinds are case-insensitive. Dimensions may be fractional or negative.

use anyhow::{Context, Result};
use pegs::{AnyPeg, PegKind, SideLength};

/// A parsed `kind:dimension` peg specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegSpec {
    pub kind: PegKind,
    pub dimension: SideLength,
}

impl PegSpec {
    /// Parse a peg specification string
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let spec = PegSpec::parse("square:4").unwrap();
    /// assert_eq!(spec.kind, PegKind::Square);
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let Some((kind, dimension)) = spec.split_once(':') else {
            anyhow::bail!(
                "Peg '{}' is missing a dimension. Use 'kind:dimension' notation, e.g. 'square:4'.",
                spec
            );
        };

        let kind: PegKind = kind
            .parse()
            .with_context(|| format!("Failed to parse peg kind in '{}'", spec))?;
        let dimension: SideLength = dimension
            .parse()
            .with_context(|| format!("Failed to parse dimension in '{}'", spec))?;

        Ok(Self { kind, dimension })
    }

    /// Build the peg this spec describes
    pub fn into_peg(self) -> AnyPeg {
        AnyPeg::from_kind(self.kind, self.dimension)
    }
}

/// Parse every spec, failing on the first malformed one
pub fn parse_all<S: AsRef<str>>(specs: &[S]) -> Result<Vec<PegSpec>> {
    specs.iter().map(|s| PegSpec::parse(s.as_ref())).collect()
}
