//! # Rinkdraw Parser
//!
//! Parser and model builder for the Rinkdraw drill notation. This crate turns
//! notation text into an immutable [`Diagram`]:
//!
//! 1. **Parse** - Split the source into statements and parse each one into
//!    an [`Instruction`]
//! 2. **Build** - Resolve endpoint references, clamp positions and assemble
//!    the scene model
//!
//! Neither step fails. Problems are reported as [`Diagnostic`]s next to the
//! diagram that could still be built, so a coach's typo on one line never
//! blanks the whole drill.
//!
//! ## Usage
//!
//! ```
//! # use rinkdraw_parser::parse;
//!
//! let source = "
//!     P1 20,50
//!     X2 60,40
//!     P1 -> 100,50 :pass
//! ";
//!
//! let parsed = parse(source);
//! assert!(parsed.diagnostics().is_empty());
//! assert_eq!(parsed.diagram().entities().len(), 2);
//! assert_eq!(parsed.diagram().paths().len(), 1);
//! ```

mod elaborate;
pub mod error;
mod instruction;
mod parser;
mod span;

pub use error::{Diagnostic, ErrorCode, ParseError, Phase, Severity};
pub use instruction::{Endpoint, Instruction, RegionKind};
pub use parser::parse_instructions;
pub use span::{Span, Spanned};

use log::{debug, info};
use rinkdraw_core::scene::Diagram;

use elaborate::Builder;

/// A diagram together with every diagnostic produced while building it.
#[derive(Debug, Clone)]
pub struct Parsed {
    diagram: Diagram,
    diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Diagnostics from parsing, then from building, each in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Diagram, Vec<Diagnostic>) {
        (self.diagram, self.diagnostics)
    }

    /// Returns the diagram if nothing was reported, or all diagnostics.
    pub fn into_strict(self) -> Result<Diagram, ParseError> {
        if self.diagnostics.is_empty() {
            Ok(self.diagram)
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}

/// Build a diagram from already parsed instructions.
///
/// Deterministic: equal instruction lists produce equal diagrams.
pub fn build_diagram(instructions: &[Spanned<Instruction>]) -> (Diagram, Vec<Diagnostic>) {
    Builder::new().build(instructions)
}

/// Parse notation text into a diagram.
///
/// # Example
///
/// ```
/// # use rinkdraw_parser::{parse, ErrorCode};
///
/// let parsed = parse("P1 20,abc\nP2 40,50");
/// assert_eq!(parsed.diagram().entities().len(), 1);
/// assert_eq!(parsed.diagnostics()[0].code(), Some(ErrorCode::E100));
/// ```
pub fn parse(source: &str) -> Parsed {
    info!(bytes = source.len(); "Parsing notation");

    let (instructions, mut diagnostics) = parse_instructions(source);
    debug!(
        instructions = instructions.len(),
        diagnostics = diagnostics.len();
        "Notation parsed"
    );

    let (diagram, build_diagnostics) = build_diagram(&instructions);
    diagnostics.extend(build_diagnostics);

    Parsed {
        diagram,
        diagnostics,
    }
}

/// Parse notation text, failing if any diagnostic is produced.
///
/// # Example
///
/// ```
/// # use rinkdraw_parser::parse_strict;
///
/// assert!(parse_strict("P1 20,50").is_ok());
/// assert!(parse_strict("P1 -> P9").is_err());
/// ```
pub fn parse_strict(source: &str) -> Result<Diagram, ParseError> {
    parse(source).into_strict()
}
