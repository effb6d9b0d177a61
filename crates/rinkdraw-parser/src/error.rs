//! Diagnostics for the Rinkdraw notation pipeline.
//!
//! Notation is written by coaches, often on a phone, so nothing in it is
//! fatal: a bad line is skipped, an unresolvable endpoint is dropped, and the
//! problem is reported as a [`Diagnostic`] next to the diagram that could
//! still be built. Callers that want an all-or-nothing result can turn the
//! collected diagnostics into a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use rinkdraw_parser::error::{Diagnostic, ErrorCode};
//! # use rinkdraw_parser::Span;
//!
//! let diag = Diagnostic::error("malformed coordinates for `P1`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(3..9), "expected `x,y`")
//!     .with_help("write positions as two numbers, e.g. `P1 20,50`");
//! assert_eq!(diag.to_string(), "error[E100]: malformed coordinates for `P1`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, Phase};
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
