//! Error types for Rinkdraw operations.
//!
//! This module provides the main error type [`RinkdrawError`] which wraps
//! the error conditions that can stop a caller-facing operation. Recoverable
//! problems in the notation never end up here; they are reported as
//! diagnostics next to the diagram.

use std::io;

use thiserror::Error;

use rinkdraw_parser::ParseError;

/// The main error type for Rinkdraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant is only produced by strict parsing. It keeps the
/// source text so the diagnostics' spans can be shown in context.
#[derive(Debug, Error)]
pub enum RinkdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RinkdrawError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl RinkdrawError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
